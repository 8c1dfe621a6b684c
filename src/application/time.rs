use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// カレンダー1マス分
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// 7列 x 6行の固定グリッド
pub const CALENDAR_CELLS: usize = 42;

/// 指定された年・月のカレンダーグリッド(42マス)を生成する
/// ※ month: 0 (1月) 〜 11 (12月)
/// ※ 日曜始まり (Sunday start)
///
/// 前月末の埋めマス + 当月の全日 + 翌月頭の埋めマス で必ず42マスになるため、
/// 月の長さや開始曜日によらず6行のグリッドを描画できる。
/// 出力は日付の昇順で全順序が保証される。
pub fn calendar_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    // NaiveDate は 1-12 月を期待するため、引数 month(0-11) に +1 する
    let first_day = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .expect("Invalid date provided (month should be 0-11)");

    // 1日の曜日オフセット (日曜=0, 月曜=1, ..., 土曜=6)
    let start_offset = first_day.weekday().num_days_from_sunday() as i64;

    let mut cells = Vec::with_capacity(CALENDAR_CELLS);

    // 1. 前月末の埋めマス
    for i in (1..=start_offset).rev() {
        cells.push(CalendarCell {
            date: first_day - Duration::days(i),
            is_current_month: false,
        });
    }

    // 2. 当月の全日
    let mut day = first_day;
    while day.month0() == month {
        cells.push(CalendarCell {
            date: day,
            is_current_month: true,
        });
        day = day + Duration::days(1);
    }

    // 3. 翌月頭の埋めマス (42マスに到達するまで)
    while cells.len() < CALENDAR_CELLS {
        cells.push(CalendarCell {
            date: day,
            is_current_month: false,
        });
        day = day + Duration::days(1);
    }

    cells
}

/// 土日かどうか
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 指定月の週末(土日)の日付を昇順で列挙する
/// ※ month: 0 (1月) 〜 11 (12月)
pub fn weekend_dates_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .expect("Invalid date provided (month should be 0-11)");

    let mut dates = Vec::new();
    let mut day = first_day;
    while day.month0() == month {
        if is_weekend(day) {
            dates.push(day);
        }
        day = day + Duration::days(1);
    }
    dates
}

/// 基準日を含む週の7日間 (月曜始まり)
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let offset = reference.weekday().num_days_from_monday() as i64;
    let monday = reference - Duration::days(offset);
    core::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// 休暇日数 (両端の日付を含む)
pub fn count_leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// 勤続年数 (小数1桁に切り捨て)
pub fn years_of_service(transfer_date: NaiveDate, today: NaiveDate) -> f64 {
    let days = (today - transfer_date).num_days() as f64;
    (days / 365.25 * 10.0).floor() / 10.0
}

/// 任期満了日までの残日数。過ぎている場合は負になる
pub fn days_until_completion(completion_date: NaiveDate, today: NaiveDate) -> i64 {
    (completion_date - today).num_days()
}
