use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::{DutyEntry, DutyKind, DutyStatus, Employee, ScheduleStatus, WorkSchedule};

/// 当番カレンダー1マス分の表示データ
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyCalendarCellDto {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_weekend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty: Option<DutyEntry>,
}

/// ダッシュボード表示用の当日集計
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: usize,
    /// 承認済み休暇に入っていない職員数
    pub working_today: usize,
    pub on_leave_today: usize,
    pub today_schedules: usize,
    /// 今日以降の承認済み当番 (直近2件)
    pub upcoming_duties: Vec<DutyEntry>,
}

/// 週間勤務表の1行 (職員1名 × 7日)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekScheduleRow {
    pub employee: Employee,
    pub cells: Vec<Option<WorkSchedule>>,
}

/// 週間勤務表 (月曜始まり)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekScheduleView {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<WeekScheduleRow>,
}

// =====================
// 書き出し用レコード
// =====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeExportRow {
    pub code: String,
    pub last_name: String,
    pub first_name: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub level: i64,
    pub transfer_date: NaiveDate,
    pub completion_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyExportRow {
    pub date: NaiveDate,
    /// 当番者の氏名をカンマ区切りにしたもの
    pub employees: String,
    #[serde(rename = "type")]
    pub kind: DutyKind,
    pub status: DutyStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleExportRow {
    pub date: NaiveDate,
    pub employee: String,
    pub department: String,
    /// 設定から引いた勤務時間帯 ("08:30-16:30")
    pub shift_hours: String,
    pub location: String,
    pub status: ScheduleStatus,
}

/// 設定の書き出し (設定JSONを丸ごと1レコードに埋め込む)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsExportRow {
    pub section: String,
    pub data: String,
}
