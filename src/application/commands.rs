use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::application::dto::{
    DashboardSummary,
    DutyCalendarCellDto,
    DutyExportRow,
    EmployeeExportRow,
    SettingsExportRow,
    WeekScheduleRow,
    WeekScheduleView,
    WorkScheduleExportRow,
};
use crate::application::time::{
    calendar_grid,
    count_leave_days,
    is_weekend,
    week_days,
    weekend_dates_in_month,
};
use crate::domain::models::{
    ApprovalStatus,
    ChangeRequest,
    DutyEntry,
    DutyId,
    DutyKind,
    DutyStatus,
    Employee,
    EmployeeId,
    Holiday,
    HolidayId,
    HolidayKind,
    Leave,
    LeaveId,
    LeaveKind,
    RequestId,
    ScheduleId,
    ShiftKind,
    WorkSchedule,
};
use crate::domain::settings_model::SystemSettings;
use crate::infrastructure::duty_repo::{NewChangeRequest, NewDuty};
use crate::infrastructure::employee_repo::NewEmployee;
use crate::infrastructure::leave_repo::NewLeave;
use crate::infrastructure::schedule_repo::NewWorkSchedule;
use crate::infrastructure::store::RepoError;
use crate::infrastructure::transfer;
use crate::AppServices;

// --- Duty Commands ---

/// 当番カレンダーの表示データを作る (42マス + 当番の紐付け)
/// ※ month: 0 (1月) 〜 11 (12月)
pub fn duty_calendar(
    services: &AppServices,
    year: i32,
    month: u32,
) -> Result<Vec<DutyCalendarCellDto>, String> {
    let roster = services.roster.list().map_err(|e| e.to_string())?;

    Ok(calendar_grid(year, month)
        .into_iter()
        .map(|cell| {
            let duty = roster.iter().find(|d| d.date == cell.date).cloned();
            DutyCalendarCellDto {
                date: cell.date,
                is_current_month: cell.is_current_month,
                is_weekend: is_weekend(cell.date),
                duty,
            }
        })
        .collect())
}

/// 当番を手動で登録する (下書き状態)
pub fn create_duty(
    services: &AppServices,
    date: NaiveDate,
    employees: Vec<EmployeeId>,
    kind: DutyKind,
) -> Result<DutyEntry, String> {
    services
        .roster
        .create(NewDuty {
            date,
            employees,
            kind,
        })
        .map_err(|e| e.to_string())
}

pub fn update_duty(services: &AppServices, entry: &DutyEntry) -> Result<(), String> {
    services.roster.update(entry).map_err(|e| e.to_string())
}

pub fn approve_duty(services: &AppServices, id: DutyId) -> Result<(), String> {
    services.roster.approve(id).map_err(|e| e.to_string())
}

/// 未割り当ての週末に当番を自動で割り当てる。
/// ※ month: 0 (1月) 〜 11 (12月)
///
/// 対象レベルの職員を登録順(ID昇順)に並べ、カーソルを進めながら
/// 1日につき規定人数を割り当てる。カーソルは剰余で先頭に巻き戻るため、
/// 月内では均等に回る。月をまたいだ負荷の平準化や同一ペアの回避はしない。
/// 既存の当番がある日付には触れない。
pub fn auto_assign_weekend_duty(
    services: &AppServices,
    year: i32,
    month: u32,
) -> Result<Vec<DutyEntry>, String> {
    let settings = services.settings.get().map_err(|e| e.to_string())?;

    // list() はID昇順なのでそのまま登録順として使う
    let eligible: Vec<Employee> = services
        .employee
        .list()
        .map_err(|e| e.to_string())?
        .into_iter()
        .filter(|e| settings.duty.is_eligible(e.level))
        .collect();

    if eligible.is_empty() {
        warn!("対象レベルの職員がいないため自動割り当てをスキップします");
        return Ok(Vec::new());
    }

    let roster = services.roster.list().map_err(|e| e.to_string())?;
    let per_duty = settings.duty.employees_per_duty.max(1);

    let mut cursor = 0usize;
    let mut new_duties = Vec::new();
    for date in weekend_dates_in_month(year, month) {
        if roster.iter().any(|d| d.date == date) {
            continue;
        }
        // 対象人数が規定人数に満たない場合は同じ職員が重複して入る
        let assigned = (0..per_duty)
            .map(|_| {
                let id = eligible[cursor % eligible.len()].id;
                cursor += 1;
                id
            })
            .collect();
        new_duties.push(NewDuty {
            date,
            employees: assigned,
            kind: DutyKind::Weekend,
        });
    }

    let created = services
        .roster
        .create_many(new_duties)
        .map_err(|e| e.to_string())?;
    info!(count = created.len(), "週末当番の自動割り当てが完了しました");
    Ok(created)
}

// --- Change Request Commands ---

/// 当番の変更申請を受け付ける。
/// fromが実際にその日の当番かどうか、toが対象レベルかどうかは検証しない
pub fn submit_change_request(
    services: &AppServices,
    from_employee: EmployeeId,
    to_employee: EmployeeId,
    date: NaiveDate,
    reason: &str,
    today: NaiveDate,
) -> Result<ChangeRequest, String> {
    services
        .request
        .submit(NewChangeRequest {
            from_employee,
            to_employee,
            date,
            reason: reason.to_string(),
            request_date: today,
        })
        .map_err(|e| e.to_string())
}

/// 変更申請を承認し、当番表に入れ替えを反映する。
/// すでに終端状態の申請は何もしない。
/// 対象日の当番が存在しない場合も申請自体は承認扱いにする
pub fn approve_change_request(
    services: &AppServices,
    request_id: RequestId,
    approved_by: &str,
) -> Result<(), String> {
    let mut request = services
        .request
        .find(request_id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| String::from("対象の変更申請が見つかりません"))?;

    if request.status != ApprovalStatus::Pending {
        return Ok(());
    }

    // 1. 当番表へ入れ替えを反映
    match services
        .roster
        .apply_employee_swap(request.date, request.from_employee, request.to_employee)
    {
        Ok(()) => {}
        Err(RepoError::NotFound(_)) => {
            warn!(date = %request.date, "変更申請の対象日に当番が存在しません");
        }
        Err(e) => return Err(e.to_string()),
    }

    // 2. 申請を承認済みにする
    request.approve(approved_by);
    services.request.update(&request).map_err(|e| e.to_string())
}

/// 変更申請を却下する。当番表には触れない
pub fn reject_change_request(services: &AppServices, request_id: RequestId) -> Result<(), String> {
    let mut request = services
        .request
        .find(request_id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| String::from("対象の変更申請が見つかりません"))?;

    if !request.reject() {
        // 終端状態の申請はそのまま
        return Ok(());
    }
    services.request.update(&request).map_err(|e| e.to_string())
}

pub fn list_pending_change_requests(services: &AppServices) -> Result<Vec<ChangeRequest>, String> {
    services.request.list_pending().map_err(|e| e.to_string())
}

// --- Leave Commands ---

/// 休暇申請を受け付ける。日数は両端を含めて自動計算する
pub fn submit_leave(
    services: &AppServices,
    employee_id: EmployeeId,
    kind: LeaveKind,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> Result<Leave, String> {
    let days = count_leave_days(start_date, end_date);
    services
        .leave
        .submit(NewLeave {
            employee_id,
            kind,
            start_date,
            end_date,
            days,
            reason: reason.to_string(),
        })
        .map_err(|e| e.to_string())
}

pub fn approve_leave(
    services: &AppServices,
    id: LeaveId,
    approved_by: &str,
) -> Result<(), String> {
    services
        .leave
        .approve(id, approved_by)
        .map_err(|e| e.to_string())
}

pub fn reject_leave(services: &AppServices, id: LeaveId) -> Result<(), String> {
    services.leave.reject(id).map_err(|e| e.to_string())
}

/// 年休の残日数。マイナスにはならない
pub fn leave_balance(services: &AppServices, employee_id: EmployeeId) -> Result<i64, String> {
    let settings = services.settings.get().map_err(|e| e.to_string())?;
    let used = services
        .leave
        .used_vacation_days(employee_id)
        .map_err(|e| e.to_string())?;
    Ok((settings.leave.annual_leave - used).max(0))
}

/// 指定日に取得中の承認済み休暇
pub fn leaves_on(services: &AppServices, date: NaiveDate) -> Result<Vec<Leave>, String> {
    services.leave.approved_on(date).map_err(|e| e.to_string())
}

/// 月内に開始する承認済み休暇の種別ごとの件数
/// ※ month: 0 (1月) 〜 11 (12月)
pub fn monthly_leave_counts(
    services: &AppServices,
    year: i32,
    month: u32,
) -> Result<Vec<(LeaveKind, usize)>, String> {
    let leaves = services.leave.list().map_err(|e| e.to_string())?;

    let count_for = |kind: LeaveKind| {
        leaves
            .iter()
            .filter(|l| {
                l.kind == kind
                    && l.status == ApprovalStatus::Approved
                    && l.start_date.year() == year
                    && l.start_date.month0() == month
            })
            .count()
    };

    Ok(vec![
        (LeaveKind::Personal, count_for(LeaveKind::Personal)),
        (LeaveKind::Vacation, count_for(LeaveKind::Vacation)),
        (LeaveKind::Sick, count_for(LeaveKind::Sick)),
        (LeaveKind::Hourly, count_for(LeaveKind::Hourly)),
    ])
}

/// 職員・種別での休暇一覧の絞り込み
pub fn filter_leaves(
    services: &AppServices,
    employee_id: Option<EmployeeId>,
    kind: Option<LeaveKind>,
) -> Result<Vec<Leave>, String> {
    let leaves = services.leave.list().map_err(|e| e.to_string())?;
    Ok(leaves
        .into_iter()
        .filter(|l| {
            let matches_employee = employee_id.map_or(true, |id| l.employee_id == id);
            let matches_kind = kind.map_or(true, |k| l.kind == k);
            matches_employee && matches_kind
        })
        .collect())
}

// --- Work Schedule Commands ---

pub fn create_work_schedule(
    services: &AppServices,
    employee_id: EmployeeId,
    date: NaiveDate,
    shift: ShiftKind,
    location: &str,
) -> Result<WorkSchedule, String> {
    services
        .schedule
        .create(NewWorkSchedule {
            employee_id,
            date,
            shift,
            location: location.to_string(),
        })
        .map_err(|e| e.to_string())
}

pub fn update_work_schedule(services: &AppServices, schedule: &WorkSchedule) -> Result<(), String> {
    services
        .schedule
        .update(schedule)
        .map_err(|e| e.to_string())
}

pub fn mark_schedule_completed(services: &AppServices, id: ScheduleId) -> Result<(), String> {
    services
        .schedule
        .mark_completed(id)
        .map_err(|e| e.to_string())
}

pub fn mark_schedule_absent(services: &AppServices, id: ScheduleId) -> Result<(), String> {
    services.schedule.mark_absent(id).map_err(|e| e.to_string())
}

/// 週間勤務表 (基準日を含む月曜始まりの1週間 × 職員)
pub fn week_schedule_view(
    services: &AppServices,
    reference: NaiveDate,
    department: Option<&str>,
) -> Result<WeekScheduleView, String> {
    let days = week_days(reference);
    let employees = services
        .employee
        .search("", department)
        .map_err(|e| e.to_string())?;
    let schedules = services.schedule.list().map_err(|e| e.to_string())?;

    let rows = employees
        .into_iter()
        .map(|employee| {
            let cells = days
                .iter()
                .map(|day| {
                    schedules
                        .iter()
                        .find(|s| s.employee_id == employee.id && s.date == *day)
                        .cloned()
                })
                .collect();
            WeekScheduleRow { employee, cells }
        })
        .collect();

    Ok(WeekScheduleView {
        days: days.to_vec(),
        rows,
    })
}

/// 特別手当の計算。
/// 午後勤務は平日でも手当が付き、週末は勤務帯によらず週末手当になる
pub fn special_pay(shift: ShiftKind, date: NaiveDate, settings: &SystemSettings) -> i64 {
    let weekend = is_weekend(date);
    if shift.is_afternoon() {
        if weekend {
            settings.special_pay.weekend_pay
        } else {
            settings.special_pay.afternoon_pay
        }
    } else if weekend {
        settings.special_pay.weekend_pay
    } else {
        0
    }
}

// --- Employee Commands ---

pub fn list_employees(services: &AppServices) -> Result<Vec<Employee>, String> {
    services.employee.list().map_err(|e| e.to_string())
}

pub fn search_employees(
    services: &AppServices,
    term: &str,
    department: Option<&str>,
) -> Result<Vec<Employee>, String> {
    services
        .employee
        .search(term, department)
        .map_err(|e| e.to_string())
}

pub fn create_employee(services: &AppServices, input: NewEmployee) -> Result<Employee, String> {
    services.employee.create(input).map_err(|e| e.to_string())
}

pub fn update_employee(services: &AppServices, employee: &Employee) -> Result<(), String> {
    services
        .employee
        .update(employee)
        .map_err(|e| e.to_string())
}

pub fn delete_employee(services: &AppServices, id: EmployeeId) -> Result<(), String> {
    services.employee.delete(id).map_err(|e| e.to_string())
}

// --- Export / Import Commands ---

/// 職員一覧の書き出し
pub fn export_employees(services: &AppServices, out_dir: &Path) -> Result<PathBuf, String> {
    let rows: Vec<EmployeeExportRow> = services
        .employee
        .list()
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|e| EmployeeExportRow {
            code: e.code,
            last_name: e.last_name,
            first_name: e.first_name,
            position: e.position,
            department: e.department,
            phone: e.phone,
            level: e.level,
            transfer_date: e.transfer_date,
            completion_date: e.completion_date,
        })
        .collect();
    transfer::export_records(&rows, "employees", out_dir).map_err(|e| e.to_string())
}

/// 当番表の書き出し。当番者は氏名をカンマ区切りにする
pub fn export_duty_roster(services: &AppServices, out_dir: &Path) -> Result<PathBuf, String> {
    let employees = services.employee.list().map_err(|e| e.to_string())?;
    let name_of = |id: EmployeeId| {
        employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.full_name())
            .unwrap_or_else(|| String::from("(不明)"))
    };

    let rows: Vec<DutyExportRow> = services
        .roster
        .list()
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|d| DutyExportRow {
            date: d.date,
            employees: d
                .employees
                .iter()
                .map(|id| name_of(*id))
                .collect::<Vec<_>>()
                .join(", "),
            kind: d.kind,
            status: d.status,
        })
        .collect();
    transfer::export_records(&rows, "duty_roster", out_dir).map_err(|e| e.to_string())
}

/// 勤務表の書き出し。勤務時間帯は設定から引く
pub fn export_work_schedules(services: &AppServices, out_dir: &Path) -> Result<PathBuf, String> {
    let settings = services.settings.get().map_err(|e| e.to_string())?;
    let employees = services.employee.list().map_err(|e| e.to_string())?;

    let rows: Vec<WorkScheduleExportRow> = services
        .schedule
        .list()
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|s| {
            let employee = employees.iter().find(|e| e.id == s.employee_id);
            let hours = settings.work_schedule.hours_for(s.shift);
            WorkScheduleExportRow {
                date: s.date,
                employee: employee
                    .map(|e| e.full_name())
                    .unwrap_or_else(|| String::from("(不明)")),
                department: employee
                    .map(|e| e.department.clone())
                    .unwrap_or_default(),
                shift_hours: format!("{}-{}", hours.start, hours.end),
                location: s.location,
                status: s.status,
            }
        })
        .collect();
    transfer::export_records(&rows, "work_schedules", out_dir).map_err(|e| e.to_string())
}

/// 職員データの取り込み。
/// 現状は読み込んで件数を返すだけで、台帳への反映はしない
// TODO 取り込んだレコードを職員台帳へ反映する処理は未実装
pub fn import_employees(_services: &AppServices, path: &Path) -> Result<usize, String> {
    let rows = transfer::import_records(path).map_err(|e| e.to_string())?;
    info!(count = rows.len(), "職員データを読み込みました");
    Ok(rows.len())
}

// --- Holiday Commands ---

pub fn list_holidays(services: &AppServices) -> Result<Vec<Holiday>, String> {
    services.holiday.list().map_err(|e| e.to_string())
}

pub fn create_holiday(
    services: &AppServices,
    date: NaiveDate,
    name: &str,
    kind: HolidayKind,
) -> Result<Holiday, String> {
    services
        .holiday
        .create(date, name, kind)
        .map_err(|e| e.to_string())
}

pub fn delete_holiday(services: &AppServices, id: HolidayId) -> Result<(), String> {
    services.holiday.delete(id).map_err(|e| e.to_string())
}

/// 祝日かどうか (当番種別 holiday の判定に使う)
pub fn is_holiday(services: &AppServices, date: NaiveDate) -> Result<bool, String> {
    services.holiday.is_holiday(date).map_err(|e| e.to_string())
}

// --- Dashboard ---

/// 当日のダッシュボード集計
pub fn dashboard_summary(
    services: &AppServices,
    today: NaiveDate,
) -> Result<DashboardSummary, String> {
    let employees = services.employee.list().map_err(|e| e.to_string())?;
    let leaves_today = services
        .leave
        .approved_on(today)
        .map_err(|e| e.to_string())?;
    let schedules = services.schedule.list().map_err(|e| e.to_string())?;
    let roster = services.roster.list().map_err(|e| e.to_string())?;

    let working_today = employees
        .iter()
        .filter(|e| !leaves_today.iter().any(|l| l.employee_id == e.id))
        .count();

    // list()は日付昇順なので先頭から2件が直近になる
    let upcoming_duties: Vec<DutyEntry> = roster
        .into_iter()
        .filter(|d| d.date >= today && d.status == DutyStatus::Approved)
        .take(2)
        .collect();

    Ok(DashboardSummary {
        total_employees: employees.len(),
        working_today,
        on_leave_today: leaves_today.len(),
        today_schedules: schedules.iter().filter(|s| s.date == today).count(),
        upcoming_duties,
    })
}

// --- Settings Commands ---

pub fn get_settings(services: &AppServices) -> Result<SystemSettings, String> {
    services.settings.get().map_err(|e| e.to_string())
}

pub fn update_settings(services: &AppServices, settings: &SystemSettings) -> Result<(), String> {
    services
        .settings
        .update(settings)
        .map_err(|e| e.to_string())
}

pub fn reset_settings(services: &AppServices) -> Result<SystemSettings, String> {
    services.settings.reset().map_err(|e| e.to_string())
}

/// 設定の書き出し (設定JSONを1レコードに埋め込む)
pub fn export_settings(services: &AppServices, out_dir: &Path) -> Result<PathBuf, String> {
    let settings = services.settings.get().map_err(|e| e.to_string())?;
    let rows = vec![SettingsExportRow {
        section: String::from("System Settings"),
        data: serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?,
    }];
    transfer::export_records(&rows, "system_settings", out_dir).map_err(|e| e.to_string())
}

/// 設定の取り込み。欠けている項目は既定値で補われる
pub fn import_settings(services: &AppServices, path: &Path) -> Result<SystemSettings, String> {
    let rows = transfer::import_records(path).map_err(|e| e.to_string())?;
    let data = rows
        .first()
        .and_then(|r| r.get("data"))
        .and_then(|d| d.as_str())
        .ok_or_else(|| String::from("設定データの形式が不正です"))?;

    let settings: SystemSettings = serde_json::from_str(data).map_err(|e| e.to_string())?;
    services
        .settings
        .update(&settings)
        .map_err(|e| e.to_string())?;
    Ok(settings)
}
