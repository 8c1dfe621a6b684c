// =====================
// ドメインモデル定義
// =====================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 各コレクションのIDの型エイリアス
pub type EmployeeId = i64;
pub type DutyId = i64;
pub type RequestId = i64;
pub type LeaveId = i64;
pub type ScheduleId = i64;
pub type HolidayId = i64;

/// 部署の一覧 (表示順)
pub const DEPARTMENTS: &[&str] = &[
    "所長",
    "副所長",
    "審査課",
    "計数課",
    "鑑査課",
    "廃棄課",
    "技術課",
    "午後勤務課",
    "総務課",
    "金庫室",
    "応援課",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyKind {
    Weekend,
    Holiday,
    Special,
}

/// 当番のライフサイクル: draft -> approved -> completed
/// completedは外部トリガーでのみ到達する終端状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyStatus {
    Draft,
    Approved,
    Completed,
}

/// 申請系(変更申請・休暇申請)の共通ステータス
/// pendingが初期状態。approved / rejected は終端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveKind {
    Personal,
    Vacation,
    Sick,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
    Completed,
    Absent,
}

/// 勤務シフトの種別。午後勤務は開始時刻ごとに分かれる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftKind {
    #[serde(rename = "morning")]
    Morning,
    #[serde(rename = "afternoon-12")]
    Afternoon12,
    #[serde(rename = "afternoon-13")]
    Afternoon13,
    #[serde(rename = "afternoon-14")]
    Afternoon14,
    #[serde(rename = "afternoon-15")]
    Afternoon15,
    #[serde(rename = "afternoon-1550")]
    Afternoon1550,
}

impl ShiftKind {
    pub fn is_afternoon(self) -> bool {
        !matches!(self, ShiftKind::Morning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Public,
    Special,
    Bank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub brand: String,
    pub color: String,
    pub license_plate: String,
}

/// 職員台帳の1レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub level: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
    pub transfer_date: NaiveDate,
    pub completion_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// 当番表の1レコード。1日付につき1件が前提(重複チェックは呼び出し側)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyEntry {
    pub id: DutyId,
    pub date: NaiveDate,
    /// 確定後は2名。作成途中は0〜2名を許容する
    pub employees: Vec<EmployeeId>,
    #[serde(rename = "type")]
    pub kind: DutyKind,
    pub status: DutyStatus,
    #[serde(default)]
    pub was_changed: bool,
    /// 初回変更時の当番者リストのスナップショット。一度設定したら上書きしない
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_employees: Option<Vec<EmployeeId>>,
}

/// 当番変更申請
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub id: RequestId,
    pub from_employee: EmployeeId,
    pub to_employee: EmployeeId,
    pub date: NaiveDate,
    pub reason: String,
    pub status: ApprovalStatus,
    pub request_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// 休暇申請
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: LeaveId,
    pub employee_id: EmployeeId,
    #[serde(rename = "type")]
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 両端を含めた日数
    pub days: i64,
    pub reason: String,
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// 勤務表の1レコード (職員×日付)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    pub id: ScheduleId,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub shift: ShiftKind,
    pub location: String,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: HolidayId,
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}
