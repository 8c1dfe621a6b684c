use serde::{Deserialize, Serialize};

use crate::domain::models::ShiftKind;

// =====================
// システム設定
// =====================
// 設定は1つの文書として丸ごと保存・読み込みする。
// 各セクションにDefaultを実装しているので、部分的な文書を
// 読み込んだ場合は欠けたセクションが既定値で補われる。

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub organization: OrganizationSettings,
    pub work_schedule: WorkScheduleSettings,
    pub special_pay: SpecialPaySettings,
    pub leave: LeaveSettings,
    pub duty: DutySettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            organization: OrganizationSettings::default(),
            work_schedule: WorkScheduleSettings::default(),
            special_pay: SpecialPaySettings::default(),
            leave: LeaveSettings::default(),
            duty: DutySettings::default(),
            notifications: NotificationSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationSettings {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            name: String::from("職員勤務管理システム"),
            address: String::from("東京都千代田区丸の内1-2-3"),
            phone: String::from("03-1234-5678"),
            email: String::from("admin@example.co.jp"),
            logo: None,
        }
    }
}

/// シフト1枠の開始・終了時刻 ("HH:MM")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftHours {
    pub start: String,
    pub end: String,
}

impl ShiftHours {
    fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkScheduleSettings {
    pub work_days: Vec<String>,
    pub morning_shift: ShiftHours,
    pub afternoon_shifts: AfternoonShifts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AfternoonShifts {
    pub shift12: ShiftHours,
    pub shift13: ShiftHours,
    pub shift14: ShiftHours,
    pub shift15: ShiftHours,
    pub shift1550: ShiftHours,
}

impl Default for WorkScheduleSettings {
    fn default() -> Self {
        Self {
            work_days: ["monday", "tuesday", "wednesday", "thursday", "friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            morning_shift: ShiftHours::new("08:30", "16:30"),
            afternoon_shifts: AfternoonShifts::default(),
        }
    }
}

impl Default for AfternoonShifts {
    fn default() -> Self {
        Self {
            shift12: ShiftHours::new("12:00", "20:00"),
            shift13: ShiftHours::new("13:00", "21:00"),
            shift14: ShiftHours::new("14:00", "22:00"),
            shift15: ShiftHours::new("15:00", "23:00"),
            shift1550: ShiftHours::new("15:50", "23:50"),
        }
    }
}

impl WorkScheduleSettings {
    /// シフト種別に対応する勤務時間帯を返す
    pub fn hours_for(&self, shift: ShiftKind) -> &ShiftHours {
        match shift {
            ShiftKind::Morning => &self.morning_shift,
            ShiftKind::Afternoon12 => &self.afternoon_shifts.shift12,
            ShiftKind::Afternoon13 => &self.afternoon_shifts.shift13,
            ShiftKind::Afternoon14 => &self.afternoon_shifts.shift14,
            ShiftKind::Afternoon15 => &self.afternoon_shifts.shift15,
            ShiftKind::Afternoon1550 => &self.afternoon_shifts.shift1550,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialPaySettings {
    pub afternoon_pay: i64,
    pub weekend_pay: i64,
    pub overtime_pay: i64,
}

impl Default for SpecialPaySettings {
    fn default() -> Self {
        Self {
            afternoon_pay: 300,
            weekend_pay: 250,
            overtime_pay: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveSettings {
    pub annual_leave: i64,
    pub sick_leave: i64,
    pub personal_leave: i64,
    pub max_consecutive_days: i64,
}

impl Default for LeaveSettings {
    fn default() -> Self {
        Self {
            annual_leave: 10,
            sick_leave: 30,
            personal_leave: 3,
            max_consecutive_days: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DutySettings {
    /// 当番対象のレベル一覧。判定には最小値〜最大値の範囲を使う
    pub eligible_levels: Vec<i64>,
    pub employees_per_duty: usize,
    pub auto_assign: bool,
}

impl Default for DutySettings {
    fn default() -> Self {
        Self {
            eligible_levels: vec![4, 5, 6],
            employees_per_duty: 2,
            auto_assign: true,
        }
    }
}

impl DutySettings {
    /// 対象レベルの範囲(両端含む)。リストが空の場合は既定の4〜6
    pub fn eligible_range(&self) -> (i64, i64) {
        let min = self.eligible_levels.iter().min().copied().unwrap_or(4);
        let max = self.eligible_levels.iter().max().copied().unwrap_or(6);
        (min, max)
    }

    pub fn is_eligible(&self, level: i64) -> bool {
        let (min, max) = self.eligible_range();
        min <= level && level <= max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub duty_reminders: bool,
    pub leave_approvals: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            duty_reminders: true,
            leave_approvals: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub theme: String,
    pub primary_color: String,
    pub language: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: String::from("light"),
            primary_color: String::from("#3B82F6"),
            language: String::from("ja"),
        }
    }
}
