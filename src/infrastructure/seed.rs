//! 初期データ。
//! ストアに何も保存されていない状態では各リポジトリがここの値を返す。
//! 最初の保存が行われるまで永続化はされない。

use chrono::NaiveDate;

use crate::domain::models::{
    ApprovalStatus,
    ChangeRequest,
    DutyEntry,
    DutyKind,
    DutyStatus,
    Employee,
    Holiday,
    HolidayKind,
    Leave,
    LeaveKind,
    ScheduleStatus,
    ShiftKind,
    Vehicle,
    WorkSchedule,
};
use crate::infrastructure::store::Collection;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid seed date")
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: i64,
    code: &str,
    last_name: &str,
    first_name: &str,
    position: &str,
    department: &str,
    phone: &str,
    level: i64,
    vehicle: Option<Vehicle>,
    transfer: (i32, u32, u32),
    completion: (i32, u32, u32),
) -> Employee {
    Employee {
        id,
        code: code.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        phone: phone.to_string(),
        level,
        vehicle,
        transfer_date: date(transfer.0, transfer.1, transfer.2),
        completion_date: date(completion.0, completion.1, completion.2),
    }
}

fn vehicle(brand: &str, color: &str, license_plate: &str) -> Option<Vehicle> {
    Some(Vehicle {
        brand: brand.to_string(),
        color: color.to_string(),
        license_plate: license_plate.to_string(),
    })
}

pub fn employees() -> Collection<Employee> {
    let items = vec![
        employee(1, "EMP001", "佐藤", "太郎", "所長", "所長", "090-1234-5678", 8, None, (2020, 1, 15), (2024, 1, 15)),
        employee(2, "EMP002", "鈴木", "花子", "副所長", "副所長", "090-1234-5679", 7, None, (2020, 3, 1), (2024, 3, 1)),
        employee(3, "EMP003", "高橋", "健一", "審査担当", "審査課", "090-1234-5680", 6, vehicle("トヨタ", "白", "品川 330 あ 12-34"), (2021, 5, 10), (2025, 5, 10)),
        employee(4, "EMP004", "田中", "美咲", "計数担当", "計数課", "090-1234-5681", 5, None, (2022, 1, 20), (2026, 1, 20)),
        employee(5, "EMP005", "伊藤", "大輔", "鑑査担当", "鑑査課", "090-1234-5682", 6, None, (2021, 8, 15), (2025, 8, 15)),
        employee(6, "EMP006", "渡辺", "直樹", "廃棄担当", "廃棄課", "090-1234-5683", 5, None, (2022, 3, 1), (2026, 3, 1)),
        employee(7, "EMP007", "山本", "修", "技術担当", "技術課", "090-1234-5684", 6, vehicle("ホンダ", "赤", "横浜 500 か 56-78"), (2020, 12, 1), (2024, 12, 1)),
        employee(8, "EMP008", "中村", "葵", "午後勤務担当", "午後勤務課", "090-1234-5685", 5, None, (2021, 11, 15), (2025, 11, 15)),
        employee(9, "EMP009", "小林", "誠", "総務担当", "総務課", "090-1234-5686", 4, None, (2022, 6, 1), (2026, 6, 1)),
        employee(10, "EMP010", "加藤", "由美", "総務担当", "総務課", "090-1234-5687", 4, None, (2022, 7, 15), (2026, 7, 15)),
        employee(11, "EMP011", "吉田", "剛", "警備担当", "金庫室", "090-1234-5688", 5, None, (2021, 9, 1), (2025, 9, 1)),
        employee(12, "EMP012", "山田", "京子", "警備担当", "金庫室", "090-1234-5689", 4, None, (2022, 2, 15), (2026, 2, 15)),
        employee(13, "EMP013", "佐々木", "淳", "応援担当", "応援課", "090-1234-5690", 4, None, (2022, 4, 1), (2026, 4, 1)),
        employee(14, "EMP014", "松本", "彩", "応援担当", "応援課", "090-1234-5691", 4, None, (2022, 5, 15), (2026, 5, 15)),
        employee(15, "EMP015", "井上", "亮", "応援担当", "応援課", "090-1234-5692", 5, None, (2021, 12, 1), (2025, 12, 1)),
    ];
    Collection::new(items, 16)
}

fn duty(id: i64, day: (i32, u32, u32), employees: Vec<i64>) -> DutyEntry {
    DutyEntry {
        id,
        date: date(day.0, day.1, day.2),
        employees,
        kind: DutyKind::Weekend,
        status: DutyStatus::Approved,
        was_changed: false,
        original_employees: None,
    }
}

pub fn duty_roster() -> Collection<DutyEntry> {
    let items = vec![
        duty(1, (2025, 1, 18), vec![3, 7]),
        duty(2, (2025, 1, 19), vec![5, 11]),
        duty(3, (2025, 1, 25), vec![9, 13]),
        duty(4, (2025, 1, 26), vec![10, 14]),
    ];
    Collection::new(items, 5)
}

pub fn change_requests() -> Collection<ChangeRequest> {
    let items = vec![ChangeRequest {
        id: 1,
        from_employee: 3,
        to_employee: 15,
        date: date(2025, 1, 25),
        reason: String::from("私用のため"),
        status: ApprovalStatus::Pending,
        request_date: date(2025, 1, 15),
        approved_by: None,
    }];
    Collection::new(items, 2)
}

pub fn leaves() -> Collection<Leave> {
    let items = vec![
        Leave {
            id: 1,
            employee_id: 4,
            kind: LeaveKind::Vacation,
            start_date: date(2025, 1, 16),
            end_date: date(2025, 1, 16),
            days: 1,
            reason: String::from("家族旅行のため"),
            status: ApprovalStatus::Approved,
            approved_by: None,
        },
        Leave {
            id: 2,
            employee_id: 8,
            kind: LeaveKind::Sick,
            start_date: date(2025, 1, 16),
            end_date: date(2025, 1, 16),
            days: 1,
            reason: String::from("風邪のため"),
            status: ApprovalStatus::Approved,
            approved_by: None,
        },
    ];
    Collection::new(items, 3)
}

pub fn work_schedules() -> Collection<WorkSchedule> {
    let items = vec![
        WorkSchedule {
            id: 1,
            employee_id: 1,
            date: date(2025, 1, 16),
            shift: ShiftKind::Morning,
            location: String::from("本社"),
            status: ScheduleStatus::Scheduled,
        },
        WorkSchedule {
            id: 2,
            employee_id: 2,
            date: date(2025, 1, 16),
            shift: ShiftKind::Morning,
            location: String::from("金庫室"),
            status: ScheduleStatus::Scheduled,
        },
        WorkSchedule {
            id: 3,
            employee_id: 3,
            date: date(2025, 1, 16),
            shift: ShiftKind::Morning,
            location: String::from("審査課"),
            status: ScheduleStatus::Scheduled,
        },
    ];
    Collection::new(items, 4)
}

pub fn holidays() -> Collection<Holiday> {
    let items = vec![
        Holiday {
            id: 1,
            date: date(2025, 1, 1),
            name: String::from("元日"),
            kind: HolidayKind::Public,
        },
        Holiday {
            id: 2,
            date: date(2025, 2, 11),
            name: String::from("建国記念の日"),
            kind: HolidayKind::Public,
        },
        Holiday {
            id: 3,
            date: date(2025, 4, 29),
            name: String::from("昭和の日"),
            kind: HolidayKind::Public,
        },
    ];
    Collection::new(items, 4)
}
