use std::sync::Arc;

pub mod domain;
pub mod infrastructure;
pub mod application;

use infrastructure::duty_repo::{ChangeRequestRepository, DutyRosterRepository};
use infrastructure::employee_repo::EmployeeRepository;
use infrastructure::holiday_repo::HolidayRepository;
use infrastructure::leave_repo::LeaveRepository;
use infrastructure::schedule_repo::WorkScheduleRepository;
use infrastructure::settings_repo::SettingsRepository;
use infrastructure::store::KeyValueStore;

// 全てのリポジトリを保持するコンテナ
pub struct AppServices {
    pub employee: EmployeeRepository,
    pub roster: DutyRosterRepository,
    pub request: ChangeRequestRepository,
    pub leave: LeaveRepository,
    pub schedule: WorkScheduleRepository,
    pub holiday: HolidayRepository,
    pub settings: SettingsRepository,
}

impl AppServices {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            // storeはArcで共有されているのでcloneしても低コスト
            employee: EmployeeRepository::new(store.clone()),
            roster: DutyRosterRepository::new(store.clone()),
            request: ChangeRequestRepository::new(store.clone()),
            leave: LeaveRepository::new(store.clone()),
            schedule: WorkScheduleRepository::new(store.clone()),
            holiday: HolidayRepository::new(store.clone()),
            settings: SettingsRepository::new(store),
        }
    }
}
