use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::models::{
    EmployeeId,
    ScheduleId,
    ScheduleStatus,
    ShiftKind,
    WorkSchedule,
};
use crate::infrastructure::seed;
use crate::infrastructure::store::{load_or, save, Collection, KeyValueStore, RepoError};

const KEY_WORK_SCHEDULES: &str = "workSchedules";

/// 新規勤務予定の入力値
#[derive(Debug, Clone)]
pub struct NewWorkSchedule {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub shift: ShiftKind,
    pub location: String,
}

pub struct WorkScheduleRepository {
    store: Arc<dyn KeyValueStore>,
}

impl WorkScheduleRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<WorkSchedule>, RepoError> {
        Ok(load_or(
            self.store.as_ref(),
            KEY_WORK_SCHEDULES,
            seed::work_schedules,
        )?)
    }

    fn persist(&self, col: &Collection<WorkSchedule>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_WORK_SCHEDULES, col)?)
    }

    /// 勤務予定一覧 (日付昇順)
    pub fn list(&self) -> Result<Vec<WorkSchedule>, RepoError> {
        let mut items = self.load()?.items;
        items.sort_by_key(|s| s.date);
        Ok(items)
    }

    /// 職員×日付で1件引く (1職員1日1件が前提)
    pub fn find_for(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<WorkSchedule>, RepoError> {
        Ok(self
            .load()?
            .items
            .into_iter()
            .find(|s| s.employee_id == employee_id && s.date == date))
    }

    pub fn create(&self, input: NewWorkSchedule) -> Result<WorkSchedule, RepoError> {
        let mut col = self.load()?;
        let id = col.issue_id();
        let schedule = WorkSchedule {
            id,
            employee_id: input.employee_id,
            date: input.date,
            shift: input.shift,
            location: input.location,
            status: ScheduleStatus::Scheduled,
        };
        col.items.push(schedule.clone());
        self.persist(&col)?;
        Ok(schedule)
    }

    pub fn update(&self, schedule: &WorkSchedule) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let slot = col
            .items
            .iter_mut()
            .find(|s| s.id == schedule.id)
            .ok_or(RepoError::NotFound("work schedule"))?;
        *slot = schedule.clone();
        self.persist(&col)
    }

    /// 勤務完了にする
    pub fn mark_completed(&self, id: ScheduleId) -> Result<(), RepoError> {
        self.set_status(id, ScheduleStatus::Completed)
    }

    /// 欠勤にする
    pub fn mark_absent(&self, id: ScheduleId) -> Result<(), RepoError> {
        self.set_status(id, ScheduleStatus::Absent)
    }

    fn set_status(&self, id: ScheduleId, status: ScheduleStatus) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let schedule = col
            .items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepoError::NotFound("work schedule"))?;
        schedule.status = status;
        self.persist(&col)
    }
}
