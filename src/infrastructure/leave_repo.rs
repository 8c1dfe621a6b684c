use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::models::{ApprovalStatus, EmployeeId, Leave, LeaveId, LeaveKind};
use crate::infrastructure::seed;
use crate::infrastructure::store::{load_or, save, Collection, KeyValueStore, RepoError};

const KEY_LEAVES: &str = "leaves";

/// 新規休暇申請の入力値。日数は呼び出し側で算出して渡す
#[derive(Debug, Clone)]
pub struct NewLeave {
    pub employee_id: EmployeeId,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
}

pub struct LeaveRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LeaveRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<Leave>, RepoError> {
        Ok(load_or(self.store.as_ref(), KEY_LEAVES, seed::leaves)?)
    }

    fn persist(&self, col: &Collection<Leave>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_LEAVES, col)?)
    }

    pub fn list(&self) -> Result<Vec<Leave>, RepoError> {
        Ok(self.load()?.items)
    }

    pub fn find(&self, id: LeaveId) -> Result<Option<Leave>, RepoError> {
        Ok(self.load()?.items.into_iter().find(|l| l.id == id))
    }

    /// 休暇申請を受け付ける (初期状態はpending)
    pub fn submit(&self, input: NewLeave) -> Result<Leave, RepoError> {
        let mut col = self.load()?;
        let id = col.issue_id();
        let leave = Leave {
            id,
            employee_id: input.employee_id,
            kind: input.kind,
            start_date: input.start_date,
            end_date: input.end_date,
            days: input.days,
            reason: input.reason,
            status: ApprovalStatus::Pending,
            approved_by: None,
        };
        col.items.push(leave.clone());
        self.persist(&col)?;
        Ok(leave)
    }

    /// 休暇申請を承認する。pending以外からの遷移は何もしない
    pub fn approve(&self, id: LeaveId, approved_by: &str) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let leave = col
            .items
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound("leave"))?;
        if leave.approve(approved_by) {
            self.persist(&col)?;
        }
        Ok(())
    }

    pub fn reject(&self, id: LeaveId) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let leave = col
            .items
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound("leave"))?;
        if leave.reject() {
            self.persist(&col)?;
        }
        Ok(())
    }

    /// 指定日に取得中の承認済み休暇
    pub fn approved_on(&self, date: NaiveDate) -> Result<Vec<Leave>, RepoError> {
        Ok(self
            .load()?
            .items
            .into_iter()
            .filter(|l| {
                l.status == ApprovalStatus::Approved && l.start_date <= date && date <= l.end_date
            })
            .collect())
    }

    /// 承認済みの年休(vacation)消化日数
    pub fn used_vacation_days(&self, employee_id: EmployeeId) -> Result<i64, RepoError> {
        Ok(self
            .load()?
            .items
            .iter()
            .filter(|l| {
                l.employee_id == employee_id
                    && l.status == ApprovalStatus::Approved
                    && l.kind == LeaveKind::Vacation
            })
            .map(|l| l.days)
            .sum())
    }
}
