use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::models::{
    ApprovalStatus,
    ChangeRequest,
    DutyEntry,
    DutyId,
    DutyKind,
    DutyStatus,
    EmployeeId,
    RequestId,
};
use crate::infrastructure::seed;
use crate::infrastructure::store::{load_or, save, Collection, KeyValueStore, RepoError};

const KEY_DUTY_ROSTER: &str = "dutySchedules";
const KEY_CHANGE_REQUESTS: &str = "dutyChangeRequests";

/// 新規当番の入力値
#[derive(Debug, Clone)]
pub struct NewDuty {
    pub date: NaiveDate,
    pub employees: Vec<EmployeeId>,
    pub kind: DutyKind,
}

// =====================
// 当番表リポジトリ
// =====================
// 当番表コレクションの唯一の所有者。
// ステータス遷移と入れ替えはここを経由してのみ行う

pub struct DutyRosterRepository {
    store: Arc<dyn KeyValueStore>,
}

impl DutyRosterRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<DutyEntry>, RepoError> {
        Ok(load_or(
            self.store.as_ref(),
            KEY_DUTY_ROSTER,
            seed::duty_roster,
        )?)
    }

    fn persist(&self, col: &Collection<DutyEntry>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_DUTY_ROSTER, col)?)
    }

    /// 当番一覧 (日付昇順)
    pub fn list(&self) -> Result<Vec<DutyEntry>, RepoError> {
        let mut items = self.load()?.items;
        items.sort_by_key(|d| d.date);
        Ok(items)
    }

    pub fn find(&self, id: DutyId) -> Result<Option<DutyEntry>, RepoError> {
        Ok(self.load()?.items.into_iter().find(|d| d.id == id))
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Result<Option<DutyEntry>, RepoError> {
        Ok(self.load()?.items.into_iter().find(|d| d.date == date))
    }

    /// 下書き状態の当番を追加する。
    /// 同一日付の重複チェックは呼び出し側の責務(1日付1件の不変条件)
    pub fn create(&self, input: NewDuty) -> Result<DutyEntry, RepoError> {
        let mut created = self.create_many(vec![input])?;
        Ok(created.remove(0))
    }

    /// 複数まとめて追加する (自動割り当て用)。読み書きは1回で済ませる
    pub fn create_many(&self, inputs: Vec<NewDuty>) -> Result<Vec<DutyEntry>, RepoError> {
        let mut col = self.load()?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let id = col.issue_id();
            let entry = DutyEntry {
                id,
                date: input.date,
                employees: input.employees,
                kind: input.kind,
                status: DutyStatus::Draft,
                was_changed: false,
                original_employees: None,
            };
            col.items.push(entry.clone());
            created.push(entry);
        }
        if !created.is_empty() {
            self.persist(&col)?;
        }
        Ok(created)
    }

    pub fn update(&self, entry: &DutyEntry) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let slot = col
            .items
            .iter_mut()
            .find(|d| d.id == entry.id)
            .ok_or(RepoError::NotFound("duty entry"))?;
        *slot = entry.clone();
        self.persist(&col)
    }

    /// 当番を承認する(冪等)
    pub fn approve(&self, id: DutyId) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let entry = col
            .items
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(RepoError::NotFound("duty entry"))?;
        entry.approve();
        self.persist(&col)
    }

    /// 指定日の当番者を入れ替える。
    /// 該当日の当番が無い場合は NotFound を返し、何も変更しない
    pub fn apply_employee_swap(
        &self,
        date: NaiveDate,
        from: EmployeeId,
        to: EmployeeId,
    ) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let entry = col
            .items
            .iter_mut()
            .find(|d| d.date == date)
            .ok_or(RepoError::NotFound("duty entry"))?;
        entry.apply_employee_swap(from, to);
        self.persist(&col)
    }
}

// =====================
// 変更申請リポジトリ
// =====================

/// 新規変更申請の入力値
#[derive(Debug, Clone)]
pub struct NewChangeRequest {
    pub from_employee: EmployeeId,
    pub to_employee: EmployeeId,
    pub date: NaiveDate,
    pub reason: String,
    pub request_date: NaiveDate,
}

pub struct ChangeRequestRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ChangeRequestRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<ChangeRequest>, RepoError> {
        Ok(load_or(
            self.store.as_ref(),
            KEY_CHANGE_REQUESTS,
            seed::change_requests,
        )?)
    }

    fn persist(&self, col: &Collection<ChangeRequest>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_CHANGE_REQUESTS, col)?)
    }

    pub fn list(&self) -> Result<Vec<ChangeRequest>, RepoError> {
        Ok(self.load()?.items)
    }

    pub fn list_pending(&self) -> Result<Vec<ChangeRequest>, RepoError> {
        Ok(self
            .load()?
            .items
            .into_iter()
            .filter(|r| r.status == ApprovalStatus::Pending)
            .collect())
    }

    pub fn find(&self, id: RequestId) -> Result<Option<ChangeRequest>, RepoError> {
        Ok(self.load()?.items.into_iter().find(|r| r.id == id))
    }

    /// 変更申請を受け付ける (初期状態はpending)
    pub fn submit(&self, input: NewChangeRequest) -> Result<ChangeRequest, RepoError> {
        let mut col = self.load()?;
        let id = col.issue_id();
        let request = ChangeRequest {
            id,
            from_employee: input.from_employee,
            to_employee: input.to_employee,
            date: input.date,
            reason: input.reason,
            status: ApprovalStatus::Pending,
            request_date: input.request_date,
            approved_by: None,
        };
        col.items.push(request.clone());
        self.persist(&col)?;
        Ok(request)
    }

    pub fn update(&self, request: &ChangeRequest) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let slot = col
            .items
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(RepoError::NotFound("change request"))?;
        *slot = request.clone();
        self.persist(&col)
    }
}
