use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::models::{Employee, EmployeeId, Vehicle};
use crate::infrastructure::seed;
use crate::infrastructure::store::{load_or, save, Collection, KeyValueStore, RepoError};

const KEY_EMPLOYEES: &str = "employees";

/// 新規職員の入力値 (IDはリポジトリが採番する)
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub level: i64,
    pub vehicle: Option<Vehicle>,
    pub transfer_date: NaiveDate,
    pub completion_date: NaiveDate,
}

pub struct EmployeeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<Employee>, RepoError> {
        Ok(load_or(self.store.as_ref(), KEY_EMPLOYEES, seed::employees)?)
    }

    fn persist(&self, col: &Collection<Employee>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_EMPLOYEES, col)?)
    }

    /// 職員一覧 (登録順 = ID昇順)
    pub fn list(&self) -> Result<Vec<Employee>, RepoError> {
        let mut items = self.load()?.items;
        items.sort_by_key(|e| e.id);
        Ok(items)
    }

    pub fn find(&self, id: EmployeeId) -> Result<Option<Employee>, RepoError> {
        Ok(self.load()?.items.into_iter().find(|e| e.id == id))
    }

    pub fn create(&self, input: NewEmployee) -> Result<Employee, RepoError> {
        let mut col = self.load()?;
        let id = col.issue_id();
        let employee = Employee {
            id,
            code: input.code,
            first_name: input.first_name,
            last_name: input.last_name,
            position: input.position,
            department: input.department,
            phone: input.phone,
            level: input.level,
            vehicle: input.vehicle,
            transfer_date: input.transfer_date,
            completion_date: input.completion_date,
        };
        col.items.push(employee.clone());
        self.persist(&col)?;
        Ok(employee)
    }

    pub fn update(&self, employee: &Employee) -> Result<(), RepoError> {
        let mut col = self.load()?;
        let slot = col
            .items
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RepoError::NotFound("employee"))?;
        *slot = employee.clone();
        self.persist(&col)
    }

    pub fn delete(&self, id: EmployeeId) -> Result<(), RepoError> {
        let mut col = self.load()?;
        col.items.retain(|e| e.id != id);
        self.persist(&col)
    }

    /// 氏名・職員コード・電話番号の部分一致と、部署での絞り込み
    pub fn search(&self, term: &str, department: Option<&str>) -> Result<Vec<Employee>, RepoError> {
        let items = self.list()?;
        Ok(items
            .into_iter()
            .filter(|e| {
                let matches_term = term.is_empty()
                    || e.first_name.contains(term)
                    || e.last_name.contains(term)
                    || e.code.contains(term)
                    || e.phone.contains(term);
                let matches_department = department.map_or(true, |d| e.department == d);
                matches_term && matches_department
            })
            .collect())
    }
}
