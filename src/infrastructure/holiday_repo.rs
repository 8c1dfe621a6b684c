use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::models::{Holiday, HolidayId, HolidayKind};
use crate::infrastructure::seed;
use crate::infrastructure::store::{load_or, save, Collection, KeyValueStore, RepoError};

const KEY_HOLIDAYS: &str = "holidays";

pub struct HolidayRepository {
    store: Arc<dyn KeyValueStore>,
}

impl HolidayRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Collection<Holiday>, RepoError> {
        Ok(load_or(self.store.as_ref(), KEY_HOLIDAYS, seed::holidays)?)
    }

    fn persist(&self, col: &Collection<Holiday>) -> Result<(), RepoError> {
        Ok(save(self.store.as_ref(), KEY_HOLIDAYS, col)?)
    }

    /// 祝日一覧 (日付昇順)
    pub fn list(&self) -> Result<Vec<Holiday>, RepoError> {
        let mut items = self.load()?.items;
        items.sort_by_key(|h| h.date);
        Ok(items)
    }

    pub fn create(
        &self,
        date: NaiveDate,
        name: &str,
        kind: HolidayKind,
    ) -> Result<Holiday, RepoError> {
        let mut col = self.load()?;
        let id = col.issue_id();
        let holiday = Holiday {
            id,
            date,
            name: name.to_string(),
            kind,
        };
        col.items.push(holiday.clone());
        self.persist(&col)?;
        Ok(holiday)
    }

    pub fn delete(&self, id: HolidayId) -> Result<(), RepoError> {
        let mut col = self.load()?;
        col.items.retain(|h| h.id != id);
        self.persist(&col)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool, RepoError> {
        Ok(self.load()?.items.iter().any(|h| h.date == date))
    }
}
