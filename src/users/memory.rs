//! In-process [`UserStore`] used by router tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use super::{
    dto::{NewUser, UserFilter, UserRecord, UserSortField},
    repo::{UserStore, DUPLICATE_EMAIL},
    seed::seed_users,
};
use crate::{
    error::{AppError, Result},
    list_query::{Pagination, Sort, SortDirection},
};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<UserRecord>>,
    ready_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryUserStore {
    /// Every call fails as if the pool could not hand out a connection.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.store(true, Ordering::SeqCst);
        store
    }

    pub fn rows(&self) -> Vec<UserRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn ready_calls(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// The list predicate, computed without SQL.
    pub fn matches(row: &UserRecord, filter: &UserFilter) -> bool {
        let search = filter.search.to_lowercase();
        let search_ok = search.is_empty()
            || [&row.name, &row.email, &row.role]
                .iter()
                .any(|v| v.to_lowercase().contains(&search));
        let role_ok = filter.role.is_empty() || row.role == filter.role;
        let status_ok = filter.status.is_empty() || row.status == filter.status;
        search_ok && role_ok && status_ok
    }

    fn sort_value(row: &UserRecord, field: UserSortField) -> &str {
        match field {
            UserSortField::Name => row.name.as_str(),
            UserSortField::Email => row.email.as_str(),
            UserSortField::Role => row.role.as_str(),
            UserSortField::Status => row.status.as_str(),
            UserSortField::LastLogin => row.last_login.as_str(),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ensure_table_ready(&self) -> Result<()> {
        self.check_available()?;
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.is_empty() {
            rows.extend(seed_users());
        }
        Ok(())
    }

    async fn count(&self, filter: &UserFilter) -> Result<i64> {
        self.check_available()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|r| Self::matches(r, filter)).count() as i64)
    }

    async fn page(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>> {
        self.check_available()?;
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<UserRecord> = rows
            .iter()
            .filter(|r| Self::matches(r, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            let primary = Self::sort_value(a, sort.field).cmp(Self::sort_value(b, sort.field));
            let primary = match sort.direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });
        Ok(matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord> {
        self.check_available()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.email == user.email) {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.into()));
        }
        let record = UserRecord::from(user);
        rows.push(record.clone());
        Ok(record)
    }
}
