use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};

use super::{
    dto::{NewUser, UserFilter, UserRecord, UserSortField},
    seed::seed_users,
};
use crate::{
    error::{AppError, Result},
    list_query::{Pagination, Sort, SortKey},
};

pub const DUPLICATE_EMAIL: &str = "A user with this email already exists.";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        role TEXT NOT NULL,
        status TEXT NOT NULL,
        last_login TEXT NOT NULL
    )
"#;

const SELECT_USERS: &str = "SELECT id, name, email, role, status, last_login FROM users";

/// Storage for the users resource.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates the table if needed and seeds it when empty. Idempotent.
    async fn ensure_table_ready(&self) -> Result<()>;

    /// Number of rows matching `filter`, independent of paging.
    async fn count(&self, filter: &UserFilter) -> Result<i64>;

    async fn page(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>>;

    /// Fails with [`AppError::Conflict`] when the email is taken.
    async fn insert(&self, user: NewUser) -> Result<UserRecord>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ensure_table_ready(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.db).await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?;
        if existing == 0 {
            let mut qb = seed_query(seed_users());
            let inserted = qb.build().execute(&self.db).await?.rows_affected();
            info!(inserted, "seeded users table");
        }
        Ok(())
    }

    async fn count(&self, filter: &UserFilter) -> Result<i64> {
        let mut qb = count_query(filter);
        let total = qb.build_query_scalar::<i64>().fetch_one(&self.db).await?;
        Ok(total)
    }

    async fn page(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>> {
        let mut qb = page_query(filter, sort, pagination);
        debug!(sql = qb.sql(), "list users");
        let rows = qb
            .build_query_as::<UserRecord>()
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord> {
        let inserted = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, name, email, role, status, last_login)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, role, status, last_login
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.role)
        .bind(user.status.as_str())
        .bind(&user.last_login)
        .fetch_one(&self.db)
        .await;

        match inserted {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict(DUPLICATE_EMAIL.into()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// `SELECT COUNT(*)` with the same predicate as [`page_query`].
pub fn count_query(filter: &UserFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM users");
    push_filters(&mut qb, filter);
    qb
}

pub fn page_query(
    filter: &UserFilter,
    sort: Sort<UserSortField>,
    pagination: Pagination,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_USERS);
    push_filters(&mut qb, filter);

    // column names come from the allow-list only
    qb.push(" ORDER BY ")
        .push(sort.field.column())
        .push(" ")
        .push(sort.direction.sql())
        .push(", id ASC");
    qb.push(" LIMIT ")
        .push_bind(pagination.limit)
        .push(" OFFSET ")
        .push_bind(pagination.offset());
    qb
}

fn push_filters(qb: &mut QueryBuilder<'static, Postgres>, filter: &UserFilter) {
    let mut glue = " WHERE ";

    if !filter.search.is_empty() {
        let pattern = format!("%{}%", escape_like(&filter.search));
        qb.push(glue)
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR role ILIKE ")
            .push_bind(pattern)
            .push(")");
        glue = " AND ";
    }
    if !filter.role.is_empty() {
        qb.push(glue).push("role = ").push_bind(filter.role.clone());
        glue = " AND ";
    }
    if !filter.status.is_empty() {
        qb.push(glue).push("status = ").push_bind(filter.status.clone());
    }
}

fn seed_query(rows: Vec<UserRecord>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("INSERT INTO users (id, name, email, role, status, last_login) ");
    qb.push_values(rows, |mut b, row| {
        b.push_bind(row.id)
            .push_bind(row.name)
            .push_bind(row.email)
            .push_bind(row.role)
            .push_bind(row.status)
            .push_bind(row.last_login);
    });
    // concurrent first requests may both see an empty table
    qb.push(" ON CONFLICT DO NOTHING");
    qb
}

/// Escapes LIKE metacharacters so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_query::SortDirection;

    fn filter(search: &str, role: &str, status: &str) -> UserFilter {
        UserFilter {
            search: search.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    #[test]
    fn no_filters_means_no_where_clause() {
        let qb = page_query(&UserFilter::default(), Sort::default(), Pagination::default());
        assert_eq!(
            qb.sql(),
            "SELECT id, name, email, role, status, last_login FROM users \
             ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2"
        );
        assert_eq!(count_query(&UserFilter::default()).sql(), "SELECT COUNT(*) FROM users");
    }

    #[test]
    fn filters_are_conjunctive_and_bound() {
        let f = filter("meera'; DROP TABLE users; --", "UI Designer", "Active");
        let qb = count_query(&f);
        let sql = qb.sql();
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM users WHERE (name ILIKE $1 OR email ILIKE $2 OR role ILIKE $3) \
             AND role = $4 AND status = $5"
        );
        assert!(!sql.contains("meera"));
        assert!(!sql.contains("UI Designer"));
    }

    #[test]
    fn count_and_page_share_the_predicate() {
        let f = filter("", "QA Engineer", "Pending");
        let count = count_query(&f);
        let page = page_query(&f, Sort::default(), Pagination::default());
        let count_where = count.sql().split_once(" WHERE ").unwrap().1;
        let page_where = page.sql().split_once(" WHERE ").unwrap().1;
        assert!(page_where.starts_with(count_where));
    }

    #[test]
    fn sort_uses_physical_column() {
        let sort = Sort {
            field: UserSortField::LastLogin,
            direction: SortDirection::Desc,
        };
        let qb = page_query(&filter("", "", "Pending"), sort, Pagination { page: 2, limit: 1 });
        assert_eq!(
            qb.sql(),
            "SELECT id, name, email, role, status, last_login FROM users WHERE status = $1 \
             ORDER BY last_login DESC, id ASC LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("meera"), "meera");
    }

    #[test]
    fn seed_insert_ignores_conflicts() {
        let qb = seed_query(seed_users());
        let sql = qb.sql();
        assert!(sql.starts_with("INSERT INTO users (id, name, email, role, status, last_login) VALUES ($1, $2, $3, $4, $5, $6), "));
        assert!(sql.contains("($31, $32, $33, $34, $35, $36)"));
        assert!(sql.ends_with(" ON CONFLICT DO NOTHING"));
    }
}
