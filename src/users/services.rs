use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use super::{
    dto::{CreateUserRequest, NewUser, UserFilter, UserListRequest, UserRecord, UserStatus},
    repo::UserStore,
};
use crate::{
    error::{AppError, Result},
    list_query::{ListMeta, ListResponse, SortKey},
};

const LAST_LOGIN_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Same rule as the add-user form: an `@` somewhere in the address.
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

pub async fn list_users(
    store: &dyn UserStore,
    req: UserListRequest,
) -> Result<ListResponse<UserRecord, UserFilter>> {
    store.ensure_table_ready().await?;

    let total_items = store.count(&req.filter).await?;
    let data = store.page(&req.filter, req.sort, req.pagination).await?;

    Ok(ListResponse {
        data,
        meta: ListMeta::new(
            req.pagination,
            req.requested_sort
                .unwrap_or_else(|| req.sort.field.as_key().to_string()),
            req.sort.direction,
            total_items,
            req.filter,
        ),
    })
}

pub async fn create_user(store: &dyn UserStore, req: CreateUserRequest) -> Result<UserRecord> {
    store.ensure_table_ready().await?;

    let user = validate_new_user(req, OffsetDateTime::now_utc())?;
    let record = store.insert(user).await?;
    info!(id = %record.id, email = %record.email, "user created");
    Ok(record)
}

/// Trims and checks the submitted fields, then assigns `id` and `lastLogin`.
pub fn validate_new_user(req: CreateUserRequest, now: OffsetDateTime) -> Result<NewUser> {
    let field = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
    let name = field(req.name);
    let email = field(req.email).to_lowercase();
    let role = field(req.role);
    let status = field(req.status);

    let missing: Vec<&str> = [
        ("name", &name),
        ("email", &email),
        ("role", &role),
        ("status", &status),
    ]
    .into_iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(k, _)| k)
    .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}.",
            missing.join(", ")
        )));
    }

    let status: UserStatus = status.parse().map_err(|_| {
        AppError::Validation("Status must be one of Active, Pending, Inactive.".into())
    })?;
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Enter a valid email address.".into()));
    }

    let last_login = now
        .format(LAST_LOGIN_FORMAT)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(NewUser {
        id: format!("u-{}", Uuid::new_v4().simple()),
        name,
        email,
        role,
        status,
        last_login,
    })
}
