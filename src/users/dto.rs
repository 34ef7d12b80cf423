use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::list_query::{Pagination, Sort, SortKey};

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "lastLogin")]
    pub last_login: String, // YYYY-MM-DD HH:MM, UTC
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Pending, UserStatus::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Pending => "Pending",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Email,
    Role,
    Status,
    LastLogin,
}

impl SortKey for UserSortField {
    const DEFAULT: Self = UserSortField::Name;
    const ALL: &'static [Self] = &[
        UserSortField::Name,
        UserSortField::Email,
        UserSortField::Role,
        UserSortField::Status,
        UserSortField::LastLogin,
    ];

    fn as_key(self) -> &'static str {
        match self {
            UserSortField::Name => "name",
            UserSortField::Email => "email",
            UserSortField::Role => "role",
            UserSortField::Status => "status",
            UserSortField::LastLogin => "lastLogin",
        }
    }

    fn column(self) -> &'static str {
        match self {
            UserSortField::Name => "name",
            UserSortField::Email => "email",
            UserSortField::Role => "role",
            UserSortField::Status => "status",
            UserSortField::LastLogin => "last_login",
        }
    }
}

/// Normalized filters; echoed back in the list metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub search: String,
    pub role: String,
    pub status: String,
}

/// Raw `GET /dashboard/users` query string. Everything is parsed leniently.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListRequest {
    pub filter: UserFilter,
    pub pagination: Pagination,
    pub sort: Sort<UserSortField>,
    /// Raw `sortBy` as sent, echoed back in the response meta.
    pub requested_sort: Option<String>,
}

impl From<ListUsersQuery> for UserListRequest {
    fn from(q: ListUsersQuery) -> Self {
        use crate::list_query::params::normalize_filter;

        Self {
            filter: UserFilter {
                search: normalize_filter(q.search.as_deref()),
                role: normalize_filter(q.role.as_deref()),
                status: normalize_filter(q.status.as_deref()),
            },
            pagination: Pagination::parse(q.page.as_deref(), q.limit.as_deref()),
            sort: Sort::parse(q.sort_by.as_deref(), q.sort_direction.as_deref()),
            requested_sort: q
                .sort_by
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated row ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub last_login: String,
}

impl From<NewUser> for UserRecord {
    fn from(u: NewUser) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            status: u.status.to_string(),
            last_login: u.last_login,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub data: T,
}
