use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateUserRequest, ItemResponse, ListUsersQuery, UserFilter, UserListRequest, UserRecord},
    services,
};
use crate::{
    auth::AuthUser,
    error::{AppError, Result},
    list_query::ListResponse,
    state::AppState,
};

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/dashboard/users", get(list_users).post(create_user))
}

#[instrument(skip(state, session, query), fields(user = %session.0.sub))]
pub async fn list_users(
    State(state): State<AppState>,
    session: AuthUser,
    query: std::result::Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<ListResponse<UserRecord, UserFilter>>> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let res = services::list_users(state.users.as_ref(), UserListRequest::from(query)).await?;
    Ok(Json(res))
}

#[instrument(skip(state, session, payload), fields(user = %session.0.sub))]
pub async fn create_user(
    State(state): State<AppState>,
    session: AuthUser,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse<UserRecord>>)> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let record = services::create_user(state.users.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { data: record })))
}
