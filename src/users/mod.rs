pub mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
pub mod repo;
pub mod seed;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::{PgUserStore, UserStore};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::users_routes())
}
