use crate::state::AppState;
use axum::Router;

mod claims;
pub mod demo;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;

pub use claims::SessionClaims;
pub use extractors::AuthUser;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
