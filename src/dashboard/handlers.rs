use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{stat_cards, DataResponse, NavItem, Navigation, NavigationQuery, StatCard},
    navigation::{is_route_active, route_by_path, side_menu},
};
use crate::{auth::demo::Profile, auth::AuthUser, state::AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/navigation", get(get_navigation))
        .route("/user/profile", get(get_profile))
}

#[instrument(skip_all)]
pub async fn get_stats(_session: AuthUser) -> Json<DataResponse<Vec<StatCard>>> {
    Json(DataResponse { data: stat_cards() })
}

#[instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    _session: AuthUser,
) -> Json<DataResponse<Profile>> {
    Json(DataResponse {
        data: state.demo.profile.clone(),
    })
}

#[instrument(skip(session), fields(role = %session.0.role))]
pub async fn get_navigation(
    session: AuthUser,
    Query(q): Query<NavigationQuery>,
) -> Json<DataResponse<Navigation>> {
    let path = q.path.unwrap_or_default();
    let items = side_menu(Some(&session.0.role))
        .map(|route| NavItem {
            route: *route,
            active: is_route_active(&path, route.route),
        })
        .collect();

    Json(DataResponse {
        data: Navigation {
            items,
            current: route_by_path(&path).copied(),
        },
    })
}
