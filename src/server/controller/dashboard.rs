use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DashboardActivityDto, DashboardStatsDto},
    },
    server::{
        error::AppError, service::auth::token::SessionIdentity,
        service::dashboard::DashboardService, state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get summary counters across the caller's servers.
///
/// `modActionsToday` counts actions since 00:00 UTC.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStatsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse, AppError> {
    let stats = DashboardService::new(&state.db)
        .stats(&identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get the newest mod actions and tickets across the caller's servers.
#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Recent activity, newest first", body = DashboardActivityDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse, AppError> {
    let activity = DashboardService::new(&state.db)
        .activity(&identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}
