use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        analytics::{ServerAnalyticsDto, UpsertAnalyticsDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::analytics::{DateRange, ServerAnalytics, UpsertAnalyticsParam},
        service::{analytics::AnalyticsService, auth::token::SessionIdentity},
        state::AppState,
        util::extract::{ApiJson, ApiQuery},
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Inclusive date bounds, `YYYY-MM-DD`.
#[derive(Deserialize)]
pub struct AnalyticsQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Get a server's daily analytics.
///
/// Without bounds the range covers the last 30 days up to today (UTC).
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/analytics",
    tag = ANALYTICS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID"),
        ("start" = Option<NaiveDate>, Query, description = "First day, inclusive"),
        ("end" = Option<NaiveDate>, Query, description = "Last day, inclusive (default: today)")
    ),
    responses(
        (status = 200, description = "Daily rows, oldest first", body = Vec<ServerAnalyticsDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiQuery(query): ApiQuery<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let range = DateRange::resolve(query.start, query.end);
    let rows = AnalyticsService::new(&state.db)
        .get_range(&server_id, range)
        .await?;

    let dtos: Vec<ServerAnalyticsDto> = rows.into_iter().map(ServerAnalytics::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a day's counters, replacing any earlier submission for that day.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/analytics",
    tag = ANALYTICS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpsertAnalyticsDto,
    responses(
        (status = 200, description = "Stored daily row", body = ServerAnalyticsDto),
        (status = 400, description = "Invalid counters", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_analytics(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpsertAnalyticsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let row = AnalyticsService::new(&state.db)
        .record_daily(UpsertAnalyticsParam::from_dto(server_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(row.into_dto())))
}
