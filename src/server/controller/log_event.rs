use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        log_event::{CreateLogEventDto, LogEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::log_event::{CreateLogEventParam, LogEvent},
        service::{auth::token::SessionIdentity, log_event::LogEventService},
        state::AppState,
        util::extract::{ApiJson, ApiQuery},
    },
};

/// Tag for grouping log event endpoints in OpenAPI documentation
pub static LOG_EVENT_TAG: &str = "log_event";

#[derive(Deserialize)]
pub struct LogEventQuery {
    pub limit: Option<u64>,
}

/// List a server's most recent log events.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/log-events",
    tag = LOG_EVENT_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID"),
        ("limit" = Option<u64>, Query, description = "Maximum events to return (default: 50, max: 200)")
    ),
    responses(
        (status = 200, description = "Log events, newest first", body = Vec<LogEventDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_log_events(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiQuery(query): ApiQuery<LogEventQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let events = LogEventService::new(&state.db)
        .get_by_server(&server_id, query.limit)
        .await?;

    let dtos: Vec<LogEventDto> = events.into_iter().map(LogEvent::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a log event.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/log-events",
    tag = LOG_EVENT_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateLogEventDto,
    responses(
        (status = 201, description = "Event recorded", body = LogEventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_log_event(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<CreateLogEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let event = LogEventService::new(&state.db)
        .create(CreateLogEventParam::from_dto(server_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}
