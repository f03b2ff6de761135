//! Per-server settings endpoints.
//!
//! Every settings resource works the same way: `GET` returns the stored row or the
//! defaults when nothing was saved yet, and `PATCH` merges the supplied fields into
//! the stored row (creating it on first write). Unknown fields are rejected.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        settings::{
            AutoModSettingsDto, AutoRoleSettingsDto, LogSettingsDto, ModSettingsDto,
            TicketSettingsDto, UpdateAutoModSettingsDto, UpdateAutoRoleSettingsDto,
            UpdateLogSettingsDto, UpdateModSettingsDto, UpdateTicketSettingsDto,
            UpdateWelcomeSettingsDto, WelcomeSettingsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::{
            UpdateAutoModSettingsParam, UpdateAutoRoleSettingsParam, UpdateLogSettingsParam,
            UpdateModSettingsParam, UpdateTicketSettingsParam, UpdateWelcomeSettingsParam,
        },
        service::{auth::token::SessionIdentity, settings::SettingsService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get moderation toggles for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/mod-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = ModSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mod_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_mod(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update moderation toggles.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/mod-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateModSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = ModSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mod_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateModSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateModSettingsParam::from_dto(payload);
    let settings = SettingsService::new(&state.db)
        .update_mod(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get ticket settings for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/ticket-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = TicketSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_ticket(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update ticket settings.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/ticket-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateTicketSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = TicketSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateTicketSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateTicketSettingsParam::from_dto(payload);
    let settings = SettingsService::new(&state.db)
        .update_ticket(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get auto-moderation settings for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/auto-mod-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = AutoModSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auto_mod_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_auto_mod(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update auto-moderation settings.
///
/// Actions are validated against their allowed values; thresholds and intervals
/// must not be negative.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/auto-mod-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateAutoModSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = AutoModSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_auto_mod_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateAutoModSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateAutoModSettingsParam::from_dto(payload)?;
    let settings = SettingsService::new(&state.db)
        .update_auto_mod(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get event logging settings for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/log-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = LogSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_log_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_log(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update event logging settings.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/log-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateLogSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = LogSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_log_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateLogSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateLogSettingsParam::from_dto(payload);
    let settings = SettingsService::new(&state.db)
        .update_log(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get welcome and goodbye message settings for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/welcome-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = WelcomeSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_welcome_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_welcome(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update welcome and goodbye message settings.
///
/// `welcomeEmbedColor` must be a `#RRGGBB` hex color.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/welcome-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateWelcomeSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = WelcomeSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_welcome_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateWelcomeSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateWelcomeSettingsParam::from_dto(payload);
    let settings = SettingsService::new(&state.db)
        .update_welcome(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get auto-role settings for a server.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/auto-role-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Stored settings, or defaults when unset", body = AutoRoleSettingsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auto_role_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let settings = SettingsService::new(&state.db).get_auto_role(&server_id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update auto-role settings.
#[utoipa::path(
    patch,
    path = "/api/servers/{server_id}/auto-role-settings",
    tag = SETTINGS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateAutoRoleSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = AutoRoleSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_auto_role_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateAutoRoleSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = UpdateAutoRoleSettingsParam::from_dto(payload);
    let settings = SettingsService::new(&state.db)
        .update_auto_role(&server_id, param)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
