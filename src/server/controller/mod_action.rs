use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mod_action::{CreateModActionDto, ModActionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::mod_action::{CreateModActionParam, ModAction},
        service::{auth::token::SessionIdentity, mod_action::ModActionService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping moderation action endpoints in OpenAPI documentation
pub static MOD_ACTION_TAG: &str = "mod_action";

/// List a server's moderation actions, newest first.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/mod-actions",
    tag = MOD_ACTION_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Moderation actions, newest first", body = Vec<ModActionDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mod_actions(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let actions = ModActionService::new(&state.db)
        .get_by_server(&server_id)
        .await?;

    let dtos: Vec<ModActionDto> = actions.into_iter().map(ModAction::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a moderation action.
///
/// `actionType` must be one of `ban`, `kick`, `mute` or `warn`.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/mod-actions",
    tag = MOD_ACTION_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateModActionDto,
    responses(
        (status = 201, description = "Action recorded", body = ModActionDto),
        (status = 400, description = "Invalid action data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mod_action(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<CreateModActionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let param = CreateModActionParam::from_dto(server_id, payload)?;
    let action = ModActionService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(action.into_dto())))
}
