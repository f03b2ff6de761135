use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        custom_command::{CreateCustomCommandDto, CustomCommandDto, UpdateCustomCommandDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::custom_command::{
            CreateCustomCommandParam, CustomCommand, UpdateCustomCommandParam,
        },
        service::{auth::token::SessionIdentity, custom_command::CustomCommandService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping custom command endpoints in OpenAPI documentation
pub static CUSTOM_COMMAND_TAG: &str = "custom_command";

/// Loads a command and checks the caller owns its server.
async fn find_owned_command(
    state: &AppState,
    identity: &SessionIdentity,
    command_id: &str,
) -> Result<CustomCommand, AppError> {
    let Some(command) = CustomCommandService::new(&state.db)
        .get_by_id(command_id)
        .await?
    else {
        return Err(AppError::not_found("Command not found"));
    };

    AuthGuard::new(&state.db, identity)
        .require(&[Permission::ServerOwner(&command.server_id)])
        .await?;

    Ok(command)
}

/// List a server's custom commands, newest first.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/custom-commands",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Custom commands, newest first", body = Vec<CustomCommandDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_custom_commands(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let commands = CustomCommandService::new(&state.db)
        .get_by_server(&server_id)
        .await?;

    let dtos: Vec<CustomCommandDto> = commands
        .into_iter()
        .map(CustomCommand::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a custom command.
///
/// Names are lowercased and must be unique within the server.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/custom-commands",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateCustomCommandDto,
    responses(
        (status = 201, description = "Command created", body = CustomCommandDto),
        (status = 400, description = "Invalid command data or name already taken", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_custom_command(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<CreateCustomCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let command = CustomCommandService::new(&state.db)
        .create(CreateCustomCommandParam::from_dto(server_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(command.into_dto())))
}

/// Get a custom command.
#[utoipa::path(
    get,
    path = "/api/custom-commands/{command_id}",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("command_id" = String, Path, description = "Custom command ID")
    ),
    responses(
        (status = 200, description = "Command details", body = CustomCommandDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Command's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_custom_command(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(command_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let command = find_owned_command(&state, &identity, &command_id).await?;

    Ok((StatusCode::OK, Json(command.into_dto())))
}

/// Update a custom command.
///
/// Only the supplied fields change; `description: null` clears the description.
#[utoipa::path(
    patch,
    path = "/api/custom-commands/{command_id}",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("command_id" = String, Path, description = "Custom command ID")
    ),
    request_body = UpdateCustomCommandDto,
    responses(
        (status = 200, description = "Command after the update", body = CustomCommandDto),
        (status = 400, description = "Invalid command data or name already taken", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Command's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_custom_command(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(command_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateCustomCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    let command = find_owned_command(&state, &identity, &command_id).await?;

    let updated = CustomCommandService::new(&state.db)
        .update(&command, UpdateCustomCommandParam::from_dto(payload))
        .await?;

    match updated {
        Some(command) => Ok((StatusCode::OK, Json(command.into_dto()))),
        None => Err(AppError::not_found("Command not found")),
    }
}

/// Delete a custom command.
#[utoipa::path(
    delete,
    path = "/api/custom-commands/{command_id}",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("command_id" = String, Path, description = "Custom command ID")
    ),
    responses(
        (status = 204, description = "Command deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Command's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_custom_command(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(command_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let command = find_owned_command(&state, &identity, &command_id).await?;

    if !CustomCommandService::new(&state.db)
        .delete(&command.id)
        .await?
    {
        return Err(AppError::not_found("Command not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Record one use of a custom command.
///
/// Increments `usageCount` atomically and returns the updated command.
#[utoipa::path(
    post,
    path = "/api/custom-commands/{command_id}/use",
    tag = CUSTOM_COMMAND_TAG,
    params(
        ("command_id" = String, Path, description = "Custom command ID")
    ),
    responses(
        (status = 200, description = "Command with the incremented usage count", body = CustomCommandDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Command's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn use_custom_command(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(command_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let command = find_owned_command(&state, &identity, &command_id).await?;

    match CustomCommandService::new(&state.db)
        .record_use(&command.id)
        .await?
    {
        Some(command) => Ok((StatusCode::OK, Json(command.into_dto()))),
        None => Err(AppError::not_found("Command not found")),
    }
}
