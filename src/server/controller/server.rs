use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        server::{CreateServerDto, ServerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::server::{Server, UpsertServerParam},
        service::{auth::token::SessionIdentity, server::ServerService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List the servers owned by the caller.
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Servers owned by the caller, ordered by name", body = Vec<ServerDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse, AppError> {
    let servers = ServerService::new(&state.db)
        .get_owned(&identity.user_id)
        .await?;

    let dtos: Vec<ServerDto> = servers.into_iter().map(Server::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register a Discord server under the caller, or refresh its metadata.
///
/// # Access Control
/// - A server already registered by another user cannot be claimed
///
/// # Returns
/// - `201 Created` - The stored server
/// - `400 Bad Request` - Missing id or name
/// - `403 Forbidden` - Server belongs to another user
#[utoipa::path(
    post,
    path = "/api/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Server stored", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    ApiJson(payload): ApiJson<CreateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpsertServerParam::from_dto(identity.user_id, payload);

    let server = ServerService::new(&state.db).upsert(param).await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Get one of the caller's servers.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Server details", body = ServerDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let server = AuthGuard::new(&state.db, &identity)
        .require_server_owner(&server_id)
        .await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}
