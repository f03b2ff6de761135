use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reaction_role::{CreateReactionRoleDto, ReactionRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reaction_role::{CreateReactionRoleParam, ReactionRole},
        service::{auth::token::SessionIdentity, reaction_role::ReactionRoleService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping reaction role endpoints in OpenAPI documentation
pub static REACTION_ROLE_TAG: &str = "reaction_role";

/// List a server's reaction role bindings, newest first.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/reaction-roles",
    tag = REACTION_ROLE_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Reaction role bindings", body = Vec<ReactionRoleDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reaction_roles(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let bindings = ReactionRoleService::new(&state.db)
        .get_by_server(&server_id)
        .await?;

    let dtos: Vec<ReactionRoleDto> = bindings.into_iter().map(ReactionRole::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Bind an emoji on a message to a role.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/reaction-roles",
    tag = REACTION_ROLE_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateReactionRoleDto,
    responses(
        (status = 201, description = "Binding created", body = ReactionRoleDto),
        (status = 400, description = "Invalid binding data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reaction_role(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<CreateReactionRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let binding = ReactionRoleService::new(&state.db)
        .create(CreateReactionRoleParam::from_dto(server_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(binding.into_dto())))
}

/// Remove a reaction role binding.
#[utoipa::path(
    delete,
    path = "/api/reaction-roles/{reaction_role_id}",
    tag = REACTION_ROLE_TAG,
    params(
        ("reaction_role_id" = String, Path, description = "Reaction role binding ID")
    ),
    responses(
        (status = 204, description = "Binding removed"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Binding's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Binding not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reaction_role(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(reaction_role_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReactionRoleService::new(&state.db);

    let Some(binding) = service.get_by_id(&reaction_role_id).await? else {
        return Err(AppError::not_found("Reaction role not found"));
    };

    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&binding.server_id)])
        .await?;

    if !service.delete(&binding.id).await? {
        return Err(AppError::not_found("Reaction role not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
