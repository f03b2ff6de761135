use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ticket::{CreateTicketParam, Ticket},
        service::{auth::token::SessionIdentity, ticket::TicketService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// List a server's tickets, newest first.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Tickets, newest first", body = Vec<TicketDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let tickets = TicketService::new(&state.db)
        .get_by_server(&server_id)
        .await?;

    let dtos: Vec<TicketDto> = tickets.into_iter().map(Ticket::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Open a ticket in a server.
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket opened", body = TicketDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Server belongs to another user", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(server_id): Path<String>,
    ApiJson(payload): ApiJson<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&server_id)])
        .await?;

    let ticket = TicketService::new(&state.db)
        .create(CreateTicketParam::from_dto(server_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Close a ticket.
///
/// Closing an already closed ticket succeeds and refreshes its close time.
///
/// # Access Control
/// - Caller must own the server the ticket belongs to
#[utoipa::path(
    patch,
    path = "/api/tickets/{ticket_id}/close",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket closed", body = TicketDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Ticket's server belongs to another user", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_ticket(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let Some(ticket) = service.get_by_id(&ticket_id).await? else {
        return Err(AppError::not_found("Ticket not found"));
    };

    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::ServerOwner(&ticket.server_id)])
        .await?;

    match service.close(&ticket_id).await? {
        Some(ticket) => Ok((StatusCode::OK, Json(ticket.into_dto()))),
        None => Err(AppError::not_found("Ticket not found")),
    }
}
