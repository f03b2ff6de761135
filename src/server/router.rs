//! Route table and API documentation.
//!
//! Everything except register, login and logout sits behind `require_authenticated`.
//! The OpenAPI document is built from the handlers' `#[utoipa::path]` annotations and
//! served at `/api/openapi.json`, with Swagger UI at `/api/docs`.

use axum::{http::StatusCode, middleware::from_fn_with_state, response::IntoResponse, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        analytics, auth, custom_command, dashboard, log_event, mod_action, reaction_role, server,
        settings, ticket,
    },
    error::error_response,
    middleware::auth::require_authenticated,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Zyx Dashboard API", description = "Configuration API for the Zyx Discord bot"),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "dashboard", description = "Aggregates across the caller's servers"),
        (name = "server", description = "Registered Discord servers"),
        (name = "settings", description = "Per-server bot settings"),
        (name = "ticket", description = "Support tickets"),
        (name = "mod_action", description = "Moderation audit log"),
        (name = "log_event", description = "Server event log"),
        (name = "custom_command", description = "Custom bot commands"),
        (name = "reaction_role", description = "Reaction role bindings"),
        (name = "analytics", description = "Daily server analytics")
    )
)]
struct ApiDoc;

/// Builds the application router with state attached.
pub fn router(state: AppState) -> Router {
    let (public, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .split_for_parts();

    let (protected, protected_api) = OpenApiRouter::new()
        .routes(routes!(auth::get_user))
        .routes(routes!(dashboard::get_stats))
        .routes(routes!(dashboard::get_activity))
        .routes(routes!(server::get_servers, server::create_server))
        .routes(routes!(server::get_server))
        .routes(routes!(
            settings::get_mod_settings,
            settings::update_mod_settings
        ))
        .routes(routes!(
            settings::get_ticket_settings,
            settings::update_ticket_settings
        ))
        .routes(routes!(
            settings::get_auto_mod_settings,
            settings::update_auto_mod_settings
        ))
        .routes(routes!(
            settings::get_log_settings,
            settings::update_log_settings
        ))
        .routes(routes!(
            settings::get_welcome_settings,
            settings::update_welcome_settings
        ))
        .routes(routes!(
            settings::get_auto_role_settings,
            settings::update_auto_role_settings
        ))
        .routes(routes!(ticket::get_tickets, ticket::create_ticket))
        .routes(routes!(ticket::close_ticket))
        .routes(routes!(
            mod_action::get_mod_actions,
            mod_action::create_mod_action
        ))
        .routes(routes!(
            log_event::get_log_events,
            log_event::create_log_event
        ))
        .routes(routes!(
            custom_command::get_custom_commands,
            custom_command::create_custom_command
        ))
        .routes(routes!(
            custom_command::get_custom_command,
            custom_command::update_custom_command,
            custom_command::delete_custom_command
        ))
        .routes(routes!(custom_command::use_custom_command))
        .routes(routes!(
            reaction_role::get_reaction_roles,
            reaction_role::create_reaction_role
        ))
        .routes(routes!(reaction_role::delete_reaction_role))
        .routes(routes!(
            analytics::get_analytics,
            analytics::record_analytics
        ))
        .split_for_parts();

    api.merge(protected_api);

    let protected =
        protected.route_layer(from_fn_with_state(state.clone(), require_authenticated));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed() -> impl IntoResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
}

async fn not_found() -> impl IntoResponse {
    error_response(StatusCode::NOT_FOUND, "Not found".to_string())
}
