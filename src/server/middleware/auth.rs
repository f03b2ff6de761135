use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{auth::AuthError, AppError},
    middleware::session::SessionCookie,
    model::server::Server,
    service::auth::token::SessionIdentity,
    state::AppState,
};

/// Rejects requests without a valid session cookie.
///
/// On success the verified `SessionIdentity` is inserted into the request extensions
/// for handlers to extract with `Extension<SessionIdentity>`. Otherwise the request
/// never reaches the handler and the client gets 401 `{"message":"Unauthorized"}`.
pub async fn require_authenticated(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = SessionCookie::token(&jar).and_then(|token| state.tokens.verify(token));

    let Some(identity) = identity else {
        return AuthError::Unauthorized.into_response();
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

pub enum Permission<'p> {
    /// Caller must own the server with this ID.
    ServerOwner(&'p str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a SessionIdentity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a SessionIdentity) -> Self {
        Self { db, identity }
    }

    /// Checks every permission in order, failing on the first that is not met.
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::ServerOwner(server_id) => {
                    self.require_server_owner(server_id).await?;
                }
            }
        }

        Ok(())
    }

    /// Loads a server and checks the caller owns it.
    ///
    /// # Returns
    /// - `Ok(Server)` - The caller's server
    /// - `Err(AppError::NotFound)` - No server with that ID
    /// - `Err(AppError::AuthErr(AuthError::Forbidden))` - Server belongs to someone else
    pub async fn require_server_owner(&self, server_id: &str) -> Result<Server, AppError> {
        let Some(server) = ServerRepository::new(self.db).find_by_id(server_id).await? else {
            return Err(AppError::not_found("Server not found"));
        };

        if server.owner_id != self.identity.user_id {
            tracing::debug!(
                "User {} denied access to server {}",
                self.identity.user_id,
                server_id
            );
            return Err(AuthError::Forbidden.into());
        }

        Ok(server)
    }
}
