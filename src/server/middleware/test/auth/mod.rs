use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token::SessionIdentity,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn identity(user_id: &str) -> SessionIdentity {
    SessionIdentity {
        user_id: user_id.to_string(),
        email: format!("{}@example.com", user_id),
        first_name: None,
        last_name: None,
    }
}
