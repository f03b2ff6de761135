use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterUserDto, SessionUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::SessionCookie,
        model::user::{LoginParam, RegisterUserParam},
        service::auth::{token::SessionIdentity, AuthService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account, signs the caller in and sets the session cookie.
///
/// # Returns
/// - `201 Created` - Account created, session cookie set
/// - `400 Bad Request` - Missing email/password or email already registered
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = SessionUserDto),
        (status = 400, description = "Invalid registration data or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    let token = state.tokens.issue(&user.identity())?;
    let jar = SessionCookie::new(state.secure_cookies).issue(jar, token);

    Ok((StatusCode::CREATED, jar, Json(user.into_session_dto())))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Signed in, session cookie set
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Signing or database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = SessionUserDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(LoginParam::from_dto(payload))
        .await?;

    let token = state.tokens.issue(&user.identity())?;
    let jar = SessionCookie::new(state.secure_cookies).issue(jar, token);

    Ok((StatusCode::OK, jar, Json(user.into_session_dto())))
}

/// Sign out by expiring the session cookie.
///
/// Always succeeds, with or without an existing session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto)
    ),
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = SessionCookie::new(state.secure_cookies).clear(jar);

    (
        StatusCode::OK,
        jar,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Get the signed-in user.
///
/// # Returns
/// - `200 OK` - The current user's profile
/// - `401 Unauthorized` - No valid session, or the account no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .current_user(&identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
