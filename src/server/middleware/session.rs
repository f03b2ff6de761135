//! Session cookie management.
//!
//! The session lives entirely in one cookie, `zyx_auth_token`, holding a signed token
//! issued by `TokenService`. This module owns the cookie's name and attributes so the
//! login, register and logout handlers and the authentication middleware all agree on
//! them.
//!
//! # Attributes
//!
//! - `HttpOnly` and `SameSite=Lax`
//! - `Path=/`
//! - `Max-Age` of seven days, matching the token lifetime
//! - `Secure` only when the application runs in production

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::service::auth::token::SESSION_TTL_DAYS;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "zyx_auth_token";

/// Builds and reads the session cookie.
///
/// Wraps the cookie policy (currently just the `Secure` flag) so handlers don't
/// repeat attribute setup.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    /// Whether to add the `Secure` attribute.
    secure: bool,
}

impl SessionCookie {
    /// Creates a new SessionCookie policy.
    ///
    /// # Arguments
    /// - `secure` - Whether cookies should carry the `Secure` attribute
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Stores a freshly issued token in the jar.
    ///
    /// # Arguments
    /// - `jar` - Cookie jar from the request
    /// - `token` - Signed session token
    ///
    /// # Returns
    /// The jar with the session cookie set; return it from the handler to emit `Set-Cookie`
    pub fn issue(&self, jar: CookieJar, token: String) -> CookieJar {
        jar.add(self.build(token, time::Duration::days(SESSION_TTL_DAYS)))
    }

    /// Overwrites the session cookie with an empty, immediately expiring value.
    ///
    /// # Returns
    /// The jar with a `Max-Age=0` session cookie
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.build(String::new(), time::Duration::ZERO))
    }

    /// Reads the session token from the jar, if present and non-empty.
    pub fn token(jar: &CookieJar) -> Option<&str> {
        jar.get(SESSION_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }

    fn build(&self, value: String, max_age: time::Duration) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, value))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(max_age)
            .secure(self.secure)
            .build()
    }
}
