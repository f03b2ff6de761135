//! User domain models and parameters.
//!
//! Provides the dashboard account model along with the parameter types used when
//! registering and signing in.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, RegisterUserDto, SessionUserDto, UserDto},
    server::service::auth::token::SessionIdentity,
};

/// Dashboard account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Normalized (trimmed, lowercase) email address.
    pub email: String,
    /// Argon2 PHC digest; never leaves the server.
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            profile_image_url: entity.profile_image_url,
            created_at: entity.created_at,
        }
    }

    /// Identity embedded in the session token.
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            user_id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    pub fn into_session_dto(self) -> SessionUserDto {
        SessionUserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: self.profile_image_url,
        }
    }
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
            first_name: dto.first_name.filter(|name| !name.trim().is_empty()),
            last_name: dto.last_name.filter(|name| !name.trim().is_empty()),
        }
    }
}

/// Parameters for inserting a user row once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Parameters for signing in.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}
