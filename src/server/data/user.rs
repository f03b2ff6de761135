//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing dashboard accounts. Email
//! uniqueness is enforced by the unique index on `user.email`, so concurrent
//! registrations with the same address can never produce two rows.

use crate::server::model::user::{CreateUserParam, User};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated UUID.
    ///
    /// # Arguments
    /// - `param` - Normalized email, password digest and optional names
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation when the email is taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            profile_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email. The caller is expected to pass a normalized address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
