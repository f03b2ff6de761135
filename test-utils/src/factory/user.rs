//! User factory for creating test user entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("alice@example.com")
///     .first_name(Some("Alice"))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - email: `"user{n}@example.com"` where n is auto-incremented
    /// - password_hash: a placeholder that never verifies
    /// - first_name / last_name: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_uuid(),
            email: format!("user{}@example.com", n),
            password_hash: "unusable".to_string(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn first_name(mut self, first_name: Option<&str>) -> Self {
        self.first_name = first_name.map(str::to_string);
        self
    }

    pub fn last_name(mut self, last_name: Option<&str>) -> Self {
        self.last_name = last_name.map(str::to_string);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            profile_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
