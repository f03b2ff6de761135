//! Account registration and email/password login.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, User},
};

pub mod password;
pub mod token;

use password::{hash_password, verify_password, verify_placeholder};

const MISSING_CREDENTIALS: &str = "Email and password are required";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a freshly hashed password.
    ///
    /// # Arguments
    /// - `param` - Normalized email, plaintext password and optional names
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AppError::AuthErr(AuthError::UserExists))` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.email.is_empty() || param.password.is_empty() {
            return Err(AppError::bad_request(MISSING_CREDENTIALS));
        }

        let password_hash = hash_password(&param.password)?;

        let result = UserRepository::new(self.db)
            .create(CreateUserParam {
                email: param.email,
                password_hash,
                first_name: param.first_name,
                last_name: param.last_name,
            })
            .await;

        match result {
            Ok(user) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(AuthError::UserExists.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks an email/password pair.
    ///
    /// Unknown email and wrong password produce the same error, and both run one
    /// Argon2 verification.
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        if param.email.is_empty() || param.password.is_empty() {
            return Err(AppError::bad_request(MISSING_CREDENTIALS));
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            verify_placeholder(&param.password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("User {} signed in", user.id);

        Ok(user)
    }

    /// Loads the account behind a session.
    pub async fn current_user(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id.to_string()).into())
    }
}

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn register_param(email: &str, password: &str) -> RegisterUserParam {
        RegisterUserParam {
            email: email.to_string(),
            password: password.to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        }
    }

    fn login_param(email: &str, password: &str) -> LoginParam {
        LoginParam {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        let user = service
            .register(register_param("ada@example.com", "hunter22"))
            .await
            .unwrap();
        assert_ne!(user.password_hash, "hunter22");

        let logged_in = service
            .login(login_param("ada@example.com", "hunter22"))
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        service
            .register(register_param("ada@example.com", "hunter22"))
            .await
            .unwrap();
        let result = service
            .register(register_param("ada@example.com", "other-password"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserExists))
        ));
    }

    #[tokio::test]
    async fn register_requires_email_and_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthService::new(db)
            .register(register_param("", "hunter22"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        service
            .register(register_param("ada@example.com", "hunter22"))
            .await
            .unwrap();

        let wrong_password = service
            .login(login_param("ada@example.com", "hunter23"))
            .await;
        let unknown_email = service
            .login(login_param("bob@example.com", "hunter22"))
            .await;

        assert!(matches!(
            wrong_password,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            unknown_email,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn current_user_fails_for_deleted_account() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthService::new(db).current_user("gone").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
        ));
    }
}
