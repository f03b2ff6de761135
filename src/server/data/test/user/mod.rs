use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::builder::TestBuilder;

mod create;
mod find_by_email;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        first_name: Some("Alice".to_string()),
        last_name: None,
    }
}
