use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod set_admin;

fn user_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}
