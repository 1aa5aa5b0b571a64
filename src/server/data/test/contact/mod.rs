use crate::server::{
    data::contact::ContactMessageRepository, model::contact::CreateContactMessageParams,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_all;
mod mark_read;

fn message_params(subject: &str) -> CreateContactMessageParams {
    CreateContactMessageParams {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        subject: subject.to_string(),
        message: "Do you deliver cars to the airport?".to_string(),
    }
}
