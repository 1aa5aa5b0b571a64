use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::contact::ContactMessageRepository,
    error::AppError,
    model::contact::{ContactMessage, CreateContactMessageParams},
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn submit(&self, params: CreateContactMessageParams) -> Result<ContactMessage, AppError> {
        params.validate()?;

        let message = ContactMessageRepository::new(self.db).create(params).await?;
        tracing::info!(message_id = message.id, "Received contact message");

        Ok(message)
    }

    pub async fn get_all(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(ContactMessageRepository::new(self.db).get_all().await?)
    }

    pub async fn mark_read(&self, id: i32) -> Result<ContactMessage, AppError> {
        ContactMessageRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact message {} not found", id)))
    }
}
