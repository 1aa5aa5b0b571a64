//! Contact form messages.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::contact::{ContactMessageDto, CreateContactMessageDto},
    server::model::user::normalize_email,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactMessageDto {
        ContactMessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateContactMessageParams {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, max = 200, message = "Subject must be between 5 and 200 characters"))]
    pub subject: String,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Message must be between 10 and 2000 characters"
    ))]
    pub message: String,
}

impl CreateContactMessageParams {
    pub fn from_dto(dto: CreateContactMessageDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            subject: dto.subject.trim().to_string(),
            message: dto.message.trim().to_string(),
        }
    }
}
