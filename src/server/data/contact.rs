use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::contact::{ContactMessage, CreateContactMessageParams};

pub struct ContactMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new unread message.
    pub async fn create(&self, params: CreateContactMessageParams) -> Result<ContactMessage, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }

    /// Returns every message, newest first.
    pub async fn get_all(&self) -> Result<Vec<ContactMessage>, DbErr> {
        let entities = entity::prelude::ContactMessage::find()
            .order_by_desc(entity::contact_message::Column::CreatedAt)
            .order_by_desc(entity::contact_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ContactMessage::from_entity).collect())
    }

    /// Flags a message as read.
    ///
    /// # Returns
    /// - `Ok(Some(ContactMessage))` - Updated message
    /// - `Ok(None)` - No message with that ID
    pub async fn mark_read(&self, id: i32) -> Result<Option<ContactMessage>, DbErr> {
        let Some(entity) = entity::prelude::ContactMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::contact_message::ActiveModel = entity.into();
        active.read = ActiveValue::Set(true);
        let updated = active.update(self.db).await?;

        Ok(Some(ContactMessage::from_entity(updated)))
    }
}
