use super::*;

/// Tests storing a contact message.
///
/// Expected: Ok(ContactMessage) unread
#[tokio::test]
async fn creates_unread_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    let message = repo.create(message_params("Delivery")).await?;

    assert!(message.id > 0);
    assert_eq!(message.subject, "Delivery");
    assert!(!message.read);

    Ok(())
}
