use super::*;

/// Tests flagging a message as read.
///
/// Expected: Ok(Some(ContactMessage)) with read true
#[tokio::test]
async fn marks_message_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    let message = repo.create(message_params("Opening hours")).await?;

    let updated = repo.mark_read(message.id).await?;

    assert!(updated.is_some());
    assert!(updated.unwrap().read);

    Ok(())
}

/// Tests flagging an unknown message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);

    assert!(repo.mark_read(99999).await?.is_none());

    Ok(())
}
