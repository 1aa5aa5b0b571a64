use super::*;

/// Tests listing messages newest first.
///
/// Expected: Ok(Vec<ContactMessage>) in reverse insertion order
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    let first = repo.create(message_params("First question")).await?;
    let second = repo.create(message_params("Second question")).await?;

    let messages = repo.get_all().await?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, second.id);
    assert_eq!(messages[1].id, first.id);

    Ok(())
}
