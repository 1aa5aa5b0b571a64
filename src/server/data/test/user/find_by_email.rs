use super::*;

/// Tests finding a user row by email.
///
/// Verifies the returned row includes the stored password hash.
///
/// Expected: Ok(Some(Model)) with the password hash
#[tokio::test]
async fn finds_user_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("driver@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("driver@example.com").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().password_hash, "stored-hash");
    assert!(repo.email_exists("driver@example.com").await?);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None) and email_exists false
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
