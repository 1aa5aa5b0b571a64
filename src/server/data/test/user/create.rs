use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a non-admin user and returns the domain model
/// with the generated ID.
///
/// Expected: Ok(User) with admin false
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(user_params("jane@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert!(!user.admin);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(user_params("jane@example.com")).await?;

    let result = repo.create(user_params("jane@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
