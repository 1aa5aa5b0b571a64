use super::*;

/// Tests granting admin status to a user.
///
/// Expected: Ok(Some(User)) with admin true
#[tokio::test]
async fn grants_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(user.id, true).await?;

    assert!(updated.is_some());
    assert!(updated.unwrap().admin);
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}

/// Tests setting admin on an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.set_admin(4242, true).await?.is_none());

    Ok(())
}
