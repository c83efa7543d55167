use super::*;

/// Tests that each listed post carries only its own replies.
///
/// Expected: the newest post first with 1 reply, the older with 2
#[tokio::test]
async fn groups_replies_per_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = factory::post::create_post(db, user.id).await?;
    let newer = factory::post::create_post(db, user.id).await?;
    factory::post::create_reply(db, older.id, user.id).await?;
    factory::post::create_reply(db, older.id, user.id).await?;
    factory::post::create_reply(db, newer.id, user.id).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_all().await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, newer.id);
    assert_eq!(posts[0].replies.len(), 1);
    assert_eq!(posts[1].replies.len(), 2);

    Ok(())
}
