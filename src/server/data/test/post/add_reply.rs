use super::*;

/// Tests that replies come back oldest first.
///
/// Expected: Ok with 2 replies in insertion order
#[tokio::test]
async fn returns_replies_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.add_reply(post.id, other.id, "First".to_string())
        .await?;
    repo.add_reply(post.id, author.id, "Second".to_string())
        .await?;

    let found = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(
        found
            .replies
            .iter()
            .map(|r| r.content.as_str())
            .collect::<Vec<_>>(),
        vec!["First", "Second"]
    );

    Ok(())
}
