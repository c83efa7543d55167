use super::*;

/// Tests creating and then editing a post.
///
/// Expected: Ok with no replies; the edit changes the title only
#[tokio::test]
async fn creates_and_updates_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(
            user.id,
            CreatePostParams {
                title: "Organic pest control".to_string(),
                content: "What works for aphids?".to_string(),
            },
        )
        .await?;
    assert!(post.replies.is_empty());

    let updated = repo
        .update(
            post.id,
            UpdatePostParams {
                title: Some("Organic pest control for chilli".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Organic pest control for chilli");
    assert_eq!(updated.content, "What works for aphids?");

    Ok(())
}
