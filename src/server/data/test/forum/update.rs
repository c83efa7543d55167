use super::*;

/// Tests editing a question's category.
///
/// Expected: Ok with the new category, question unchanged
#[tokio::test]
async fn updates_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entry = factory::forum_entry::create_forum_entry(db, user.id).await?;

    let repo = ForumRepository::new(db);
    let updated = repo
        .update(
            entry.id,
            UpdateQuestionParams {
                category: Some("Paddy".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.category.as_deref(), Some("Paddy"));
    assert_eq!(updated.question, entry.question);

    Ok(())
}

/// Tests deleting a question.
///
/// Expected: Ok(true) and the question is gone
#[tokio::test]
async fn deletes_question() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entry = factory::forum_entry::create_forum_entry(db, user.id).await?;

    let repo = ForumRepository::new(db);
    assert!(repo.delete(entry.id).await?);
    assert!(repo.find_by_id(entry.id).await?.is_none());

    Ok(())
}
