use super::*;

/// Tests asking a question.
///
/// Expected: Ok with no answer yet, listed among all questions
#[tokio::test]
async fn creates_unanswered_question() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ForumRepository::new(db);
    let entry = repo
        .create(
            user.id,
            CreateQuestionParams {
                question: "How deep should I plant potatoes?".to_string(),
                category: None,
            },
        )
        .await?;

    assert!(entry.answer.is_none());
    assert!(entry.answered_at.is_none());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
