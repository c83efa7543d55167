use super::*;

/// Tests answering a question.
///
/// Expected: Ok with answer, answerer and timestamp recorded
#[tokio::test]
async fn records_answer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asker = factory::user::create_user(db).await?;
    let expert = factory::user::create_admin(db).await?;
    let entry = factory::forum_entry::create_forum_entry(db, asker.id).await?;

    let repo = ForumRepository::new(db);
    let answered = repo
        .set_answer(
            entry.id,
            AnswerParams {
                answer: "Split it over three applications.".to_string(),
                answered_by: expert.id,
            },
        )
        .await?;

    assert_eq!(
        answered.answer.as_deref(),
        Some("Split it over three applications.")
    );
    assert_eq!(answered.answered_by, Some(expert.id));
    assert!(answered.answered_at.is_some());

    Ok(())
}
