use super::*;

/// Tests replying to another user's post.
///
/// Expected: Ok with the reply stored and a notice emailed to the post author
#[tokio::test]
async fn emails_post_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();

    let author = factory::user::create_user(db).await?;
    let replier = User::from_entity(factory::user::create_user(db).await?)?;
    let post = factory::post::create_post(db, author.id).await?;

    let service = PostService::new(db, &mailer);
    let reply = service.reply(post.id, &replier, "Try neem oil.").await?;

    assert_eq!(reply.user_id, replier.id);
    assert_eq!(reply.content, "Try neem oil.");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, author.email);
    assert!(sent[0].body.contains(&replier.username));

    let post = service.get_by_id(post.id).await?.unwrap();
    assert_eq!(post.replies.len(), 1);

    Ok(())
}

/// Tests replying to one's own post.
///
/// Expected: Ok and no email sent
#[tokio::test]
async fn self_reply_sends_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();

    let author = User::from_entity(factory::user::create_user(db).await?)?;
    let post = factory::post::create_post(db, author.id).await?;

    let service = PostService::new(db, &mailer);
    service.reply(post.id, &author, "Update: it worked").await?;

    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests a reply when the mail relay fails.
///
/// Expected: Ok with the reply kept
#[tokio::test]
async fn keeps_reply_when_mail_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::failing();

    let author = factory::user::create_user(db).await?;
    let replier = User::from_entity(factory::user::create_user(db).await?)?;
    let post = factory::post::create_post(db, author.id).await?;

    let service = PostService::new(db, &mailer);
    service.reply(post.id, &replier, "Try neem oil.").await?;

    let post = service.get_by_id(post.id).await?.unwrap();
    assert_eq!(post.replies.len(), 1);

    Ok(())
}

/// Tests an empty reply and a reply to a missing post.
///
/// Expected: Err(BadRequest) and Err(NotFound)
#[tokio::test]
async fn rejects_blank_or_orphan_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();

    let replier = User::from_entity(factory::user::create_user(db).await?)?;
    let post = factory::post::create_post(db, replier.id).await?;

    let service = PostService::new(db, &mailer);

    let blank = service.reply(post.id, &replier, "   ").await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let orphan = service.reply(post.id + 1, &replier, "hello").await;
    assert!(matches!(orphan, Err(AppError::NotFound(_))));

    Ok(())
}
