use super::*;

/// Tests that notifications are returned for one recipient, newest first.
///
/// Expected: Ok with 2 notifications for "12", newest first
#[tokio::test]
async fn returns_recipient_notifications_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    repo.create(CreateNotificationParams::new("12", "Payment 1 verified"))
        .await?;
    repo.create(CreateNotificationParams::new("13", "Someone else"))
        .await?;
    repo.create(CreateNotificationParams::new("12", "Payment 1 dispatched"))
        .await?;

    let notifications = repo.get_by_recipient("12").await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].message, "Payment 1 dispatched");
    assert_eq!(notifications[1].message, "Payment 1 verified");

    Ok(())
}

/// Tests a recipient without notifications.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unknown_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    assert!(repo.get_by_recipient("nobody").await?.is_empty());

    Ok(())
}
