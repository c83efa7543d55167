use super::*;

/// Tests paginating users ordered by username.
///
/// Expected: Ok with 2 users on the first page, 1 on the second, 3 total over 2 pages
#[tokio::test]
async fn paginates_users_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["charlie", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total, pages) = repo.get_all_paginated(0, 2).await?;
    let (second, _, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(pages, 2);
    assert_eq!(
        first.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].username, "charlie");

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: Ok with no users and a total of 0
#[tokio::test]
async fn returns_empty_page_without_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total, _) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
