use super::*;

/// Tests creating a billing snapshot.
///
/// Expected: Ok and the record is listed
#[tokio::test]
async fn creates_billing_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillingRepository::new(db);
    let billing = repo
        .create(CreateBillingParams {
            user_ref: "guest-1".to_string(),
            full_name: "Ruwan Silva".to_string(),
            email: "ruwan@example.com".to_string(),
            phone: "0771112223".to_string(),
            address: "5 Lake Road".to_string(),
            city: "Kurunegala".to_string(),
            postal_code: "60000".to_string(),
        })
        .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, billing.id);
    assert_eq!(all[0].city, "Kurunegala");

    Ok(())
}
