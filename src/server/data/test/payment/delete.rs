use super::*;

/// Tests that deleting a payment removes its item snapshot.
///
/// Expected: Ok(true) and no payment items left
#[tokio::test]
async fn deletes_payment_and_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let billing = factory::billing::create_billing(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            billing_id: billing.id,
            order_ref: "EXT-9".to_string(),
            method: PaymentMethod::Slip,
            status: PaymentStatus::Pending,
            amount: 250.0,
            card_holder: None,
            card_last4: None,
            card_expiry: None,
            slip_image: Some("/uploads/slip-1.png".to_string()),
            items: vec![PaymentItem {
                product_name: "Seeds".to_string(),
                unit_price: 250.0,
                quantity: 1,
            }],
        })
        .await?;

    assert!(repo.delete(payment.id).await?);
    assert!(repo.find_by_id(payment.id).await?.is_none());
    assert_eq!(entity::prelude::PaymentItem::find().count(db).await?, 0);

    Ok(())
}
