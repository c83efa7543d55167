use super::*;

/// Tests creating a card payment with an item snapshot.
///
/// Expected: Ok with status completed, last 4 digits and both items stored
#[tokio::test]
async fn creates_card_payment_with_items() -> Result<(), AppError> {
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
            order_ref: "15".to_string(),
            method: PaymentMethod::Card,
            status: PaymentStatus::Completed,
            amount: 1300.0,
            card_holder: Some("R Silva".to_string()),
            card_last4: Some("4242".to_string()),
            card_expiry: Some("08/30".to_string()),
            slip_image: None,
            items: vec![
                PaymentItem {
                    product_name: "Chilli seeds".to_string(),
                    unit_price: 250.0,
                    quantity: 4,
                },
                PaymentItem {
                    product_name: "Hoe".to_string(),
                    unit_price: 300.0,
                    quantity: 1,
                },
            ],
        })
        .await?;

    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.card_last4.as_deref(), Some("4242"));
    assert!(payment.invoice_path.is_none());

    let found = repo.find_by_id(payment.id).await?.unwrap();
    assert_eq!(found.items.len(), 2);
    assert_eq!(found.items[0].product_name, "Chilli seeds");

    Ok(())
}
