use super::*;

/// Tests that a new price refreshes the recorded timestamp.
///
/// Expected: Ok with the new price and a recorded_at no earlier than before
#[tokio::test]
async fn updates_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let price = factory::market_price::create_market_price(db, "Potato", 180.0).await?;

    let repo = MarketPriceRepository::new(db);
    let updated = repo
        .update(
            price.id,
            UpdateMarketPriceParams {
                price: Some(195.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 195.0);
    assert!(updated.recorded_at >= price.recorded_at);
    assert_eq!(updated.market, price.market);

    Ok(())
}

/// Tests deleting a price.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn deletes_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let price = factory::market_price::create_market_price(db, "Onion", 260.0).await?;

    let repo = MarketPriceRepository::new(db);
    assert!(repo.delete(price.id).await?);
    assert!(!repo.delete(price.id).await?);

    Ok(())
}
