use super::*;

/// Tests recording a market price.
///
/// Expected: Ok and the price can be found by ID
#[tokio::test]
async fn creates_market_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MarketPriceRepository::new(db);
    let price = repo
        .create(CreateMarketPriceParams {
            item_name: "Carrot".to_string(),
            category: "Vegetables".to_string(),
            market: "Nuwara Eliya".to_string(),
            unit: "kg".to_string(),
            price: 320.0,
        })
        .await?;

    let found = repo.find_by_id(price.id).await?.unwrap();
    assert_eq!(found.item_name, "Carrot");
    assert_eq!(found.price, 320.0);

    Ok(())
}
