use super::*;

/// Tests filtering by a fragment of the item name.
///
/// Expected: Ok with both bean entries only
#[tokio::test]
async fn filters_by_item_fragment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::market_price::create_market_price(db, "Green beans", 400.0).await?;
    factory::market_price::create_market_price(db, "Long beans", 380.0).await?;
    factory::market_price::create_market_price(db, "Tomato", 210.0).await?;

    let repo = MarketPriceRepository::new(db);
    let beans = repo.get_all(Some("beans")).await?;

    assert_eq!(beans.len(), 2);
    assert!(beans.iter().all(|p| p.item_name.contains("beans")));
    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
