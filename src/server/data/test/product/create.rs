use super::*;

/// Tests creating a product.
///
/// Expected: Ok with category parsed back from storage
#[tokio::test]
async fn creates_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Urea 50kg".to_string(),
            category: ProductCategory::Fertilizers,
            description: Some("Nitrogen fertilizer".to_string()),
            quantity: 40,
            price: 9500.0,
        })
        .await?;

    let found = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(found.category, ProductCategory::Fertilizers);
    assert_eq!(found.quantity, 40);
    assert!(found.image.is_none());

    Ok(())
}

/// Tests reading a product whose stored category is not recognized.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_for_unknown_stored_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .category("spaceships")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let result = repo.find_by_id(product.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
