use super::*;

/// Tests updating price and stock.
///
/// Expected: Ok with new values, name unchanged
#[tokio::test]
async fn updates_price_and_stock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            product.id,
            UpdateProductParams {
                price: Some(300.0),
                quantity: Some(0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 300.0);
    assert_eq!(updated.quantity, 0);
    assert_eq!(updated.name, product.name);

    Ok(())
}

/// Tests setting the product image and deleting the product.
///
/// Expected: image stored; delete returns true and the product is gone
#[tokio::test]
async fn sets_image_then_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .set_image(product.id, "/uploads/product-x.png".to_string())
        .await?;
    assert_eq!(updated.image.as_deref(), Some("/uploads/product-x.png"));

    assert!(repo.delete(product.id).await?);
    assert!(repo.find_by_id(product.id).await?.is_none());

    Ok(())
}
