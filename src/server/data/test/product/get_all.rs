use super::*;

/// Tests filtering products by category.
///
/// Expected: Ok with only the tools, sorted by name
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Sprayer")
        .category("tools")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Hoe")
        .category("tools")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Chilli seeds")
        .category("seeds")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let tools = repo.get_all(Some(ProductCategory::Tools)).await?;
    let all = repo.get_all(None).await?;

    assert_eq!(
        tools.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Hoe", "Sprayer"]
    );
    assert_eq!(all.len(), 3);

    Ok(())
}
