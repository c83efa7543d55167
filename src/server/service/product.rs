use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, Product, ProductCategory, UpdateProductParams},
    service::storage::FileStorage,
    util::{
        upload::UploadedFile,
        validate::{optional_text, require_text, validate_non_negative},
    },
};

/// Marketplace catalogue management.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        validate_stock(params.quantity)?;
        validate_non_negative("price", params.price)?;

        let params = CreateProductParams {
            name: require_text("name", &params.name)?,
            description: optional_text(params.description),
            ..params
        };

        let product = ProductRepository::new(self.db).create(params).await?;
        tracing::info!("Created product {} ({})", product.name, product.id);

        Ok(product)
    }

    /// Lists the catalogue, optionally filtered by a category name.
    ///
    /// # Returns
    /// - `Ok(Vec<Product>)` - Matching products ordered by name
    /// - `Err(AppError::BadRequest)` - Unknown category
    pub async fn get_all(&self, category: Option<&str>) -> Result<Vec<Product>, AppError> {
        let category = category
            .filter(|c| !c.trim().is_empty())
            .map(ProductCategory::from_request)
            .transpose()?;

        ProductRepository::new(self.db).get_all(category).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        ProductRepository::new(self.db).find_by_id(id).await
    }

    pub async fn update(&self, id: i32, params: UpdateProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(product_not_found(id));
        }
        if let Some(quantity) = params.quantity {
            validate_stock(quantity)?;
        }
        if let Some(price) = params.price {
            validate_non_negative("price", price)?;
        }

        let params = UpdateProductParams {
            name: params
                .name
                .map(|name| require_text("name", &name))
                .transpose()?,
            description: optional_text(params.description),
            ..params
        };

        repo.update(id, params).await
    }

    /// Stores a product image, replacing and removing any previous one.
    pub async fn set_image(
        &self,
        id: i32,
        storage: &FileStorage,
        image: UploadedFile,
    ) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(product) = repo.find_by_id(id).await? else {
            return Err(product_not_found(id));
        };

        let path = storage.save_image(image, "product").await?;
        let updated = repo.set_image(id, path).await?;

        if let Some(previous) = product.image {
            storage.remove_upload(&previous).await;
        }

        Ok(updated)
    }

    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(product) = repo.find_by_id(id).await? else {
            return Err(product_not_found(id));
        };

        repo.delete(id).await?;
        if let Some(image) = product.image {
            storage.remove_upload(&image).await;
        }

        Ok(())
    }
}

fn validate_stock(quantity: i32) -> Result<(), AppError> {
    if quantity < 0 {
        return Err(AppError::BadRequest(
            "quantity must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn product_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}
