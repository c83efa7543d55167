use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::product::{CreateProductParams, Product, ProductCategory, UpdateProductParams},
};

/// Repository providing database operations for marketplace products.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            quantity: ActiveValue::Set(params.quantity),
            price: ActiveValue::Set(params.price),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Product::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .map(Product::from_entity)
            .transpose()
    }

    /// Lists products ordered by name, optionally restricted to one category.
    pub async fn get_all(
        &self,
        category: Option<ProductCategory>,
    ) -> Result<Vec<Product>, AppError> {
        let mut query = entity::prelude::Product::find();
        if let Some(category) = category {
            query = query.filter(entity::product::Column::Category.eq(category.as_str()));
        }

        query
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect()
    }

    pub async fn update(&self, id: i32, params: UpdateProductParams) -> Result<Product, AppError> {
        let mut active_model = self.find_active_model(id).await?;

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }

        Product::from_entity(active_model.update(self.db).await?)
    }

    pub async fn set_image(&self, id: i32, path: String) -> Result<Product, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.image = ActiveValue::Set(Some(path));

        Product::from_entity(active_model.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::product::ActiveModel, AppError> {
        let entity = entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Product with id {} not found",
                id
            )))?;

        Ok(entity.into())
    }
}
