use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::market::{CreateMarketPriceParams, MarketPrice, UpdateMarketPriceParams},
};

pub struct MarketPriceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketPriceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMarketPriceParams) -> Result<MarketPrice, AppError> {
        let entity = entity::market_price::ActiveModel {
            item_name: ActiveValue::Set(params.item_name),
            category: ActiveValue::Set(params.category),
            market: ActiveValue::Set(params.market),
            unit: ActiveValue::Set(params.unit),
            price: ActiveValue::Set(params.price),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MarketPrice::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MarketPrice>, AppError> {
        let entity = entity::prelude::MarketPrice::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MarketPrice::from_entity))
    }

    /// Lists prices, most recently recorded first.
    ///
    /// `item` narrows the result to entries whose item name contains it.
    pub async fn get_all(&self, item: Option<&str>) -> Result<Vec<MarketPrice>, AppError> {
        let mut query = entity::prelude::MarketPrice::find();
        if let Some(item) = item {
            query = query.filter(entity::market_price::Column::ItemName.contains(item));
        }

        let entities = query
            .order_by_desc(entity::market_price::Column::RecordedAt)
            .order_by_desc(entity::market_price::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MarketPrice::from_entity).collect())
    }

    /// Updates the given fields; a new price also refreshes `recorded_at`.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMarketPriceParams,
    ) -> Result<MarketPrice, AppError> {
        let entity = entity::prelude::MarketPrice::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Market price with id {} not found",
                id
            )))?;

        let mut active_model: entity::market_price::ActiveModel = entity.into();
        if let Some(item_name) = params.item_name {
            active_model.item_name = ActiveValue::Set(item_name);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(market) = params.market {
            active_model.market = ActiveValue::Set(market);
        }
        if let Some(unit) = params.unit {
            active_model.unit = ActiveValue::Set(unit);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
            active_model.recorded_at = ActiveValue::Set(Utc::now());
        }

        Ok(MarketPrice::from_entity(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::MarketPrice::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
