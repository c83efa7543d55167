use sea_orm::DatabaseConnection;

use crate::server::{
    data::market::MarketPriceRepository,
    error::AppError,
    model::market::{CreateMarketPriceParams, MarketPrice, UpdateMarketPriceParams},
    util::validate::{require_text, validate_non_negative},
};

/// Market price board maintained by admins.
pub struct MarketPriceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketPriceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMarketPriceParams) -> Result<MarketPrice, AppError> {
        validate_non_negative("price", params.price)?;

        MarketPriceRepository::new(self.db)
            .create(CreateMarketPriceParams {
                item_name: require_text("itemName", &params.item_name)?,
                category: require_text("category", &params.category)?,
                market: require_text("market", &params.market)?,
                unit: require_text("unit", &params.unit)?,
                price: params.price,
            })
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MarketPrice>, AppError> {
        MarketPriceRepository::new(self.db).find_by_id(id).await
    }

    /// Lists prices, most recently recorded first. A blank `item` filter is ignored.
    pub async fn get_all(&self, item: Option<&str>) -> Result<Vec<MarketPrice>, AppError> {
        let item = item.map(str::trim).filter(|item| !item.is_empty());

        MarketPriceRepository::new(self.db).get_all(item).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMarketPriceParams,
    ) -> Result<MarketPrice, AppError> {
        let repo = MarketPriceRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(market_price_not_found(id));
        }

        if let Some(price) = params.price {
            validate_non_negative("price", price)?;
        }
        let required = |field: &str, value: Option<String>| {
            value.map(|value| require_text(field, &value)).transpose()
        };

        repo.update(
            id,
            UpdateMarketPriceParams {
                item_name: required("itemName", params.item_name)?,
                category: required("category", params.category)?,
                market: required("market", params.market)?,
                unit: required("unit", params.unit)?,
                price: params.price,
            },
        )
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MarketPriceRepository::new(self.db).delete(id).await? {
            return Err(market_price_not_found(id));
        }
        Ok(())
    }
}

fn market_price_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Market price {} not found", id))
}
