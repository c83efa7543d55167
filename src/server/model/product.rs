//! Marketplace product domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::error::{internal::InternalError, AppError},
};

/// Closed set of marketplace categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    Seeds,
    Fertilizers,
    Pesticides,
    Tools,
    Machinery,
    Produce,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 7] = [
        Self::Seeds,
        Self::Fertilizers,
        Self::Pesticides,
        Self::Tools,
        Self::Machinery,
        Self::Produce,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeds => "seeds",
            Self::Fertilizers => "fertilizers",
            Self::Pesticides => "pesticides",
            Self::Tools => "tools",
            Self::Machinery => "machinery",
            Self::Produce => "produce",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Parses a category from request input.
    ///
    /// # Returns
    /// - `Ok(ProductCategory)` - Recognized category
    /// - `Err(AppError::BadRequest)` - Message lists the accepted categories
    pub fn from_request(value: &str) -> Result<Self, AppError> {
        Self::parse(value).ok_or_else(|| {
            let accepted: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
            AppError::BadRequest(format!(
                "Invalid category '{}', expected one of: {}",
                value,
                accepted.join(", ")
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: ProductCategory,
    pub description: Option<String>,
    /// Units in stock.
    pub quantity: i32,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, AppError> {
        let category = ProductCategory::parse(&entity.category).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "product.category",
                value: entity.category.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            category,
            description: entity.description,
            quantity: entity.quantity,
            price: entity.price,
            image: entity.image,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            category: self.category.as_str().to_string(),
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub category: ProductCategory,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
}

impl CreateProductParams {
    /// Converts the request DTO, rejecting unknown categories.
    pub fn from_dto(dto: CreateProductDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            category: ProductCategory::from_request(&dto.category)?,
            description: dto.description,
            quantity: dto.quantity,
            price: dto.price,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Result<Self, AppError> {
        let category = dto
            .category
            .as_deref()
            .map(ProductCategory::from_request)
            .transpose()?;

        Ok(Self {
            name: dto.name,
            category,
            description: dto.description,
            quantity: dto.quantity,
            price: dto.price,
        })
    }
}
