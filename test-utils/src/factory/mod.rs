//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row take its id as an
//! argument; the `helpers` module creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let land = factory::land::create_land(&db, user.id).await?;
//!
//!     // Create an order with its user and product
//!     let (user, product, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("root")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod billing;
pub mod crop_tracker;
pub mod forum_entry;
pub mod helpers;
pub mod land;
pub mod market_price;
pub mod order;
pub mod payment;
pub mod post;
pub mod product;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use billing::create_billing;
pub use crop_tracker::create_crop;
pub use forum_entry::create_forum_entry;
pub use land::create_land;
pub use market_price::create_market_price;
pub use order::create_order;
pub use payment::create_payment;
pub use post::{create_post, create_reply};
pub use product::create_product;
pub use user::{create_admin, create_user};
