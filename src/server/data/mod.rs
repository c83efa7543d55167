//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row writes (orders with their lines, payments with their item snapshot, cascading
//! deletes) run inside a single transaction.

pub mod billing;
pub mod crop;
pub mod forum;
pub mod land;
pub mod market;
pub mod notification;
pub mod order;
pub mod payment;
pub mod post;
pub mod product;
pub mod user;
