//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business rules (roles, product categories,
//! the payment lifecycle) separated from database and API concerns.

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
