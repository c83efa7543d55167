//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership and lifecycle rules
//! - **Orchestration**: Coordinating repositories with storage, mail and PDF rendering
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Supporting services (`token`, `mail`, `storage`, `document`, `password_reset`) are
//! held in the application state and handed to the resource services as needed.

pub mod billing;
pub mod crop;
pub mod document;
pub mod forum;
pub mod land;
pub mod mail;
pub mod market;
pub mod notification;
pub mod order;
pub mod password_reset;
pub mod payment;
pub mod post;
pub mod product;
pub mod storage;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
