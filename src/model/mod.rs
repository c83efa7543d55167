//! Request and response DTOs shared by the HTTP API.
//!
//! Every DTO serializes with camelCase field names, which is the wire format the
//! AgroSphere web client expects.

pub mod api;
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
