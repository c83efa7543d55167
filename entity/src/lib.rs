//! SeaORM entity definitions for every AgroSphere table.

pub mod prelude;

pub mod billing;
pub mod crop_tracker;
pub mod forum_entry;
pub mod land;
pub mod market_price;
pub mod notification;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod payment_item;
pub mod post;
pub mod post_reply;
pub mod product;
pub mod user;
