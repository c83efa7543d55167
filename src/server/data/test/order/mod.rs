use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{NewOrder, OrderItem, OrderStatus},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod mark_paid;
