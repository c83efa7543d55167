use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::payment::{CreatePaymentParams, PaymentItem, PaymentMethod, PaymentStatus},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
