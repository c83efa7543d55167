use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, ProductCategory, UpdateProductParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
