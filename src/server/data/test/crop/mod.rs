use crate::server::{
    data::crop::CropRepository,
    error::AppError,
    model::crop::{CreateCropParams, UpdateCropParams},
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create;
