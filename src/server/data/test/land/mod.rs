use crate::server::{
    data::land::LandRepository,
    error::AppError,
    model::land::{CreateLandParams, UpdateLandParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
