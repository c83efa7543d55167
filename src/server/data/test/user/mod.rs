use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateUserParams},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_with_lands;
mod find_by_identifier;
mod get_all_paginated;
mod taken;
