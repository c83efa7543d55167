use crate::server::{
    data::post::PostRepository,
    error::AppError,
    model::post::{CreatePostParams, UpdatePostParams},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_reply;
mod create;
mod get_all;
