use crate::server::{
    error::AppError,
    model::user::User,
    service::{mail::RecordingMailer, post::PostService},
};
use test_utils::{builder::TestBuilder, factory};

mod reply;
