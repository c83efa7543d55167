use crate::server::{
    data::notification::NotificationRepository, error::AppError, service::forum::ForumService,
};
use test_utils::{builder::TestBuilder, factory};
