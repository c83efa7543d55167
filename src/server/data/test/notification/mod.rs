use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::CreateNotificationParams,
};
use test_utils::builder::TestBuilder;

mod get_by_recipient;
