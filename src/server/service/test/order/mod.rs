use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        order::{CreateOrderParams, OrderLineParams, OrderStatus},
        user::User,
    },
    service::order::OrderService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn lines(lines: &[(i32, i32)]) -> CreateOrderParams {
    CreateOrderParams {
        lines: lines
            .iter()
            .map(|&(product_id, quantity)| OrderLineParams {
                product_id,
                quantity,
            })
            .collect(),
    }
}
