//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// usernames, emails and external identifiers.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending order with one line along with its user and product.
///
/// The product defaults to a price of 250.0 with 100 units of stock; the order
/// holds 2 units, for a total of 500.0.
///
/// # Returns
/// - `Ok((user, product, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::OrderFactory::new(db, user.id)
        .line(&product, 2)
        .build()
        .await?;

    Ok((user, product, order))
}

/// Creates a payment for a freshly created order and billing record.
///
/// # Arguments
/// - `method` - `"card"` or `"slip"`
/// - `status` - Initial payment status
///
/// # Returns
/// - `Ok((order, billing, payment))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_payment_with_dependencies(
    db: &DatabaseConnection,
    method: &str,
    status: &str,
) -> Result<
    (
        entity::order::Model,
        entity::billing::Model,
        entity::payment::Model,
    ),
    DbErr,
> {
    let (user, _product, order) = create_order_with_dependencies(db).await?;
    let billing = crate::factory::billing::BillingFactory::new(db)
        .user_ref(user.id.to_string())
        .build()
        .await?;
    let payment = crate::factory::payment::PaymentFactory::new(db, billing.id)
        .order_ref(order.id.to_string())
        .method(method)
        .status(status)
        .amount(order.total)
        .build()
        .await?;

    Ok((order, billing, payment))
}
