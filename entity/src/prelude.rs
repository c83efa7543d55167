pub use super::billing::Entity as Billing;
pub use super::crop_tracker::Entity as CropTracker;
pub use super::forum_entry::Entity as ForumEntry;
pub use super::land::Entity as Land;
pub use super::market_price::Entity as MarketPrice;
pub use super::notification::Entity as Notification;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::payment::Entity as Payment;
pub use super::payment_item::Entity as PaymentItem;
pub use super::post::Entity as Post;
pub use super::post_reply::Entity as PostReply;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
