use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub billing_id: i32,
    pub order_ref: String,
    pub method: String,
    pub status: String,
    pub amount: f64,
    pub card_holder: Option<String>,
    pub card_last4: Option<String>,
    pub card_expiry: Option<String>,
    pub slip_image: Option<String>,
    pub invoice_path: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing::Entity",
        from = "Column::BillingId",
        to = "super::billing::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Billing,
    #[sea_orm(has_many = "super::payment_item::Entity")]
    PaymentItem,
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl Related<super::payment_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
