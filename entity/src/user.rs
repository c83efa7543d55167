use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::land::Entity")]
    Land,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::crop_tracker::Entity")]
    CropTracker,
    #[sea_orm(has_many = "super::forum_entry::Entity")]
    ForumEntry,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::post_reply::Entity")]
    PostReply,
}

impl Related<super::land::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Land.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::crop_tracker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CropTracker.def()
    }
}

impl Related<super::forum_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumEntry.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::post_reply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostReply.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
