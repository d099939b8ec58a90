use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid, // FK -> user.id, fixed at creation
    pub title: String,
    pub description: String,
    pub team_size: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::post_member::Entity")]
    Member,
    #[sea_orm(has_many = "super::post_image::Entity")]
    Image,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Author.def() }
}

impl Related<super::post_member::Entity> for Entity {
    fn to() -> RelationDef { Relation::Member.def() }
}

impl Related<super::post_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

impl ActiveModelBehavior for ActiveModel {}
