//! `SeaORM` entity for the `user_records` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_records")]
/// Local mirror row of one Cloudflare DNS record, keyed per user.
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub record_id: String,
    pub zone_id: String,
    pub zone_name: String,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub record_type: String,
    pub content: String,
    pub proxied: i32,
    pub proxiable: i32,
    pub ttl: i64,
    pub comment: String,
    pub tags: String,
    pub active: i32,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
