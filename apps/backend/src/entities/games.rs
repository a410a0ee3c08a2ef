use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_names")]
    pub game_names: String,
    #[sea_orm(column_name = "game_icons")]
    pub game_icons: String,
    #[sea_orm(column_name = "create_time")]
    pub create_time: OffsetDateTime,
    #[sea_orm(column_name = "update_time")]
    pub update_time: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
