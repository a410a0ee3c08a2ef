//! SeaORM adapter for the admins table.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::admins;

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<admins::Model>, sea_orm::DbErr> {
    admins::Entity::find()
        .filter(admins::Column::Email.eq(email))
        .one(conn)
        .await
}
