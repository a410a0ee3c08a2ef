//! SeaORM adapter for the games table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::games;

pub struct GameCreate {
    pub game_names: String,
    pub game_icons: String,
}

pub struct GameUpdate {
    pub id: i64,
    pub game_names: String,
    pub game_icons: String,
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
    now: OffsetDateTime,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: NotSet,
        game_names: Set(dto.game_names),
        game_icons: Set(dto.game_icons),
        create_time: Set(now),
        update_time: Set(None),
    };

    game.insert(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(id).one(conn).await
}

/// Overwrites names and icons; `create_time` is never touched.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
    now: OffsetDateTime,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: Set(dto.id),
        game_names: Set(dto.game_names),
        game_icons: Set(dto.game_icons),
        create_time: NotSet,
        update_time: Set(Some(now)),
    };

    game.update(conn).await
}
