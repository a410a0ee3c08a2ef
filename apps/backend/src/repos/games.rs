//! Game persistence: domain model, store trait and its implementations.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::{DatabaseConnection, DbErr};
use time::OffsetDateTime;

use crate::adapters::games_sea::{self, GameCreate, GameUpdate};
use crate::entities::games;
use crate::errors::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub game_names: String,
    pub game_icons: String,
    pub create_time: OffsetDateTime,
    pub update_time: Option<OffsetDateTime>,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            game_names: model.game_names,
            game_icons: model.game_icons,
            create_time: model.create_time,
            update_time: model.update_time,
        }
    }
}

/// Validated input for a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub game_names: String,
    pub game_icons: String,
}

/// Complete replacement values for an existing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameChanges {
    pub game_names: String,
    pub game_icons: String,
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create(&self, game: NewGame, now: OffsetDateTime) -> Result<Game, StoreError>;
    async fn list(&self) -> Result<Vec<Game>, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, StoreError>;
    /// `Ok(None)` when no game has this id.
    async fn update(
        &self,
        id: i64,
        changes: GameChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Game>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmGameStore {
    conn: DatabaseConnection,
}

impl SeaOrmGameStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl GameStore for SeaOrmGameStore {
    async fn create(&self, game: NewGame, now: OffsetDateTime) -> Result<Game, StoreError> {
        let dto = GameCreate {
            game_names: game.game_names,
            game_icons: game.game_icons,
        };
        let model = games_sea::create_game(&self.conn, dto, now).await?;
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Game>, StoreError> {
        let models = games_sea::find_all(&self.conn).await?;
        Ok(models.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, StoreError> {
        let model = games_sea::find_by_id(&self.conn, id).await?;
        Ok(model.map(Game::from))
    }

    async fn update(
        &self,
        id: i64,
        changes: GameChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Game>, StoreError> {
        let dto = GameUpdate {
            id,
            game_names: changes.game_names,
            game_icons: changes.game_icons,
        };
        match games_sea::update_game(&self.conn, dto, now).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local store; ids are assigned from 1 upward.
#[derive(Debug)]
pub struct InMemoryGameStore {
    next_id: AtomicI64,
    rows: RwLock<BTreeMap<i64, Game>>,
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create(&self, game: NewGame, now: OffsetDateTime) -> Result<Game, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = Game {
            id,
            game_names: game.game_names,
            game_icons: game.game_icons,
            create_time: now,
            update_time: None,
        };
        self.rows.write().insert(id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.rows.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, StoreError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        changes: GameChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Game>, StoreError> {
        let mut rows = self.rows.write();
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        row.game_names = changes.game_names;
        row.game_icons = changes.game_icons;
        row.update_time = Some(now);
        Ok(Some(row.clone()))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use time::macros::datetime;

    use super::*;

    const T0: OffsetDateTime = datetime!(2024-03-01 12:00 UTC);
    const T1: OffsetDateTime = datetime!(2024-03-02 08:30 UTC);

    fn model(id: i64, names: &str) -> games::Model {
        games::Model {
            id,
            game_names: names.to_string(),
            game_icons: format!("https://cdn.example/{id}.png"),
            create_time: T0,
            update_time: None,
        }
    }

    #[tokio::test]
    async fn sea_orm_list_preserves_row_order() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Dota 2"), model(2, "Valorant")]])
            .into_connection();
        let store = SeaOrmGameStore::new(conn);

        let games = store.list().await.unwrap();
        let names: Vec<_> = games.iter().map(|g| g.game_names.as_str()).collect();
        assert_eq!(names, ["Dota 2", "Valorant"]);
    }

    #[tokio::test]
    async fn sea_orm_create_returns_inserted_row() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(9, "Dota 2")]])
            .into_connection();
        let store = SeaOrmGameStore::new(conn);

        let game = store
            .create(
                NewGame {
                    game_names: "Dota 2".into(),
                    game_icons: "https://cdn.example/9.png".into(),
                },
                T0,
            )
            .await
            .unwrap();
        assert_eq!(game.id, 9);
        assert_eq!(game.create_time, T0);
    }

    #[tokio::test]
    async fn sea_orm_find_by_id_miss_is_none() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<games::Model>::new()])
            .into_connection();
        let store = SeaOrmGameStore::new(conn);

        assert_eq!(store.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn in_memory_assigns_sequential_ids() {
        let store = InMemoryGameStore::new();
        for name in ["a", "b", "c"] {
            store
                .create(
                    NewGame {
                        game_names: name.into(),
                        game_icons: "i".into(),
                    },
                    T0,
                )
                .await
                .unwrap();
        }

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|g| g.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn in_memory_update_keeps_create_time() {
        let store = InMemoryGameStore::new();
        let created = store
            .create(
                NewGame {
                    game_names: "old".into(),
                    game_icons: "i".into(),
                },
                T0,
            )
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                GameChanges {
                    game_names: "new".into(),
                    game_icons: "i".into(),
                },
                T1,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.game_names, "new");
        assert_eq!(updated.create_time, T0);
        assert_eq!(updated.update_time, Some(T1));
    }

    #[tokio::test]
    async fn in_memory_update_of_missing_row_is_none() {
        let store = InMemoryGameStore::new();
        let changes = GameChanges {
            game_names: "x".into(),
            game_icons: "y".into(),
        };
        assert_eq!(store.update(5, changes, T1).await.unwrap(), None);
    }
}
