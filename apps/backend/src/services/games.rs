//! Games domain service.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::auth::service::Clock;
use crate::errors::{GameError, ServiceError};
use crate::guard::WorkContext;
use crate::repos::games::{Game, GameChanges, GameStore, NewGame};

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePatch {
    pub game_names: Option<String>,
    pub game_icons: Option<String>,
}

#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
    clock: Clock,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            store,
            clock: OffsetDateTime::now_utc,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn create_game(&self, ctx: &WorkContext, game: NewGame) -> Result<i64, ServiceError> {
        validate_names(&game.game_names)?;
        validate_icons(&game.game_icons)?;

        ctx.checkpoint()?;
        let created = ctx.run(self.store.create(game, (self.clock)())).await??;
        Ok(created.id)
    }

    pub async fn list_games(&self, ctx: &WorkContext) -> Result<Vec<Game>, ServiceError> {
        Ok(ctx.run(self.store.list()).await??)
    }

    pub async fn get_game(&self, ctx: &WorkContext, id: i64) -> Result<Game, ServiceError> {
        ctx.run(self.store.find_by_id(id))
            .await??
            .ok_or_else(|| GameError::NotFound(id).into())
    }

    pub async fn update_game(
        &self,
        ctx: &WorkContext,
        id: i64,
        patch: GamePatch,
    ) -> Result<Game, ServiceError> {
        if let Some(names) = &patch.game_names {
            validate_names(names)?;
        }
        if let Some(icons) = &patch.game_icons {
            validate_icons(icons)?;
        }

        let current = self.get_game(ctx, id).await?;
        let changes = GameChanges {
            game_names: patch.game_names.unwrap_or(current.game_names),
            game_icons: patch.game_icons.unwrap_or(current.game_icons),
        };

        ctx.checkpoint()?;
        ctx.run(self.store.update(id, changes, (self.clock)()))
            .await??
            .ok_or_else(|| GameError::NotFound(id).into())
    }
}

fn validate_names(names: &str) -> Result<(), GameError> {
    if names.trim().is_empty() {
        return Err(GameError::InvalidNames);
    }
    Ok(())
}

fn validate_icons(icons: &str) -> Result<(), GameError> {
    if icons.trim().is_empty() {
        return Err(GameError::InvalidIcons);
    }
    Ok(())
}
