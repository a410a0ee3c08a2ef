use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{method_not_allowed, parse_json, respond};
use crate::error::AppError;
use crate::errors::{GameError, ServiceError};
use crate::extractors::BearerToken;
use crate::repos::games::{Game, NewGame};
use crate::services::games::GamePatch;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub game_names: String,
    pub game_icons: String,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            game_names: game.game_names,
            game_icons: game.game_icons,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedGame {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub game_names: String,
    #[serde(default)]
    pub game_icons: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGameRequest {
    pub game_names: Option<String>,
    pub game_icons: Option<String>,
}

fn parse_game_id(raw: &str) -> Result<i64, ServiceError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| GameError::InvalidId(raw.to_string()).into())
}

async fn list_games(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = state.games.clone();

    let outcome = state
        .guard
        .run(move |ctx| async move {
            let rows = games.list_games(&ctx).await?;
            Ok::<_, ServiceError>(rows.into_iter().map(GameResponse::from).collect::<Vec<_>>())
        })
        .await;

    respond(&state, StatusCode::OK, outcome)
}

async fn get_game(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = state.games.clone();
    let raw_id = path.into_inner();

    let outcome = state
        .guard
        .run(move |ctx| async move {
            let id = parse_game_id(&raw_id)?;
            Ok::<_, ServiceError>(GameResponse::from(games.get_game(&ctx, id).await?))
        })
        .await;

    respond(&state, StatusCode::OK, outcome)
}

async fn create_game(
    token: BearerToken,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth = state.auth.clone();
    let games = state.games.clone();

    let outcome = state
        .guard
        .run(move |ctx| async move {
            auth.validate_token(token.as_str())?;
            let req: CreateGameRequest = parse_json(&body)?;
            let new_game = NewGame {
                game_names: req.game_names,
                game_icons: req.game_icons,
            };
            let id = games.create_game(&ctx, new_game).await?;
            Ok::<_, ServiceError>(CreatedGame { id })
        })
        .await;

    respond(&state, StatusCode::CREATED, outcome)
}

async fn update_game(
    token: BearerToken,
    path: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth = state.auth.clone();
    let games = state.games.clone();
    let raw_id = path.into_inner();

    let outcome = state
        .guard
        .run(move |ctx| async move {
            auth.validate_token(token.as_str())?;
            let id = parse_game_id(&raw_id)?;
            let req: UpdateGameRequest = parse_json(&body)?;
            let patch = GamePatch {
                game_names: req.game_names,
                game_icons: req.game_icons,
            };
            Ok::<_, ServiceError>(GameResponse::from(games.update_game(&ctx, id, patch).await?))
        })
        .await;

    respond(&state, StatusCode::OK, outcome)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/games/{id}")
            .route(web::get().to(get_game))
            .route(web::patch().to(update_game))
            .default_service(web::to(method_not_allowed)),
    );
}
