use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{method_not_allowed, parse_json, respond};
use crate::error::AppError;
use crate::errors::ServiceError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub principal_id: i64,
    pub email: String,
    pub token: String,
}

/// `POST /login`: exchange email and password for a signed token.
async fn login(body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let auth = state.auth.clone();

    let outcome = state
        .guard
        .run(move |ctx| async move {
            let req: LoginRequest = parse_json(&body)?;
            let (token, claims) = auth.login_basic(&ctx, &req.email, &req.password).await?;
            Ok::<_, ServiceError>(LoginResponse {
                principal_id: claims.principal_id,
                email: claims.email,
                token,
            })
        })
        .await;

    respond(&state, StatusCode::OK, outcome)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::post().to(login))
            .default_service(web::to(method_not_allowed)),
    );
}
