use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ServiceError;
use crate::guard::Outcome;
use crate::state::app_state::AppState;

pub mod auth;
pub mod games;
pub mod health;

/// Register every route. The binary and the test app share this.
///
/// Unmatched paths answer with a `NOT_FOUND` problem body instead of
/// actix's empty 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(games::configure_routes)
        .default_service(web::to(not_found));
}

/// Fallback for paths no resource claims.
pub(crate) async fn not_found(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Err(state.classifier.classify(&ServiceError::RouteNotFound))
}

/// Fallback for a known resource hit with a method it does not serve.
pub(crate) async fn method_not_allowed(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    Err(state.classifier.classify(&ServiceError::MethodNotAllowed))
}

/// Success body shared by every resource endpoint.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Turn a guard outcome into a response, classifying any error.
pub(crate) fn respond<T: Serialize>(
    state: &AppState,
    status: StatusCode,
    outcome: Outcome<T, ServiceError>,
) -> Result<HttpResponse, AppError> {
    match outcome.into_result() {
        Ok(data) => Ok(HttpResponse::build(status).json(DataEnvelope { data })),
        Err(err) => Err(state.classifier.classify(&err)),
    }
}

/// Decode a JSON request body inside the worker.
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(body).map_err(|e| ServiceError::bad_request(e.to_string()))
}
