use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub errors: Vec<String>,
    pub trace_id: String,
}

/// Error as seen by an HTTP client.
///
/// Built by [`crate::errors::ErrorClassifier`] from a domain error, or directly
/// by startup code for configuration failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{code}: {detail}")]
    Client {
        code: ErrorCode,
        status: StatusCode,
        detail: String,
    },
    #[error("Internal server error")]
    Internal,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn client(code: ErrorCode, status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Client {
            code,
            status,
            detail: detail.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Client { code, .. } => *code,
            AppError::Internal | AppError::Config { .. } => ErrorCode::InternalServerError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Client { detail, .. } => detail.clone(),
            AppError::Internal | AppError::Config { .. } => "Internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Client { status, .. } => *status,
            AppError::Internal | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str().to_string();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://xsports.app/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.detail(),
            errors: vec![code.clone()],
            code,
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(problem_details)
    }
}
