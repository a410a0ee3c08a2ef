use super::{env_lookup, must_var, Lookup};
use crate::error::AppError;

/// Builds the Postgres URL.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from
/// `POSTGRES_HOST` (default `localhost`), `POSTGRES_PORT` (default `5432`),
/// `POSTGRES_DB`, `POSTGRES_USER` and `POSTGRES_PASSWORD`.
pub fn db_url() -> Result<String, AppError> {
    db_url_from(env_lookup)
}

pub fn db_url_from(lookup: impl Lookup) -> Result<String, AppError> {
    if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
        return Ok(url);
    }

    let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db_name = must_var(&lookup, "POSTGRES_DB")?;
    let username = must_var(&lookup, "POSTGRES_USER")?;
    let password = must_var(&lookup, "POSTGRES_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}
