use actix_web::{web, App, HttpServer};
use backend::config::db::db_url;
use backend::config::security::SecurityConfig;
use backend::config::server::ServerConfig;
use backend::infra::db::connect_db;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::{routes, telemetry, AppError, AppState};
use tracing::{error, info};

async fn bootstrap() -> Result<(ServerConfig, AppState), AppError> {
    let server = ServerConfig::from_env()?;
    let security = SecurityConfig::from_env()?;
    let conn = connect_db(&db_url()?).await?;

    let state = build_state()
        .with_security(security)
        .with_db(conn)
        .with_request_budget(server.request_budget)
        .build()?;

    Ok((server, state))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let (server, state) = match bootstrap().await {
        Ok(ready) => ready,
        Err(e) => {
            error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        request_budget_ms = server.request_budget.as_millis() as u64,
        "starting xsports backend"
    );

    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
