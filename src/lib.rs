//! JSON CRUD service for user records backed by SQLite.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::time::Duration;

    use actix_web::{App, HttpServer, web};

    use crate::db::{ConnectionOptions, establish_connection_pool_with, run_migrations};
    use crate::pagination::DefaultLimit;
    use crate::repository::DieselRepository;

    let default_limit =
        DefaultLimit::new(server_config.default_page_limit).map_err(std::io::Error::other)?;

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool_with(
        &server_config.database_url,
        ConnectionOptions {
            log_queries: server_config.database_debug,
            ..ConnectionOptions::default()
        },
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    if server_config.database_migrate {
        let applied = run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
        log::info!("Database schema up to date ({applied} migrations applied)");
    }

    let repo = DieselRepository::new(pool);

    let timeout = Duration::from_secs(server_config.request_timeout_secs);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Listening on {}:{} (default page limit {})",
        server_config.address,
        server_config.port,
        default_limit.get()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::from_fn(middleware::access_control))
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(default_limit))
            .configure(routes::configure)
    })
    .client_request_timeout(timeout)
    .client_disconnect_timeout(timeout)
    .bind(bind_address)?
    .run()
    .await
}
