use std::sync::Arc;

use auth::Authenticator;
use employee_service::config::Config;
use employee_service::config::LoggingConfig;
use employee_service::domain::admin::ports::AdminRepository;
use employee_service::domain::admin::service::AdminService;
use employee_service::domain::employee::ports::EmployeeRepository;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::repositories::InMemoryStore;
use employee_service::outbound::repositories::PostgresStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "employee_service=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;
    init_tracing(&config.logging);

    tracing::info!(
        service = "employee-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        http_port = config.server.http_port,
        in_memory = config.database.is_in_memory(),
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    if config.database.is_in_memory() {
        tracing::warn!(database = "memory", "Using in-memory store, data is not persisted");
        serve(config, Arc::new(InMemoryStore::new())).await
    } else {
        let pg_pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        tracing::info!(
            max_connections = config.database.max_connections,
            database = "postgresql",
            "Database connection pool created"
        );

        sqlx::migrate!("./migrations").run(&pg_pool).await?;
        tracing::info!(database = "postgresql", "Database migrations completed");

        serve(config, Arc::new(PostgresStore::new(pg_pool))).await
    }
}

async fn serve<S>(config: Config, store: Arc<S>) -> Result<(), anyhow::Error>
where
    S: EmployeeRepository + AdminRepository,
{
    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.token_validity()?,
    ));
    let employee_service = Arc::new(EmployeeService::new(Arc::clone(&store)));
    let admin_service = Arc::new(AdminService::new(Arc::clone(&store)));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(employee_service, admin_service, authenticator);
    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    EmployeeRepository::close(store.as_ref()).await;
    AdminRepository::close(store.as_ref()).await;
    tracing::info!("Server exited successfully");

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
