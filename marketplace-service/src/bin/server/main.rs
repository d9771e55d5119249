use std::sync::Arc;

use auth::Authenticator;
use auth::SigningKey;
use marketplace_service::config::Config;
use marketplace_service::domain::user::service::UserService;
use marketplace_service::domain::vendor::service::VendorService;
use marketplace_service::inbound::http::router::create_router;
use marketplace_service::inbound::http::router::AppState;
use marketplace_service::outbound::repositories::PostgresUserRepository;
use marketplace_service::outbound::repositories::PostgresVendorRepository;
use marketplace_service::outbound::storage::LocalFileStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketplace_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "marketplace-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        public_url = %config.server.public_url,
        uploads_dir = %config.uploads.dir.display(),
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    // Refuses to start without a signing secret.
    let signing_key = SigningKey::new(config.jwt.secret.as_str())?;
    let authenticator = Arc::new(
        Authenticator::new(&signing_key)
            .with_token_ttl(chrono::Duration::hours(config.jwt.expiration_hours)),
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    tokio::fs::create_dir_all(&config.uploads.dir).await?;
    let file_store = Arc::new(LocalFileStore::new(&config.uploads.dir));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let vendor_repository = Arc::new(PostgresVendorRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(
            user_repository,
            Arc::clone(&file_store),
            Arc::clone(&authenticator),
        )),
        vendor_service: Arc::new(VendorService::new(vendor_repository, file_store)),
        public_url: config.server.public_url.clone(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, authenticator, &config.uploads.dir);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
