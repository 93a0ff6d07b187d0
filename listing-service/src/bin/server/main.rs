use std::sync::Arc;

use auth::Authenticator;
use jsonwebtoken::Algorithm;
use listing_service::config::Config;
use listing_service::domain::agent::service::AgentService;
use listing_service::domain::property::service::PropertyService;
use listing_service::domain::refdata::service::ReferenceDataService;
use listing_service::inbound::http::router::create_router;
use listing_service::inbound::http::router::AppState;
use listing_service::outbound::repositories::PostgresAddressRepository;
use listing_service::outbound::repositories::PostgresAgentRepository;
use listing_service::outbound::repositories::PostgresCityRepository;
use listing_service::outbound::repositories::PostgresPropertyRepository;
use listing_service::outbound::repositories::PostgresStateRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "listing-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        signing_algorithm = %config.jwt.algorithm,
        token_ttl_minutes = config.jwt.ttl_minutes,
        "Configuration loaded"
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

    // Signing material is read exactly once here and injected; nothing else
    // touches the environment or configuration at request time.
    let algorithm = match config.jwt.algorithm.as_str() {
        "HS256" => Algorithm::HS256,
        "HS384" => Algorithm::HS384,
        "HS512" => Algorithm::HS512,
        other => anyhow::bail!("Unsupported signing algorithm: {}", other),
    };
    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes(), algorithm)?);

    let agent_repository = Arc::new(PostgresAgentRepository::new(pg_pool.clone()));
    let property_repository = Arc::new(PostgresPropertyRepository::new(pg_pool.clone()));
    let state_repository = Arc::new(PostgresStateRepository::new(pg_pool.clone()));
    let city_repository = Arc::new(PostgresCityRepository::new(pg_pool.clone()));
    let address_repository = Arc::new(PostgresAddressRepository::new(pg_pool));

    let state = AppState {
        agent_service: Arc::new(AgentService::new(agent_repository)),
        property_service: Arc::new(PropertyService::new(property_repository)),
        refdata_service: Arc::new(ReferenceDataService::new(
            state_repository,
            city_repository,
            address_repository,
        )),
        authenticator,
        token_ttl_minutes: config.jwt.ttl_minutes,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
