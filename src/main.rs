use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, EnvFilter};

use entitlement_service::adapters::auth::{Argon2Hasher, JwtSessions};
use entitlement_service::adapters::billing::{HostedCheckoutLinks, UpstreamVerifiedWebhooks};
use entitlement_service::adapters::http::{app_router, AppState, BillingFlags};
use entitlement_service::adapters::memory::InMemoryAccountStore;
use entitlement_service::adapters::postgres::PostgresAccountStore;
use entitlement_service::config::{
    AppConfig, DatabaseConfig, LogFormat, ServerConfig, ValidationError,
};
use entitlement_service::domain::billing::BillingEnvironment;
use entitlement_service::ports::AccountStore;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {}", e);
        std::process::exit(1);
    }

    init_tracing(&config.server);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format {
        LogFormat::Json => fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).pretty().init(),
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.billing.catalog()?;
    tracing::info!(
        environment = %config.billing.environment,
        sandbox_products = catalog.len(BillingEnvironment::Sandbox),
        live_products = catalog.len(BillingEnvironment::Live),
        "Product catalog loaded"
    );

    let store = account_store(&config.database).await?;

    let secret = config
        .auth
        .jwt_secret
        .as_ref()
        .ok_or(ValidationError::MissingRequired("AUTH__JWT_SECRET"))?;
    let sessions = Arc::new(JwtSessions::new(secret, config.auth.token_ttl())?);

    let webhooks = UpstreamVerifiedWebhooks::new();
    webhooks.announce(config.billing.has_webhook_secret());

    let checkout = HostedCheckoutLinks::new(
        config.billing.checkout_base_url.clone(),
        config.billing.access_token(),
        config.billing.success_url.clone(),
    );
    if !config.billing.has_access_token() {
        tracing::warn!("Billing access token not set; checkout and portal calls will fail");
    }

    let state = AppState {
        store,
        sessions: sessions.clone(),
        tokens: sessions,
        hasher: Arc::new(Argon2Hasher::new()),
        checkout: Arc::new(checkout),
        webhooks: Arc::new(webhooks),
        catalog: Arc::new(catalog),
        environment: config.billing.environment,
        billing: BillingFlags {
            access_token_configured: config.billing.has_access_token(),
            webhook_secret_configured: config.billing.has_webhook_secret(),
        },
    };

    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for incoming connections");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn account_store(
    database: &DatabaseConfig,
) -> Result<Arc<dyn AccountStore>, Box<dyn std::error::Error>> {
    let Some(url) = database.url() else {
        tracing::warn!("DATABASE__URL not set; using in-memory account store");
        return Ok(Arc::new(InMemoryAccountStore::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(url)
        .await?;

    let store = PostgresAccountStore::new(pool);
    if database.run_migrations {
        store.migrate().await?;
        tracing::info!("Database migrations applied");
    }
    Ok(Arc::new(store))
}
