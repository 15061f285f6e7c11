use ai_journal::application::{
    ports::{security::TokenManager, time::Clock, util::IdGenerator, util::SlugGenerator},
    services::ApplicationServices,
};
use ai_journal::config::{AppConfig, StorageBackend};
use ai_journal::domain::article::ArticleRepository;
use ai_journal::infrastructure::{
    database,
    repositories::{JsonFileArticleRepository, PostgresArticleRepository},
    security::BiscuitTokenManager,
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidGenerator},
};
use ai_journal::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let article_repo = build_repository(config.storage()).await?;

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        token_manager,
        clock,
        slugger,
        ids,
        config.page_size(),
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn build_repository(storage: &StorageBackend) -> Result<Arc<dyn ArticleRepository>> {
    match storage {
        StorageBackend::Postgres { database_url } => {
            let pool = database::init_pool(database_url).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres article store");
            Ok(Arc::new(PostgresArticleRepository::new(pool)))
        }
        StorageBackend::JsonFiles { data_dir } => {
            tracing::info!(data_dir = %data_dir.display(), "using json file article store");
            Ok(Arc::new(JsonFileArticleRepository::new(data_dir.clone())))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
