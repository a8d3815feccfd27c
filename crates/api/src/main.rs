//! API server entry point.

use api::config::{Config, LogFormat};
use api::error::ServerError;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Installs the global subscriber. A second call leaves the first one in place.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Installs tracing from freshly loaded configuration.
///
/// On a configuration error, tracing is installed with defaults so the
/// error is logged before the process exits.
fn init_from(loaded: Result<Config, ServerError>) -> Result<Config, ServerError> {
    match loaded {
        Ok(config) => {
            init_tracing(&config);
            Ok(config)
        }
        Err(err) => {
            init_tracing(&Config::default());
            tracing::error!(error = %err, "invalid configuration");
            Err(err)
        }
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    // 1. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 2. Create application state
    let state = api::create_default_state(&config);
    tracing::info!(
        service = state.health_service.name(),
        version = state.health_service.version(),
        instance_id = %state.health_service.instance_id(),
        "health service ready"
    );

    // 3. Build the application
    let app = api::create_app(state, metrics_handle, &config.base_path);

    // 4. Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(
        %addr,
        route = %format!("{}{}", config.base_path, api::HEALTH_CHECK_PATH),
        "starting API server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    let config = init_from(Config::from_env())?;

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "server failed");
        return Err(err);
    }
    Ok(())
}
