// src/main.rs
use std::sync::Arc;

use tokio::signal::ctrl_c;
use tokio::sync::Mutex;

use ledger_proxy::application::identity::{FakerIdentity, IdentityGenerator};
use ledger_proxy::application::usecase::{FakeUserOrchestrator, PurchaseReporter};
use ledger_proxy::config::Config;
use ledger_proxy::domain::errors::AppResult;
use ledger_proxy::domain::repository::LedgerApi;
use ledger_proxy::infrastructure::http::{router, AppState};
use ledger_proxy::infrastructure::ledger::HttpLedgerClient;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting ledger-proxy v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Upstream ledger API: {}", config.ledger.base_url);

    // Upstream client and use cases
    let ledger: Arc<dyn LedgerApi> = Arc::new(HttpLedgerClient::new(
        &config.ledger.base_url,
        &config.ledger.api_key,
    ));
    let identity: Arc<Mutex<dyn IdentityGenerator>> = Arc::new(Mutex::new(FakerIdentity::new()));

    let state = AppState {
        orchestrator: Arc::new(FakeUserOrchestrator::new(ledger.clone(), identity)),
        reporter: Arc::new(PurchaseReporter::new(ledger.clone())),
        ledger,
    };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    log::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            ctrl_c().await.expect("Failed to listen for control-c event");
            log::info!("Shutting down...");
        })
        .await?;

    log::info!("Shutdown complete. Goodbye!");
    Ok(())
}
