use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::{Mutex, Notify, broadcast};
use tokio::sync::broadcast::error::RecvError;

use cryptopulse::services::alert_monitor::spawn_price_alert_monitor;
use cryptopulse::services::coingecko::CoinGeckoClient;
use cryptopulse::store::{JsonFileStore, RuleStore};
use cryptopulse::{AppState, config, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let store: Arc<dyn RuleStore> = Arc::new(JsonFileStore::new(&settings.store_path));
    let prices = Arc::new(CoinGeckoClient::new(settings.coingecko_base_url.clone()));
    let (events_tx, _) = broadcast::channel::<String>(16);

    let state = AppState {
        settings: settings.clone(),
        store,
        prices,
        events_tx,
        write_lock: Arc::new(Mutex::new(())),
        poll_kick: Arc::new(Notify::new()),
    };

    // Every store write, whichever writer, surfaces to SSE clients as one
    // alertsUpdated event.
    {
        let mut changes = state.store.subscribe();
        let events_tx = state.events_tx.clone();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(()) | Err(RecvError::Lagged(_)) => {
                        let _ = events_tx.send("alertsUpdated".to_string());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    let monitor = spawn_price_alert_monitor(state.clone());

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    monitor.dispose();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
