use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures_util::future::join_all;
use tokio::task::JoinHandle;
use tokio::time;

use crate::{AppState, services::alerts_service};

pub struct AlertMonitor {
    live: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl AlertMonitor {
    /// Tears the monitor down: no further cycle fires and an in-flight
    /// cycle performs no more store writes.
    pub fn dispose(&self) {
        self.live.store(false, Ordering::SeqCst);
        self.task.abort();
    }
}

/// Starts the single recurring evaluation task. The first cycle runs
/// immediately; each following cycle starts one poll interval after the
/// previous one *completed*, or earlier when a rule is created or
/// re-activated (`AppState::poll_kick`).
pub fn spawn_price_alert_monitor(state: AppState) -> AlertMonitor {
    let live = Arc::new(AtomicBool::new(true));
    let flag = live.clone();

    let task = tokio::spawn(async move {
        let interval = Duration::from_secs(state.settings.poll_interval_secs);

        loop {
            if !flag.load(Ordering::SeqCst) {
                break;
            }

            run_tick(&state, &flag).await;

            tokio::select! {
                _ = time::sleep(interval) => {}
                _ = state.poll_kick.notified() => {}
            }
        }
    });

    AlertMonitor { live, task }
}

/// One evaluation cycle. Never fatal: a failed lookup only skips the rules
/// watching that asset for this cycle, and the next cycle is the retry.
pub async fn run_tick(state: &AppState, live: &AtomicBool) {
    let rules = state.store.load().await;
    let active: Vec<_> = rules.into_iter().filter(|r| r.active).collect();

    if active.is_empty() {
        return;
    }

    // one lookup per distinct (asset, currency) pair, however many rules
    // share it
    let watched: HashSet<(String, String)> = active
        .iter()
        .map(|r| (r.asset_id.clone(), r.currency.clone()))
        .collect();

    let lookups: Vec<_> = watched
        .into_iter()
        .map(|(asset_id, currency)| {
            let prices = &state.prices;
            async move {
                let spot = match prices.spot(&asset_id, &currency).await {
                    Ok(p) if p.is_finite() && p > 0.0 => Some(p),
                    Ok(p) => {
                        tracing::debug!("unusable spot {p} for {asset_id}/{currency}");
                        None
                    }
                    Err(e) => {
                        tracing::debug!("spot lookup failed for {asset_id}/{currency}: {e}");
                        None
                    }
                };
                ((asset_id, currency), spot)
            }
        })
        .collect();

    // every lookup joins before any comparison: one price snapshot per
    // asset for the whole cycle
    let snapshot: HashMap<(String, String), Option<f64>> =
        join_all(lookups).await.into_iter().collect();

    for rule in &active {
        let key = (rule.asset_id.clone(), rule.currency.clone());
        let Some(Some(spot)) = snapshot.get(&key).copied() else {
            continue;
        };

        if !rule.is_hit(spot) {
            continue;
        }

        // the monitor may have been disposed while lookups were in flight
        if !live.load(Ordering::SeqCst) {
            return;
        }

        if alerts_service::mark_triggered(state, &rule.id).await {
            tracing::info!(
                rule = %rule.id,
                asset = %rule.asset_id,
                spot,
                target = rule.target_price,
                "alert triggered"
            );
        }
    }
}
