//! Library entrypoint for CryptoPulse.
//!
//! This file exists mainly to make controller and engine tests easy
//! (integration tests under `tests/` can import the app state, routers,
//! services, and store implementations).

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub mod services;

pub mod controllers;
pub mod routes;

pub mod events;

use std::sync::Arc;

use tokio::sync::{Mutex, Notify, broadcast};

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: Arc<dyn store::RuleStore>,
    pub prices: Arc<dyn services::price_lookup::PriceLookup>,
    pub events_tx: broadcast::Sender<String>,

    // serializes whole-list read-modify-write between UI mutations and the
    // evaluation cycle
    pub write_lock: Arc<Mutex<()>>,

    // wakes the monitor when the active rule set may have grown
    pub poll_kick: Arc<Notify>,
}
