pub mod price_lookup;

pub mod coingecko;

pub mod alert_monitor;
pub mod alerts_service;
