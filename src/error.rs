use thiserror::Error;

/// Errors surfaced to callers of the rule CRUD surface.
///
/// Everything else the engine encounters (lookup failures, store I/O) is
/// absorbed and logged; `InvalidInput` is the only variant a caller ever
/// sees, rejected before anything is persisted.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// A spot-price lookup failed for one asset in one cycle.
///
/// Transient by contract: the evaluation cycle logs it and retries on the
/// next scheduled cycle.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("spot request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("no price for {asset_id} in {currency}")]
    MissingPrice { asset_id: String, currency: String },
}
