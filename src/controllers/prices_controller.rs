use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Deserialize)]
pub struct SpotQuery {
    #[serde(default = "default_vs")]
    pub vs: String,
}

fn default_vs() -> String {
    "usd".to_string()
}

// GET /api/spot/:asset
//
// Passthrough for the UI's live price preview; not on the alert evaluation
// path.
pub async fn get_spot(
    State(state): State<AppState>,
    Path(asset): Path<String>,
    Query(q): Query<SpotQuery>,
) -> Response {
    match state.prices.spot(&asset, &q.vs).await {
        Ok(price) => Json(json!({ "id": asset, "vs": q.vs, "price": price })).into_response(),
        Err(e) => {
            tracing::warn!("spot passthrough failed for {}/{}: {}", asset, q.vs, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "spot_failed" })),
            )
                .into_response()
        }
    }
}
