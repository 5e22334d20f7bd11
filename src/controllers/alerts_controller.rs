use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState,
    error::AlertError,
    models::Direction,
    services::alerts_service::{self, NewRule},
};

// GET /api/alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    let rules = alerts_service::list_rules(&state).await;
    let active_count = rules.iter().filter(|r| r.active).count();

    Json(json!({ "rules": rules, "activeCount": active_count })).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertBody {
    pub asset_id: String,
    pub direction: Direction,
    pub target_price: f64,
    pub currency: String,
}

// POST /api/alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Json(body): Json<CreateAlertBody>,
) -> Response {
    let new = NewRule {
        asset_id: body.asset_id,
        direction: body.direction,
        target_price: body.target_price,
        currency: body.currency,
    };

    match alerts_service::create_rule(&state, new).await {
        Ok(rule) => (StatusCode::CREATED, Json(rule)).into_response(),
        Err(e @ AlertError::InvalidInput(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

// POST /api/alerts/:id/toggle
pub async fn post_toggle_alert(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    alerts_service::toggle_rule(&state, &id).await;
    StatusCode::NO_CONTENT
}

// DELETE /api/alerts/:id
pub async fn delete_alert(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    alerts_service::delete_rule(&state, &id).await;
    StatusCode::NO_CONTENT
}
