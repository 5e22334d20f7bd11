use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{AppState, controllers::alerts_controller, events};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/alerts", get(alerts_controller::get_alerts))
        .route("/api/alerts", post(alerts_controller::post_create_alert))
        .route("/api/alerts/:id", delete(alerts_controller::delete_alert))
        .route("/api/alerts/:id/toggle", post(alerts_controller::post_toggle_alert))
        .route("/api/events", get(events::sse_events))
}
