use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod alerts_routes;
pub mod prices_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = prices_routes::add_routes(router);

    // dev-friendly; tighten in prod
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(home_controller::not_found)
        .layer(cors)
        .with_state(state)
}
