/*
 * Responsibility
 * - v1 URL structure
 * - Which routes sit behind the bearer gate (route_layer via middleware::auth::protect)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware::auth;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected: Router<AppState> = auth::protect(
        Router::new().route("/me", get(me)),
        state.validator.clone(),
    );

    public.merge(protected)
}
