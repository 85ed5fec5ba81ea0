/*
 * Responsibility
 * - GET /me: echo the identity the auth gate attached to this request
 */
use axum::Json;

use crate::api::v1::extractors::{CurrentIdentity, Identity};

pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<Identity> {
    Json(identity)
}
