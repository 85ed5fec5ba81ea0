/*
 * Responsibility
 * - The authenticated principal as handlers see it
 * - The auth gate builds it from a validated token and puts it in request extensions;
 *   handlers receive it through `CurrentIdentity`
 */
use serde::Serialize;

use crate::services::token::Role;

/// Identity attached to a request that passed the auth gate.
///
/// - `id` is the authority's user id (never negative)
/// - `role` is the lower-cased canonical role name (`user`, `admin`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(rename = "user_id")]
    pub id: i64,
    #[serde(rename = "user_role")]
    pub role: String,
}

impl Identity {
    pub fn new(id: i64, role: Role) -> Self {
        Self {
            id,
            role: role.canonical_name(),
        }
    }
}
