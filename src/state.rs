/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to Clone (Arc inside); holds no per-request data
 */
use std::sync::Arc;

use crate::services::token::TokenValidator;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<dyn TokenValidator>,
}

impl AppState {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("validator", &self.validator.backend_name())
            .finish()
    }
}
