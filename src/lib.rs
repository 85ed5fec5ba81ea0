//! Bearer-token gate for axum services.
//!
//! Incoming requests must carry `Authorization: Bearer <token>`. The token is
//! checked against a remote token authority (one call, no retry) and the
//! decoded [`Identity`](api::v1::extractors::Identity) is handed to the
//! wrapped handlers. Every failure is answered with a [`RestError`](error::RestError).

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
