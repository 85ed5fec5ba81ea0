/*
 * Responsibility
 * - Public interface of the middleware layer (re-export)
 * - auth: bearer gate, http: cross-cutting transport layers
 */
pub mod auth;
pub mod http;
