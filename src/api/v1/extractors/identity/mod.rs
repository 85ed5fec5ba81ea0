/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - Provide the gate's Identity to handlers as a typed value
 * - Keep axum details in core, the type contract in types
 *
 * Public API:
 * - Identity
 * - CurrentIdentity
 */

mod core;
mod types;

pub use self::core::CurrentIdentity;
pub use self::types::Identity;
