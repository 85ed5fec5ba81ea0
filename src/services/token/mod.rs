pub mod client;
pub mod factory;
pub mod remote;
pub mod role;

pub use client::{RejectReason, TokenValidator, ValidateError, ValidatedToken};
pub use factory::build_token_validator;
pub use remote::RemoteTokenValidator;
pub use role::Role;
