//! Service layer for the scholarship backend.
//! - `storage` owns the JSON-file persistence and its locking.
//! - `entity_store` wires the six collections together at startup.
//! - `services` holds the business operations handlers call.

pub mod errors;
pub mod storage;
pub mod seed;
pub mod entity_store;
pub mod services;
pub mod advice;
pub mod runtime;

pub use entity_store::{EntityStore, Seeds};
pub use errors::ServiceError;
