//! Typed record schemas for the scholarship backend collections.
//!
//! Every record keeps an `extra` map flattened into its JSON object so that
//! fields this crate does not know about survive a load/persist cycle.

pub mod errors;
pub mod record;
pub mod amount;
pub mod scholarship;
pub mod user;
pub mod message;
pub mod application;
pub mod transaction;
pub mod smart_contract;

pub use record::{Extra, Record};
