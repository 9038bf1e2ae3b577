//! Storage abstractions for service layer
//!
//! One JSON file per collection, replaced atomically on every write.

pub mod json_collection;

pub use json_collection::JsonCollection;
