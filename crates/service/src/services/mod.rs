//! Business operations over the entity store, one module per collection.
//! Handlers call these; nothing here touches files directly.

pub mod scholarship_service;
pub mod user_service;
pub mod message_service;
pub mod application_service;
pub mod transaction_service;
pub mod contract_service;
