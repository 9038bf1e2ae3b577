use models::smart_contract::{NewSmartContract, SmartContract};

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;

pub async fn list_contracts(store: &EntityStore) -> Vec<SmartContract> {
    store.smart_contracts.list().await
}

pub async fn get_contract(store: &EntityStore, id: &str) -> Result<SmartContract, ServiceError> {
    store.smart_contracts.find_by_id(id).await
}

pub async fn create_contract(store: &EntityStore, input: NewSmartContract) -> Result<SmartContract, ServiceError> {
    input.validate()?;
    store.smart_contracts.append(input.into_record()).await
}

/// Contracts funded by `sponsor_address`.
pub async fn list_for_sponsor(store: &EntityStore, sponsor_address: &str) -> Vec<SmartContract> {
    store
        .smart_contracts
        .find_by(|c| c.sponsor_address.as_deref() == Some(sponsor_address))
        .await
}
