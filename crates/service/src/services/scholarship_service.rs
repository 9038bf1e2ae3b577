use models::scholarship::{NewScholarship, Scholarship};

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;

pub async fn list_scholarships(store: &EntityStore) -> Vec<Scholarship> {
    store.scholarships.list().await
}

pub async fn get_scholarship(store: &EntityStore, id: &str) -> Result<Scholarship, ServiceError> {
    store.scholarships.find_by_id(id).await
}

pub async fn create_scholarship(store: &EntityStore, input: NewScholarship) -> Result<Scholarship, ServiceError> {
    store.scholarships.append(input.into_record()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{test_support::*, Seeds};

    #[tokio::test]
    async fn create_then_get() -> Result<(), anyhow::Error> {
        let store = EntityStore::open_with(tmp_dir(), Seeds::empty()).await?;
        let created = create_scholarship(
            &store,
            NewScholarship { title: Some("Robotics".into()), amount: Some(1200.into()), ..Default::default() },
        )
        .await?;
        assert_eq!(created.status, "open");
        assert_eq!(get_scholarship(&store, &created.id).await?, created);
        assert_eq!(list_scholarships(&store).await.len(), 1);
        assert!(matches!(get_scholarship(&store, "missing").await, Err(ServiceError::NotFound(_))));
        cleanup(&store).await;
        Ok(())
    }
}
