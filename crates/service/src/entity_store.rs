use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use models::application::Application;
use models::message::Message;
use models::scholarship::Scholarship;
use models::smart_contract::SmartContract;
use models::transaction::Transaction;
use models::user::User;
use models::Record;

use crate::errors::ServiceError;
use crate::seed;
use crate::storage::JsonCollection;

/// Initial content for collections that have no file yet.
#[derive(Clone, Debug, Default)]
pub struct Seeds {
    pub scholarships: Vec<Scholarship>,
    pub users: Vec<User>,
    /// `None` builds the demo messages from the loaded users.
    pub messages: Option<Vec<Message>>,
}

impl Seeds {
    pub fn demo() -> Self {
        Self { scholarships: seed::scholarships(), users: seed::users(), messages: None }
    }

    pub fn empty() -> Self {
        Self { messages: Some(Vec::new()), ..Default::default() }
    }
}

/// Every collection of the backend, one JSON file each under `data_dir`.
///
/// Built once at startup and shared with handlers behind an `Arc`.
pub struct EntityStore {
    pub scholarships: JsonCollection<Scholarship>,
    pub users: JsonCollection<User>,
    pub messages: JsonCollection<Message>,
    pub applications: JsonCollection<Application>,
    pub transactions: JsonCollection<Transaction>,
    pub smart_contracts: JsonCollection<SmartContract>,
    data_dir: PathBuf,
}

impl EntityStore {
    /// Open with the demo seed data.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        Self::open_with(data_dir, Seeds::demo()).await
    }

    pub async fn open_with<P: AsRef<Path>>(data_dir: P, seeds: Seeds) -> Result<Arc<Self>, ServiceError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let file = |name: String| data_dir.join(name);

        let scholarships = JsonCollection::load(file(Scholarship::file_name()), seeds.scholarships).await?;
        let users = JsonCollection::load(file(User::file_name()), seeds.users).await?;
        let message_seed = match seeds.messages {
            Some(ms) => ms,
            None => seed::messages(&users.list().await),
        };
        let messages = JsonCollection::load(file(Message::file_name()), message_seed).await?;
        let applications = JsonCollection::load(file(Application::file_name()), Vec::new()).await?;
        let transactions = JsonCollection::load(file(Transaction::file_name()), Vec::new()).await?;
        let smart_contracts = JsonCollection::load(file(SmartContract::file_name()), Vec::new()).await?;

        info!(
            data_dir = %data_dir.display(),
            scholarships = scholarships.len().await,
            users = users.len().await,
            messages = messages.len().await,
            applications = applications.len().await,
            transactions = transactions.len().await,
            smart_contracts = smart_contracts.len().await,
            "entity store opened"
        );

        Ok(Arc::new(Self {
            scholarships,
            users,
            messages,
            applications,
            transactions,
            smart_contracts,
            data_dir,
        }))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Rewrite every collection file from memory.
    pub async fn persist_all(&self) -> Result<(), ServiceError> {
        self.scholarships.persist().await?;
        self.users.persist().await?;
        self.messages.persist().await?;
        self.applications.persist().await?;
        self.transactions.persist().await?;
        self.smart_contracts.persist().await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn demo_bootstrap_creates_every_file() -> Result<(), anyhow::Error> {
        let store = EntityStore::open(tmp_dir()).await?;
        for name in ["scholarships", "users", "messages", "applications", "transactions", "smart_contracts"] {
            let path = store.data_dir().join(format!("{name}.json"));
            assert!(tokio::fs::metadata(&path).await.is_ok(), "{name}.json missing");
        }
        assert_eq!(store.scholarships.len().await, 4);
        assert_eq!(store.users.len().await, 2);
        assert_eq!(store.messages.len().await, 2);
        assert!(store.applications.is_empty().await);
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn reopen_keeps_state_and_ids() -> Result<(), anyhow::Error> {
        let dir = tmp_dir();
        let first = EntityStore::open(&dir).await?;
        let users_before = first.users.list().await;
        first.persist_all().await?;
        drop(first);

        let second = EntityStore::open_with(&dir, Seeds::empty()).await?;
        assert_eq!(second.users.list().await, users_before);
        let messages = second.messages.list().await;
        assert_eq!(messages[0].recipient.id, users_before[0].id);
        cleanup(&second).await;
        Ok(())
    }
}
