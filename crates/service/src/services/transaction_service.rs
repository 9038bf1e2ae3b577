use tracing::{error, info, warn};

use models::message::{Message, Party};
use models::transaction::{NewTransaction, Transaction};
use models::user::User;

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;
use crate::services::message_service;

/// Parties touched by a transfer, as they look afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub sender: Option<User>,
    pub recipient: Option<User>,
    /// `(id, balance)` of every changed user before the transfer.
    pub previous: Vec<(String, String)>,
}

/// Move `amount` from `from` to `to` in one write of the users collection.
///
/// Either side may be unknown; only the known side changes. The sender's
/// balance never goes below zero. Sending to yourself changes nothing.
/// A failed debit or credit leaves every balance as it was.
pub async fn transfer_balance(store: &EntityStore, from: &str, to: &str, amount: f64) -> Result<Transfer, ServiceError> {
    store
        .users
        .update_all(|users| {
            let find = |addr: &str| users.iter().position(|u| !addr.is_empty() && u.address == addr);
            let (si, ri) = (find(from), find(to));
            let mut previous = Vec::new();
            if si.is_none() || si != ri {
                if let Some(i) = si {
                    previous.push((users[i].id.clone(), users[i].balance.clone()));
                    users[i].debit(amount)?;
                }
                if let Some(j) = ri {
                    previous.push((users[j].id.clone(), users[j].balance.clone()));
                    users[j].credit(amount)?;
                }
            }
            Ok(Transfer {
                sender: si.map(|i| users[i].clone()),
                recipient: ri.map(|j| users[j].clone()),
                previous,
            })
        })
        .await
}

/// Put back the balances captured in [`Transfer::previous`].
async fn restore_balances(store: &EntityStore, previous: &[(String, String)]) -> Result<(), ServiceError> {
    store
        .users
        .update_all(|users| {
            for (id, balance) in previous {
                if let Some(u) = users.iter_mut().find(|u| &u.id == id) {
                    u.balance = balance.clone();
                }
            }
            Ok(())
        })
        .await
}

/// Move the balances, record the completed transaction and notify the
/// recipient.
///
/// A rejected transfer records nothing. If the transaction cannot be
/// stored the balances are moved back before the error is returned.
pub async fn record_transaction(store: &EntityStore, input: NewTransaction) -> Result<Transaction, ServiceError> {
    let amount = input.validate()?;
    let record = input.into_record();
    let from = record.from_address.clone().unwrap_or_default();
    let to = record.to_address.clone().unwrap_or_default();

    let transfer = transfer_balance(store, &from, &to, amount).await?;
    let tx = match store.transactions.append(record).await {
        Ok(tx) => tx,
        Err(e) => {
            if let Err(undo) = restore_balances(store, &transfer.previous).await {
                error!(%from, %to, error = %undo, "balances not restored after failed transaction write");
            }
            return Err(e);
        }
    };
    info!(id = %tx.id, %from, %to, amount = %tx.amount, "transaction recorded");

    if let Transfer { sender: Some(sender), recipient: Some(recipient), .. } = transfer {
        if sender.id != recipient.id {
            let note = Message::notification(
                Party::new(sender.id, sender.name.clone()),
                Party::new(recipient.id, recipient.name),
                format!("You have received {} ETH from {}.", tx.amount, sender.name),
            );
            if let Err(e) = message_service::notify(store, note).await {
                warn!(transaction_id = %tx.id, error = %e, "recipient notification not stored");
            }
        }
    }
    Ok(tx)
}

/// Transactions where `address` is sender or recipient.
pub async fn list_for_address(store: &EntityStore, address: &str) -> Vec<Transaction> {
    store.transactions.find_by(|t| t.involves(address)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{test_support::*, Seeds};
    use models::Extra;

    fn user(id: &str, address: &str, balance: &str) -> User {
        User {
            id: id.into(),
            address: address.into(),
            name: format!("user {id}"),
            email: String::new(),
            kind: "student".into(),
            balance: balance.into(),
            created_at: String::new(),
            extra: Extra::new(),
        }
    }

    async fn two_users() -> Result<std::sync::Arc<EntityStore>, ServiceError> {
        let seeds = Seeds { users: vec![user("u1", "0xA", "10.0"), user("u2", "0xB", "0.0")], ..Seeds::empty() };
        EntityStore::open_with(tmp_dir(), seeds).await
    }

    fn tx(from: &str, to: &str, amount: &str) -> NewTransaction {
        NewTransaction {
            from_address: Some(from.into()),
            to_address: Some(to.into()),
            amount: amount.into(),
            scholarship_id: None,
            tx_hash: None,
        }
    }

    #[tokio::test]
    async fn transfer_moves_balance() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        transfer_balance(&store, "0xA", "0xB", 3.0).await?;
        assert_eq!(store.users.find_by_id("u1").await?.balance, "7.0");
        assert_eq!(store.users.find_by_id("u2").await?.balance, "3.0");
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn transfer_clamps_sender_at_zero() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        transfer_balance(&store, "0xA", "0xB", 25.0).await?;
        assert_eq!(store.users.find_by_id("u1").await?.balance, "0.0");
        assert_eq!(store.users.find_by_id("u2").await?.balance, "25.0");
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn record_notifies_recipient_and_lists_both_sides() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        let t = record_transaction(&store, tx("0xA", "0xB", "3.0")).await?;
        assert_eq!(t.status, "completed");

        let inbox = message_service::list_for_recipient(&store, "u2").await;
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].content.as_deref(), Some("You have received 3.0 ETH from user u1."));

        assert_eq!(list_for_address(&store, "0xA").await.len(), 1);
        assert_eq!(list_for_address(&store, "0xB").await.len(), 1);
        assert!(list_for_address(&store, "0xC").await.is_empty());
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_recipient_still_debits_sender() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        record_transaction(&store, tx("0xA", "0xExternal", "1.5")).await?;
        assert_eq!(store.users.find_by_id("u1").await?.balance, "8.5");
        assert!(store.messages.is_empty().await);
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn bad_amount_records_nothing() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        let res = record_transaction(&store, tx("0xA", "0xB", "ten")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(store.transactions.is_empty().await);
        assert_eq!(store.users.find_by_id("u1").await?.balance, "10.0");
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn overflowing_credit_moves_and_records_nothing() -> Result<(), anyhow::Error> {
        let seeds = Seeds { users: vec![user("u1", "0xA", "10.0"), user("u2", "0xB", "1e308")], ..Seeds::empty() };
        let store = EntityStore::open_with(tmp_dir(), seeds).await?;
        let res = record_transaction(&store, tx("0xA", "0xB", "1e308")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(store.transactions.is_empty().await);
        assert!(store.messages.is_empty().await);
        assert_eq!(store.users.find_by_id("u1").await?.balance, "10.0");
        assert_eq!(store.users.find_by_id("u2").await?.balance, "1e308");
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_transaction_write_restores_balances() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        // A directory on the temp path makes the transactions write fail.
        tokio::fs::create_dir_all(store.data_dir().join("transactions.json.tmp")).await?;

        let res = record_transaction(&store, tx("0xA", "0xB", "3.0")).await;
        assert!(matches!(res, Err(ServiceError::StorageUnavailable(_))));
        assert!(store.transactions.is_empty().await);
        assert!(store.messages.is_empty().await);
        assert_eq!(store.users.find_by_id("u1").await?.balance, "10.0");
        assert_eq!(store.users.find_by_id("u2").await?.balance, "0.0");
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn self_transfer_keeps_balance() -> Result<(), anyhow::Error> {
        let store = two_users().await?;
        let t = record_transaction(&store, tx("0xA", "0xA", "5.0")).await?;
        assert_eq!(t.status, "completed");
        assert_eq!(store.users.find_by_id("u1").await?.balance, "10.0");
        assert!(store.messages.is_empty().await);
        cleanup(&store).await;
        Ok(())
    }
}
