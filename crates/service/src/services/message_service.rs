use models::message::{Message, NewMessage};

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;

/// Messages addressed to `user_id`, oldest first.
pub async fn list_for_recipient(store: &EntityStore, user_id: &str) -> Vec<Message> {
    store.messages.find_by(|m| m.recipient.id == user_id).await
}

pub async fn send_message(store: &EntityStore, input: NewMessage) -> Result<Message, ServiceError> {
    input.validate()?;
    store.messages.append(input.into_record()).await
}

/// Append a notification; used by other services.
pub async fn notify(store: &EntityStore, message: Message) -> Result<Message, ServiceError> {
    store.messages.append(message).await
}

/// Set the read flag. Calling it on a read message changes nothing and
/// does not rewrite the file.
pub async fn mark_read(store: &EntityStore, id: &str) -> Result<Message, ServiceError> {
    store
        .messages
        .update(id, |m| {
            m.read = true;
            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{test_support::*, Seeds};
    use models::message::Party;
    use models::Extra;

    fn msg(id: &str, recipient: &str, read: bool) -> Message {
        Message {
            id: id.into(),
            sender: Party::new("u2", "Sponsor"),
            recipient: Party::new(recipient, "Student"),
            content: Some(format!("body {id}")),
            timestamp: "2024-01-01T00:00:00+00:00".into(),
            read,
            extra: Extra::new(),
        }
    }

    #[tokio::test]
    async fn mark_read_touches_only_the_target() -> Result<(), anyhow::Error> {
        let seeds = Seeds { messages: Some(vec![msg("m1", "u1", false), msg("m2", "u1", false)]), ..Seeds::empty() };
        let store = EntityStore::open_with(tmp_dir(), seeds).await?;

        let m1 = mark_read(&store, "m1").await?;
        assert!(m1.read);
        assert_eq!(m1, Message { read: true, ..msg("m1", "u1", false) });
        assert!(!store.messages.find_by_id("m2").await?.read);

        let path = store.messages.path().to_path_buf();
        let before = tokio::fs::read(&path).await?;
        let again = mark_read(&store, "m1").await?;
        assert_eq!(again, m1);
        assert_eq!(tokio::fs::read(&path).await?, before);

        assert!(matches!(mark_read(&store, "nope").await, Err(ServiceError::NotFound(_))));
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn recipient_filter_and_send() -> Result<(), anyhow::Error> {
        let seeds = Seeds { messages: Some(vec![msg("m1", "u1", false), msg("m2", "u3", true)]), ..Seeds::empty() };
        let store = EntityStore::open_with(tmp_dir(), seeds).await?;

        let sent = send_message(
            &store,
            NewMessage { sender: Party::new("u3", "Other"), recipient: Party::new("u1", "Student"), content: "hello".into() },
        )
        .await?;
        assert!(!sent.read);

        let ids: Vec<String> = list_for_recipient(&store, "u1").await.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1".to_string(), sent.id]);
        cleanup(&store).await;
        Ok(())
    }
}
