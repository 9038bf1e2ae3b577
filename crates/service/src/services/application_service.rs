use tracing::{info, warn};

use models::application::{Application, NewApplication};
use models::message::{Message, Party};

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;
use crate::services::message_service;

/// Store an application and tell the sponsor about it.
///
/// The notification goes to the first sponsor user and only when both the
/// scholarship and the applicant exist. Failing to store the notification
/// does not undo the application.
pub async fn submit_application(store: &EntityStore, input: NewApplication) -> Result<Application, ServiceError> {
    input.validate()?;
    let application = store.applications.append(input.into_record()).await?;
    info!(id = %application.id, scholarship_id = ?application.scholarship_id, "application submitted");

    if let Some(note) = sponsor_notification(store, &application).await {
        if let Err(e) = message_service::notify(store, note).await {
            warn!(application_id = %application.id, error = %e, "sponsor notification not stored");
        }
    }
    Ok(application)
}

async fn sponsor_notification(store: &EntityStore, application: &Application) -> Option<Message> {
    let scholarship_id = application.scholarship_id.as_deref()?;
    let applicant_id = application.applicant_id.as_deref()?;
    let scholarship = store.scholarships.find_by_id(scholarship_id).await.ok()?;
    let sponsor = store.users.find_first(|u| u.is_sponsor()).await?;
    let applicant = store.users.find_by_id(applicant_id).await.ok()?;

    let title = scholarship.title.unwrap_or_default();
    Some(Message::notification(
        Party::system(),
        Party::new(sponsor.id, sponsor.name),
        format!("New application received for {} from {}.", title, applicant.name),
    ))
}

pub async fn list_for_scholarship(store: &EntityStore, scholarship_id: &str) -> Vec<Application> {
    store
        .applications
        .find_by(|a| a.scholarship_id.as_deref() == Some(scholarship_id))
        .await
}

pub async fn list_for_applicant(store: &EntityStore, applicant_id: &str) -> Vec<Application> {
    store
        .applications
        .find_by(|a| a.applicant_id.as_deref() == Some(applicant_id))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::{test_support::*, Seeds};

    fn input(scholarship_id: &str, applicant_id: &str) -> NewApplication {
        NewApplication {
            scholarship_id: Some(scholarship_id.into()),
            scholarship_title: Some("Grant".into()),
            applicant_id: Some(applicant_id.into()),
            story: Some("my story".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn submission_notifies_first_sponsor() -> Result<(), anyhow::Error> {
        let store = EntityStore::open(tmp_dir()).await?;
        let scholarship = store.scholarships.list().await.remove(0);
        let users = store.users.list().await;
        let (student, sponsor) = (&users[0], &users[1]);
        let messages_before = store.messages.len().await;

        let app = submit_application(&store, input(&scholarship.id, &student.id)).await?;
        assert_eq!(app.status, "pending");

        let inbox = message_service::list_for_recipient(&store, &sponsor.id).await;
        assert_eq!(store.messages.len().await, messages_before + 1);
        let note = inbox.last().unwrap();
        assert_eq!(note.sender, Party::system());
        assert_eq!(
            note.content.as_deref(),
            Some(format!("New application received for STEM Innovation Grant from {}.", student.name).as_str())
        );
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_scholarship_skips_notification() -> Result<(), anyhow::Error> {
        let store = EntityStore::open(tmp_dir()).await?;
        let student = store.users.list().await.remove(0);
        let before = store.messages.len().await;

        submit_application(&store, input("no-such-scholarship", &student.id)).await?;
        assert_eq!(store.messages.len().await, before);
        assert_eq!(list_for_applicant(&store, &student.id).await.len(), 1);
        assert_eq!(list_for_scholarship(&store, "no-such-scholarship").await.len(), 1);
        assert!(list_for_scholarship(&store, "other").await.is_empty());
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_notification_keeps_application() -> Result<(), anyhow::Error> {
        let store = EntityStore::open(tmp_dir()).await?;
        let scholarship = store.scholarships.list().await.remove(0);
        let student = store.users.list().await.remove(0);
        let before = store.messages.len().await;
        // A directory on the temp path makes the messages write fail.
        tokio::fs::create_dir_all(store.data_dir().join("messages.json.tmp")).await?;

        let app = submit_application(&store, input(&scholarship.id, &student.id)).await?;
        assert_eq!(store.messages.len().await, before);
        assert_eq!(store.applications.find_by_id(&app.id).await?, app);
        let on_disk = tokio::fs::read_to_string(store.data_dir().join("applications.json")).await?;
        assert!(on_disk.contains(&app.id));
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn missing_scholarship_id_is_invalid() -> Result<(), anyhow::Error> {
        let store = EntityStore::open_with(tmp_dir(), Seeds::empty()).await?;
        let res = submit_application(&store, NewApplication::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        cleanup(&store).await;
        Ok(())
    }
}
