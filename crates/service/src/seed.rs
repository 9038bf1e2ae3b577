//! Demo records written the first time a data directory is used.

use chrono::{Duration, Utc};

use models::message::{Message, Party};
use models::scholarship::Scholarship;
use models::user::User;
use models::Extra;

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

fn scholarship(title: &str, sponsor: &str, amount: u64, deadline_days: i64, status: &str, description: &str, requirements: &str) -> Scholarship {
    Scholarship {
        id: String::new(),
        title: Some(title.into()),
        sponsor: Some(sponsor.into()),
        amount: Some(amount.into()),
        deadline: Some(days_from_now(deadline_days)),
        status: status.into(),
        description: Some(description.into()),
        requirements: Some(requirements.into()),
        extra: Extra::new(),
    }
}

pub fn scholarships() -> Vec<Scholarship> {
    vec![
        scholarship(
            "STEM Innovation Grant",
            "TechFuture Foundation",
            5000,
            30,
            "open",
            "Supporting innovative projects in science, technology, engineering, and mathematics fields.",
            "Undergraduate students with GPA 3.5 or above. Must submit project proposal.",
        ),
        scholarship(
            "Arts and Humanities Fellowship",
            "Cultural Heritage Fund",
            3500,
            60,
            "open",
            "Supporting students pursuing degrees in arts, literature, history, and related fields.",
            "Open to all undergraduate and graduate students. Portfolio submission required.",
        ),
        scholarship(
            "Community Leadership Scholarship",
            "Civic Engagement Initiative",
            2500,
            5,
            "open",
            "Recognizing students who have demonstrated exceptional leadership in community service.",
            "Minimum 100 hours of community service. Two recommendation letters required.",
        ),
        scholarship(
            "Environmental Research Grant",
            "Green Earth Foundation",
            4500,
            -15,
            "closed",
            "Funding for research projects focused on environmental sustainability and conservation.",
            "Graduate students in environmental science or related fields. Research proposal required.",
        ),
    ]
}

fn user(address: &str, name: &str, email: &str, kind: &str, balance: &str, age_days: i64) -> User {
    User {
        id: String::new(),
        address: address.into(),
        name: name.into(),
        email: email.into(),
        kind: kind.into(),
        balance: balance.into(),
        created_at: days_from_now(-age_days),
        extra: Extra::new(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("0x1234567890abcdef1234567890abcdef12345678", "John Doe", "john@example.com", "student", "0.5", 45),
        user("0xabcdef1234567890abcdef1234567890abcdef12", "Tech Foundation", "foundation@tech.org", "sponsor", "10.2", 90),
    ]
}

/// Two messages from the second user to the first, built from whatever the
/// users collection holds. Fewer than two users means no seed messages.
pub fn messages(users: &[User]) -> Vec<Message> {
    let (Some(student), Some(sponsor)) = (users.first(), users.get(1)) else {
        return Vec::new();
    };
    let sender = Party::new(&sponsor.id, &sponsor.name);
    let recipient = Party::new(&student.id, &student.name);
    let message = |content: &str, age_days: i64, read: bool| Message {
        id: String::new(),
        sender: sender.clone(),
        recipient: recipient.clone(),
        content: Some(content.into()),
        timestamp: days_from_now(-age_days),
        read,
        extra: Extra::new(),
    };
    vec![
        message(
            "Congratulations! Your application for the STEM Innovation Grant has been shortlisted. Please schedule an interview with our team in the next week.",
            2,
            false,
        ),
        message(
            "We're pleased to inform you that your project proposal has received positive feedback from our review committee. We'd like to discuss potential funding options for your initiative.",
            7,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_reference_loaded_users() {
        let mut us = users();
        us[0].id = "student".into();
        us[1].id = "sponsor".into();
        let ms = messages(&us);
        assert_eq!(ms.len(), 2);
        assert!(ms.iter().all(|m| m.sender.id == "sponsor" && m.recipient.id == "student"));
        assert_eq!(ms.iter().filter(|m| !m.read).count(), 1);
    }

    #[test]
    fn no_messages_without_two_users() {
        assert!(messages(&users()[..1]).is_empty());
    }

    #[test]
    fn one_seed_scholarship_is_closed() {
        let closed: Vec<_> = scholarships().into_iter().filter(|s| s.status == "closed").collect();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].title.as_deref(), Some("Environmental Research Grant"));
    }
}
