use serde::{Deserialize, Serialize};

use crate::record::{new_id, Extra};

fn default_status() -> String { "open".to_string() }

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Scholarship {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub sponsor: Option<String>,
    pub amount: Option<serde_json::Number>,
    pub deadline: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

crate::impl_record!(Scholarship, "scholarships");

/// Body of `POST /api/scholarships`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NewScholarship {
    pub title: Option<String>,
    pub sponsor: Option<String>,
    pub amount: Option<serde_json::Number>,
    pub deadline: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
}

impl NewScholarship {
    pub fn into_record(self) -> Scholarship {
        Scholarship {
            id: new_id(),
            title: self.title,
            sponsor: self.sponsor,
            amount: self.amount,
            deadline: self.deadline,
            status: self.status.unwrap_or_else(default_status),
            description: self.description,
            requirements: self.requirements,
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_open() {
        let s = NewScholarship { title: Some("Grant".into()), ..Default::default() }.into_record();
        assert_eq!(s.status, "open");
        assert!(!s.id.is_empty());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{"id":"s1","title":"T","sponsor":null,"amount":5000,"deadline":null,"status":"open","description":null,"requirements":null,"tags":["stem"]}"#;
        let s: Scholarship = serde_json::from_str(raw).unwrap();
        assert_eq!(s.extra.get("tags"), Some(&serde_json::json!(["stem"])));
        let back = serde_json::to_value(&s).unwrap();
        assert_eq!(back["tags"], serde_json::json!(["stem"]));
        assert_eq!(back["amount"], serde_json::json!(5000));
    }

    #[test]
    fn any_status_is_kept() {
        let s = NewScholarship { status: Some("draft".into()), ..Default::default() }.into_record();
        assert_eq!(s.status, "draft");
    }
}
