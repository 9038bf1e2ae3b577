use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{new_id, now_iso, Extra};

fn default_status() -> String { "pending".to_string() }

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Application {
    #[serde(default)]
    pub id: String,
    pub scholarship_id: Option<String>,
    pub scholarship_title: Option<String>,
    pub applicant_id: Option<String>,
    pub story: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

crate::impl_record!(Application, "applications");

/// Body of `POST /api/applications`; the web client sends camelCase keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub scholarship_id: Option<String>,
    pub scholarship_title: Option<String>,
    pub applicant_id: Option<String>,
    pub story: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl NewApplication {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.scholarship_id.as_deref().map(str::is_empty).unwrap_or(true) {
            return Err(ModelError::invalid("scholarshipId is required"));
        }
        Ok(())
    }

    pub fn into_record(self) -> Application {
        Application {
            id: new_id(),
            scholarship_id: self.scholarship_id,
            scholarship_title: self.scholarship_title,
            applicant_id: self.applicant_id,
            story: self.story,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            status: default_status(),
            submitted_at: now_iso(),
            documents: self.documents,
            extra: Extra::new(),
        }
    }
}
