use inoxviet_application::ContactSubmission;
use serde::Deserialize;
use ts_rs::TS;

/// Incoming payload of the public contact form.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ContactSubmissionRequest {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl From<ContactSubmissionRequest> for ContactSubmission {
    fn from(value: ContactSubmissionRequest) -> Self {
        Self {
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            subject: value.subject,
            message: value.message,
        }
    }
}

/// Incoming payload for internal notes.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ContactNoteRequest {
    #[serde(default)]
    pub note: Option<String>,
}

/// Query string of the contact inbox.
#[derive(Debug, Default, Deserialize)]
pub struct ContactListQuery {
    pub status: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub q: Option<String>,
}
