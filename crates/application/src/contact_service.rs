use std::sync::Arc;

use chrono::Utc;
use inoxviet_core::{AppResult, RecordId};
use inoxviet_domain::{Contact, ContactStatus};

use crate::{AuditService, RecordRepository, RecordService, RequestContext};


/// Contact form payload submitted by a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name.
    pub full_name: String,
    /// Sender email.
    pub email: Option<String>,
    /// Sender phone number.
    pub phone: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
}

/// Application service for contact requests.
#[derive(Clone)]
pub struct ContactService {
    contacts: RecordService<Contact>,
}

impl ContactService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        repository: Arc<dyn RecordRepository<Contact>>,
        audit_service: AuditService,
    ) -> Self {
        Self {
            contacts: RecordService::new(repository, audit_service),
        }
    }

    /// Contact collection.
    #[must_use]
    pub fn contacts(&self) -> &RecordService<Contact> {
        &self.contacts
    }

    /// Stores a visitor's message. No sign-in is required.
    pub async fn submit(
        &self,
        context: &RequestContext,
        submission: ContactSubmission,
    ) -> AppResult<Contact> {
        let contact = Contact {
            id: RecordId::new(),
            full_name: submission.full_name.trim().to_owned(),
            email: non_blank(submission.email),
            phone: non_blank(submission.phone),
            subject: non_blank(submission.subject),
            message: submission.message,
            status: ContactStatus::New,
            note: None,
            created_at: Utc::now(),
        };

        let contact = self.contacts.insert_unaudited(contact).await?;
        self.contacts
            .audit_service()
            .contact_submitted(context, &contact)
            .await;

        Ok(contact)
    }

    /// Lists contacts newest first, optionally only one status.
    pub async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<Contact>> {
        let mut contacts: Vec<Contact> = self
            .contacts
            .list()
            .await?
            .into_iter()
            .filter(|contact| status.is_none_or(|status| contact.status == status))
            .collect();
        contacts.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(contacts)
    }

    /// Moves a contact to another handling state.
    pub async fn set_status(
        &self,
        context: &RequestContext,
        contact_id: RecordId,
        status: ContactStatus,
    ) -> AppResult<Contact> {
        self.contacts
            .change_state(context, contact_id, |contact| {
                contact.status = status;
                status.label().to_owned()
            })
            .await
    }

    /// Replaces the internal staff note.
    pub async fn set_note(
        &self,
        context: &RequestContext,
        contact_id: RecordId,
        note: Option<String>,
    ) -> AppResult<Contact> {
        let mut contact = self.contacts.get(contact_id).await?;
        contact.note = non_blank(note);
        self.contacts.update(context, contact).await
    }

    /// Deletes a contact.
    pub async fn delete(&self, context: &RequestContext, contact_id: RecordId) -> AppResult<Contact> {
        self.contacts.delete(context, contact_id).await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
