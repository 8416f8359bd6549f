use std::str::FromStr;

use chrono::{DateTime, Utc};
use inoxviet_core::{AppError, AppResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::record::{optional_text, require_text};
use crate::{EmailAddress, Record, RecordKind};

/// Handling state of a contact request.
///
/// This is the only status vocabulary for contacts; dashboard counts and the
/// contact admin screens share it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Not looked at yet.
    #[default]
    New,
    /// Someone is working on it.
    Processing,
    /// The customer got an answer.
    Replied,
    /// Nothing left to do.
    Closed,
}

impl ContactStatus {
    /// Returns a stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Replied => "replied",
            Self::Closed => "closed",
        }
    }

    /// Returns the Vietnamese label used in audit messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "mới",
            Self::Processing => "đang xử lý",
            Self::Replied => "đã phản hồi",
            Self::Closed => "đã đóng",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new" => Ok(Self::New),
            "processing" => Ok(Self::Processing),
            "replied" => Ok(Self::Replied),
            "closed" => Ok(Self::Closed),
            _ => Err(AppError::Validation(format!(
                "unknown contact status '{value}'"
            ))),
        }
    }
}

/// Message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Record identifier.
    pub id: RecordId,
    /// Sender name.
    pub full_name: String,
    /// Sender email.
    #[serde(default)]
    pub email: Option<String>,
    /// Sender phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
    /// Handling state.
    #[serde(default)]
    pub status: ContactStatus,
    /// Internal note left by staff.
    #[serde(default)]
    pub note: Option<String>,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Describes the sender for audit entries written without a signed-in actor.
    #[must_use]
    pub fn sender_description(&self) -> String {
        match self.email.as_deref().or(self.phone.as_deref()) {
            Some(reach) => format!("{} <{reach}>", self.full_name.trim()),
            None => self.full_name.trim().to_owned(),
        }
    }
}

impl Record for Contact {
    const KIND: RecordKind = RecordKind::Contact;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        self.full_name.as_str()
    }

    fn validate(&self) -> AppResult<()> {
        require_text("contact name", &self.full_name)?;
        require_text("contact message", &self.message)?;
        optional_text("contact subject", self.subject.as_deref())?;

        if self.email.is_none() && self.phone.is_none() {
            return Err(AppError::Validation(
                "contact needs an email or a phone number".to_owned(),
            ));
        }
        if let Some(email) = self.email.as_deref() {
            EmailAddress::new(email)?;
        }
        if let Some(phone) = self.phone.as_deref() {
            validate_phone(phone)?;
        }

        Ok(())
    }
}

/// Accepts Vietnamese-style numbers: digits with optional `+`, spaces, dots or dashes.
pub fn validate_phone(value: &str) -> AppResult<()> {
    let trimmed = value.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    let allowed = trimmed
        .chars()
        .enumerate()
        .all(|(index, c)| c.is_ascii_digit() || matches!(c, ' ' | '.' | '-') || (index == 0 && c == '+'));

    if !allowed || !(9..=15).contains(&digits) {
        return Err(AppError::Validation(format!(
            "invalid phone number '{trimmed}'"
        )));
    }

    Ok(())
}
