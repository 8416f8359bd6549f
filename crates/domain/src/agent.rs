use inoxviet_core::{AppResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::record::{optional_text, require_text};
use crate::{EmailAddress, Record, RecordKind, validate_phone};

/// Distribution agent listed on the "Hệ thống đại lý" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Record identifier.
    pub id: RecordId,
    /// Agent name.
    pub name: String,
    /// Region such as "Miền Bắc".
    #[serde(default)]
    pub region: Option<String>,
    /// Street address.
    pub address: String,
    /// Hotline.
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the agent is listed publicly.
    #[serde(default)]
    pub active: bool,
}

impl Record for Agent {
    const KIND: RecordKind = RecordKind::Agent;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        self.name.as_str()
    }

    fn validate(&self) -> AppResult<()> {
        require_text("agent name", &self.name)?;
        require_text("agent address", &self.address)?;
        optional_text("agent region", self.region.as_deref())?;
        validate_phone(&self.phone)?;
        if let Some(email) = self.email.as_deref() {
            EmailAddress::new(email)?;
        }

        Ok(())
    }
}
