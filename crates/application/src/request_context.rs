use inoxviet_core::{AppError, AppResult, UserIdentity};

/// Who is calling and from where, as seen by the application layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    actor: Option<UserIdentity>,
    origin: Option<String>,
}

impl RequestContext {
    /// Context for a signed-in administrator.
    #[must_use]
    pub fn admin(actor: UserIdentity) -> Self {
        Self {
            actor: Some(actor),
            origin: None,
        }
    }

    /// Context for a public visitor.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attaches the network origin of the request.
    #[must_use]
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the signed-in actor, if any.
    #[must_use]
    pub fn actor(&self) -> Option<&UserIdentity> {
        self.actor.as_ref()
    }

    /// Returns the signed-in actor or fails with `Unauthorized`.
    pub fn require_actor(&self) -> AppResult<&UserIdentity> {
        self.actor
            .as_ref()
            .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))
    }

    /// Returns the network origin, if known.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}
