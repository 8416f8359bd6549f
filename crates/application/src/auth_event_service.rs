use inoxviet_core::{AppError, AppResult};

use crate::{AuditService, RequestContext};

/// Authentication outcome reported by the sign-in front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Credentials were accepted.
    LoginSucceeded {
        /// Account email.
        email: String,
    },
    /// Credentials were rejected.
    LoginFailed {
        /// Attempted email.
        email: String,
        /// Rejection reason.
        reason: String,
    },
    /// The session was closed.
    LoggedOut,
}

/// Application service translating auth events into audit entries.
#[derive(Clone)]
pub struct AuthEventService {
    audit_service: AuditService,
}

impl AuthEventService {
    /// Creates a service writing through the audit trail.
    #[must_use]
    pub fn new(audit_service: AuditService) -> Self {
        Self { audit_service }
    }

    /// Records an auth event. Only failed logins may be reported anonymously.
    pub async fn record_event(&self, context: &RequestContext, event: AuthEvent) -> AppResult<()> {
        match event {
            AuthEvent::LoginSucceeded { email } => {
                context.require_actor()?;
                let email = require_email(&email)?;
                self.audit_service.login_succeeded(context, email).await;
            }
            AuthEvent::LoginFailed { email, reason } => {
                let email = require_email(&email)?;
                let reason = match reason.trim() {
                    "" => "sai thông tin đăng nhập",
                    reason => reason,
                };
                self.audit_service.login_failed(context, email, reason).await;
            }
            AuthEvent::LoggedOut => {
                context.require_actor()?;
                self.audit_service.logged_out(context).await;
            }
        }

        Ok(())
    }
}

fn require_email(email: &str) -> AppResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email must not be empty".to_owned()));
    }
    Ok(email)
}
