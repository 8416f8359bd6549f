use inoxviet_application::AuthEvent;
use inoxviet_core::AppError;
use serde::Deserialize;
use ts_rs::TS;

/// Incoming auth event reported by the sign-in front end.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct AuthEventRequest {
    /// `login_succeeded`, `login_failed` or `logged_out`.
    pub event: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl TryFrom<AuthEventRequest> for AuthEvent {
    type Error = AppError;

    fn try_from(value: AuthEventRequest) -> Result<Self, Self::Error> {
        match value.event.as_str() {
            "login_succeeded" => Ok(Self::LoginSucceeded {
                email: value.email.unwrap_or_default(),
            }),
            "login_failed" => Ok(Self::LoginFailed {
                email: value.email.unwrap_or_default(),
                reason: value.reason.unwrap_or_default(),
            }),
            "logged_out" => Ok(Self::LoggedOut),
            other => Err(AppError::Validation(format!("unknown auth event '{other}'"))),
        }
    }
}
