use serde::Deserialize;
use ts_rs::TS;

/// Incoming payload for publish or contact status changes.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct StatusRequest {
    pub status: String,
}

/// Incoming payload for active flag changes.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ActiveRequest {
    pub active: bool,
}

/// Incoming payload for account role changes.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct RoleRequest {
    pub role: String,
}
