//! In-memory audit trail of successful mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What kind of mutation an audit entry records.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

/// One audit line: what happened, to which entity kind, with free-form details.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub action: AuditAction,
    pub entity: &'static str,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(action: AuditAction, entity: &'static str, details: impl Into<String>) -> Self {
        Self {
            action,
            entity,
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}
