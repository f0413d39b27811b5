use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity decoded from a verified session token.
///
/// This is what the token claims, not yet checked against the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub issued_at: DateTime<Utc>,
}
