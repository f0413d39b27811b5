//! Ownership guard for blog mutations.

use uuid::Uuid;

use crate::error::OwnershipError;

/// A blog mutation subject to the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogAction {
    /// Create a blog. The owner is the actor itself.
    Create,
    /// Delete the blog owned by `owner`.
    Delete { owner: Uuid },
    /// Overwrite the like count. Open to every caller, authenticated or not.
    UpdateLikes,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(OwnershipError),
}

impl Decision {
    pub fn into_result(self) -> Result<(), OwnershipError> {
        match self {
            Decision::Allowed => Ok(()),
            Decision::Denied(reason) => Err(reason),
        }
    }
}

/// Decide whether `actor` may perform `action`.
///
/// `actor` is the id of the user attached to the request, `None` when the
/// request is anonymous.
///
/// - No IO
/// - No panics
pub fn authorize(action: BlogAction, actor: Option<Uuid>) -> Decision {
    match (action, actor) {
        (BlogAction::UpdateLikes, _) => Decision::Allowed,
        (_, None) => Decision::Denied(OwnershipError::Unauthenticated),
        (BlogAction::Create, Some(_)) => Decision::Allowed,
        (BlogAction::Delete { owner }, Some(actor)) if actor == owner => Decision::Allowed,
        (BlogAction::Delete { .. }, Some(_)) => Decision::Denied(OwnershipError::NotOwner),
    }
}
