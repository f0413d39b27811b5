//! Middleware modules.

pub mod error;
pub mod identity;

pub use error::{AppError, AppResult};
pub use identity::{AttachedIdentity, IdentityAttachment, LenientIdentity, StrictIdentity};
