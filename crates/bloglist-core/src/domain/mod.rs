//! Domain entities - the core business objects.

mod blog;
mod identity;
mod user;

pub use blog::{Blog, BlogDraft};
pub use identity::Identity;
pub use user::{MIN_PASSWORD_LEN, Registration, User};
