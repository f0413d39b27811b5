//! # Bloglist Core
//!
//! The domain layer of the bloglist API.
//! Entities, the repository and credential ports, the ownership guard and the
//! aggregate statistics. No infrastructure dependencies live here.

pub mod authz;
pub mod domain;
pub mod error;
pub mod ports;
pub mod stats;

pub use authz::{BlogAction, Decision, authorize};
pub use error::{DomainError, OwnershipError, RepoError};
