//! # Bloglist API Server
//!
//! Actix-web application: routes, middleware, state and configuration. The
//! binary in `main.rs` only wires these together.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
