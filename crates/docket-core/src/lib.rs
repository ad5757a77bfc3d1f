//! Core types, operations and trait definitions for Docket, a court-case
//! tracker.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it.

pub mod case;
pub mod clock;
pub mod error;
pub mod identity;
pub mod ids;
pub mod lifecycle;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;

pub use error::{AuthError, Error, Result, ValidationError};
pub use service::Docket;
