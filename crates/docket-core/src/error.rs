//! Error types for `docket-core`.

use thiserror::Error;

use crate::{case::CaseId, session::Role};

/// Malformed or incomplete input. Nothing has been written when this is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("aadhar number must be 12 digits")]
  InvalidAadhar,

  #[error("mobile number must be 10 digits")]
  InvalidMobile,

  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("unknown case status: {0:?}")]
  UnknownStatus(String),

  #[error("personnel cannot be assigned for role {0}")]
  NotAssignable(Role),
}

/// Rejected login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
  #[error("username and password must be the same")]
  CredentialMismatch,

  #[error("no case found for client {0:?}")]
  NoCaseForClient(String),

  #[error("a valid role must be selected")]
  MissingRole,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("case not found: {0}")]
  NotFound(CaseId),

  #[error(transparent)]
  Auth(#[from] AuthError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
