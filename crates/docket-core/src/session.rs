//! Roles and sessions.
//!
//! A session is nothing more than the acting user's role and name. It is
//! created by an [`IdentityResolver`](crate::identity::IdentityResolver) at
//! login and discarded at logout.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Determines which cases a user sees and which operations they may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Judge,
  Police,
  Lawyer,
  Client,
}

impl Role {
  pub fn code(self) -> &'static str {
    match self {
      Self::Judge => "judge",
      Self::Police => "police",
      Self::Lawyer => "lawyer",
      Self::Client => "client",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Role {
  type Err = AuthError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "judge" => Ok(Self::Judge),
      "police" => Ok(Self::Police),
      "lawyer" => Ok(Self::Lawyer),
      "client" => Ok(Self::Client),
      _ => Err(AuthError::MissingRole),
    }
  }
}

/// The logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub role: Role,
  pub name: String,
}

/// Raw login form input. `role` stays a string so that an empty or unknown
/// selection can be reported as [`AuthError::MissingRole`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
  #[serde(default)]
  pub role:     String,
  pub username: String,
  pub password: String,
}

impl Credentials {
  pub fn new(
    role: impl Into<String>,
    username: impl Into<String>,
    password: impl Into<String>,
  ) -> Self {
    Self {
      role:     role.into(),
      username: username.into(),
      password: password.into(),
    }
  }
}
