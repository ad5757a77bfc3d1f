//! Identity resolution: turning login credentials into a [`Session`].

use crate::{
  case::CaseRecord,
  error::AuthError,
  session::{Credentials, Role, Session},
};

/// Maps credentials to a session.
///
/// Lifecycle operations never look at credentials; they only see the
/// resulting [`Session`]. A real authentication backend can replace
/// [`DemoIdentity`] without touching them.
pub trait IdentityResolver: Send + Sync {
  /// Resolve `creds` against the current set of cases.
  fn resolve(
    &self,
    creds: &Credentials,
    cases: &[CaseRecord],
  ) -> Result<Session, AuthError>;
}

/// Placeholder rule used by the demo deployment.
///
/// - the password must equal the username;
/// - a role must be selected;
/// - a client must be named, case-insensitively, in at least one case.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoIdentity;

impl IdentityResolver for DemoIdentity {
  fn resolve(
    &self,
    creds: &Credentials,
    cases: &[CaseRecord],
  ) -> Result<Session, AuthError> {
    let username = creds.username.trim();
    let password = creds.password.trim();

    if username != password {
      return Err(AuthError::CredentialMismatch);
    }

    let role: Role = creds.role.parse()?;

    if role == Role::Client && !client_has_case(username, cases) {
      return Err(AuthError::NoCaseForClient(username.to_owned()));
    }

    Ok(Session { role, name: username.to_owned() })
  }
}

fn client_has_case(username: &str, cases: &[CaseRecord]) -> bool {
  let needle = username.to_lowercase();
  cases.iter().any(|c| c.client.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed::sample_cases;

  fn resolve(role: &str, user: &str, pass: &str) -> Result<Session, AuthError> {
    DemoIdentity.resolve(&Credentials::new(role, user, pass), &sample_cases())
  }

  #[test]
  fn mismatched_password_is_rejected() {
    assert_eq!(
      resolve("judge", "alice", "bob"),
      Err(AuthError::CredentialMismatch)
    );
  }

  #[test]
  fn mismatch_is_reported_before_missing_role() {
    assert_eq!(resolve("", "alice", "bob"), Err(AuthError::CredentialMismatch));
    assert_eq!(resolve("", "alice", "alice"), Err(AuthError::MissingRole));
    assert_eq!(resolve("admin", "alice", "alice"), Err(AuthError::MissingRole));
  }

  #[test]
  fn staff_roles_need_no_case() {
    let session = resolve("police", " Vikram ", "Vikram").unwrap();
    assert_eq!(session, Session { role: Role::Police, name: "Vikram".into() });
  }

  #[test]
  fn client_without_case_is_rejected() {
    assert_eq!(
      resolve("client", "alice", "alice"),
      Err(AuthError::NoCaseForClient("alice".into()))
    );
  }

  #[test]
  fn client_match_is_case_insensitive_substring() {
    let session = resolve("client", "meena", "meena").unwrap();
    assert_eq!(session.role, Role::Client);
    assert_eq!(session.name, "meena");
  }
}
