//! Login sessions: the token registry, the bearer-token extractor, and the
//! `/session` handlers.
//!
//! | Method   | Path       | Notes |
//! |----------|------------|-------|
//! | `POST`   | `/session` | Body: `{"role","username","password"}`; returns 201 + [`LoginResponse`] |
//! | `DELETE` | `/session` | Drops the bearer token's session; always 204 |

use std::{collections::HashMap, time::Duration};

use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, StatusCode, header, request::Parts},
  response::IntoResponse,
};
use docket_core::{
  identity::IdentityResolver,
  session::{Credentials, Role, Session},
  store::CaseStore,
};
use serde::Serialize;
use tokio::{sync::RwLock, time::Instant};
use uuid::Uuid;

use crate::{
  ApiState,
  error::{ApiError, ApiJson},
};

// ─── Registry ─────────────────────────────────────────────────────────────────

/// How long a login token stays valid when no TTL is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Live sessions kept per user; logging in again past this evicts the
/// oldest.
pub const MAX_SESSIONS_PER_USER: usize = 8;

#[derive(Debug)]
struct Entry {
  session: Session,
  opened:  Instant,
}

/// Active sessions keyed by login token.
///
/// Tokens expire `ttl` after login. Expired entries are never returned and
/// are dropped on the next [`SessionRegistry::open`].
#[derive(Debug)]
pub struct SessionRegistry {
  sessions: RwLock<HashMap<Uuid, Entry>>,
  ttl:      Duration,
}

impl Default for SessionRegistry {
  fn default() -> Self { Self::with_ttl(DEFAULT_SESSION_TTL) }
}

impl SessionRegistry {
  pub fn new() -> Self { Self::default() }

  pub fn with_ttl(ttl: Duration) -> Self {
    Self { sessions: RwLock::new(HashMap::new()), ttl }
  }

  /// Store `session` under a fresh token.
  pub async fn open(&self, session: Session) -> Uuid {
    let now = Instant::now();
    let mut sessions = self.sessions.write().await;
    sessions.retain(|_, entry| now.duration_since(entry.opened) < self.ttl);

    let mut same_user: Vec<_> = sessions
      .iter()
      .filter(|(_, entry)| entry.session == session)
      .map(|(token, entry)| (entry.opened, *token))
      .collect();
    if same_user.len() >= MAX_SESSIONS_PER_USER {
      same_user.sort();
      let excess = same_user.len() + 1 - MAX_SESSIONS_PER_USER;
      for (_, token) in same_user.into_iter().take(excess) {
        sessions.remove(&token);
      }
    }

    let token = Uuid::new_v4();
    sessions.insert(token, Entry { session, opened: now });
    token
  }

  pub async fn get(&self, token: Uuid) -> Option<Session> {
    let sessions = self.sessions.read().await;
    let entry = sessions.get(&token)?;
    (entry.opened.elapsed() < self.ttl).then(|| entry.session.clone())
  }

  /// Remove the session for `token`, if any.
  pub async fn close(&self, token: Uuid) -> Option<Session> {
    self.sessions.write().await.remove(&token).map(|entry| entry.session)
  }

  /// Stored entries, counting expired ones not yet pruned.
  pub async fn len(&self) -> usize { self.sessions.read().await.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

// ─── Extractor ────────────────────────────────────────────────────────────────

/// Parse `Authorization: Bearer <uuid>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
  let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
  let token = value.strip_prefix("Bearer ")?;
  Uuid::parse_str(token.trim()).ok()
}

/// The session behind the request's bearer token. Rejects with 401 when the
/// header is missing or the token is unknown.
pub struct CurrentSession(pub Session);

impl CurrentSession {
  /// Fail with 403 unless the session's role is one of `roles`.
  pub fn require(&self, roles: &[Role]) -> Result<&Session, ApiError> {
    if roles.contains(&self.0.role) {
      Ok(&self.0)
    } else {
      Err(ApiError::Forbidden(format!(
        "role {} may not perform this action",
        self.0.role
      )))
    }
  }
}

impl<S, I> FromRequestParts<ApiState<S, I>> for CurrentSession
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<S, I>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_token(&parts.headers)
      .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;
    let session = state
      .sessions
      .get(token)
      .await
      .ok_or_else(|| ApiError::Unauthorized("unknown or expired session".into()))?;
    Ok(CurrentSession(session))
  }
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginResponse {
  pub token: Uuid,
  pub role:  Role,
  pub name:  String,
}

/// `POST /session`
pub async fn login<S, I>(
  State(state): State<ApiState<S, I>>,
  ApiJson(creds): ApiJson<Credentials>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let session = state.docket.login(&creds).await?;
  let response = LoginResponse {
    role:  session.role,
    name:  session.name.clone(),
    token: state.sessions.open(session).await,
  };
  Ok((StatusCode::CREATED, Json(response)))
}

/// `DELETE /session` — idempotent; an absent or unknown token is not an
/// error.
pub async fn logout<S, I>(
  State(state): State<ApiState<S, I>>,
  headers: HeaderMap,
) -> StatusCode
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  if let Some(token) = bearer_token(&headers)
    && let Some(session) = state.sessions.close(token).await
  {
    tracing::info!(name = %session.name, role = %session.role, "logout");
  }
  StatusCode::NO_CONTENT
}
