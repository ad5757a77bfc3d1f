//! JSON REST API for Docket.
//!
//! Exposes an axum [`Router`] backed by a [`Docket`] over any
//! [`docket_core::store::CaseStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", docket_api::api_router(Arc::new(Docket::new(store))))
//! ```

pub mod cases;
pub mod error;
pub mod session;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use docket_core::{Docket, identity::IdentityResolver, store::CaseStore};

pub use error::{ApiError, ApiJson};
pub use session::SessionRegistry;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S, I> {
  pub docket:   Arc<Docket<S, I>>,
  pub sessions: Arc<SessionRegistry>,
}

impl<S, I> Clone for ApiState<S, I> {
  fn clone(&self) -> Self {
    Self {
      docket:   Arc::clone(&self.docket),
      sessions: Arc::clone(&self.sessions),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `docket`, with an empty
/// session registry using the default token lifetime.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, I>(docket: Arc<Docket<S, I>>) -> Router<()>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  api_router_with_sessions(docket, Arc::new(SessionRegistry::new()))
}

/// As [`api_router`], but logins are stored in `sessions`.
pub fn api_router_with_sessions<S, I>(
  docket: Arc<Docket<S, I>>,
  sessions: Arc<SessionRegistry>,
) -> Router<()>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let state = ApiState { docket, sessions };

  Router::new()
    // Sessions
    .route("/session", post(session::login::<S, I>).delete(session::logout::<S, I>))
    // Cases
    .route("/cases", get(cases::list::<S, I>).post(cases::register::<S, I>))
    .route("/cases/{id}", get(cases::lookup::<S, I>))
    .route("/cases/{id}/details", get(cases::details::<S, I>))
    .route("/cases/{id}/hearing", post(cases::schedule_hearing::<S, I>))
    .route("/cases/{id}/status", post(cases::update_status::<S, I>))
    .route("/cases/{id}/assignments", post(cases::assign::<S, I>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
