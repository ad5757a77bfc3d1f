//! [`Docket`] — the case service.
//!
//! Owns a [`CaseStore`], an [`IdentityResolver`], a [`CaseIdGenerator`] and
//! a [`Clock`], and exposes every case operation as a method. There is no
//! global state: callers hold a `Docket` (typically behind an `Arc`) and
//! pass sessions in explicitly.

use tracing::{debug, info};

use crate::{
  case::{
    Assignment, CaseId, CaseMutation, CaseRecord, CaseSnapshot, HearingRequest,
    NewCase, StatusUpdate,
  },
  clock::{Clock, SystemClock},
  error::{Error, Result, ValidationError},
  identity::{DemoIdentity, IdentityResolver},
  ids::{CaseIdGenerator, SequentialIds},
  lifecycle,
  session::{Credentials, Session},
  store::CaseStore,
};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> Error {
  Error::Store(Box::new(e))
}

fn rejected(e: ValidationError) -> Error {
  debug!(error = %e, "rejected case input");
  Error::Validation(e)
}

pub struct Docket<S, I = DemoIdentity> {
  store:    S,
  identity: I,
  ids:      Box<dyn CaseIdGenerator>,
  clock:    Box<dyn Clock>,
}

impl<S: CaseStore> Docket<S, DemoIdentity> {
  /// A docket using the demo login rule and sequential ids.
  pub fn new(store: S) -> Self {
    Self::with_parts(store, DemoIdentity, Box::new(SequentialIds::new()))
  }
}

impl<S: CaseStore, I: IdentityResolver> Docket<S, I> {
  pub fn with_parts(
    store: S,
    identity: I,
    ids: Box<dyn CaseIdGenerator>,
  ) -> Self {
    Self { store, identity, ids, clock: Box::new(SystemClock) }
  }

  /// Replace the clock used to date registrations and update entries.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Box::new(clock);
    self
  }

  pub fn store(&self) -> &S { &self.store }

  // ── Sessions ──────────────────────────────────────────────────────────

  /// Resolve credentials into a session.
  pub async fn login(&self, creds: &Credentials) -> Result<Session> {
    let cases = self.store.all().await.map_err(store_err)?;
    match self.identity.resolve(creds, &cases) {
      Ok(session) => {
        info!(role = %session.role, name = %session.name, "login");
        Ok(session)
      }
      Err(e) => {
        debug!(error = %e, username = %creds.username.trim(), "login rejected");
        Err(e.into())
      }
    }
  }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and store a new case.
  pub async fn register_case(&self, input: NewCase) -> Result<CaseRecord> {
    let record = lifecycle::register(input, self.clock.today(), self.ids.as_ref())
      .map_err(rejected)?;
    self.store.append(record.clone()).await.map_err(store_err)?;
    info!(case_id = %record.id, client = %record.client, "case registered");
    Ok(record)
  }

  pub async fn schedule_hearing(
    &self,
    req: &HearingRequest,
    actor: &str,
  ) -> Result<CaseRecord> {
    let (id, mutation) =
      lifecycle::schedule_hearing(req, actor, self.clock.today()).map_err(rejected)?;
    self.apply(id, mutation).await
  }

  pub async fn update_status(
    &self,
    req: &StatusUpdate,
    actor: &str,
  ) -> Result<CaseRecord> {
    let (id, mutation) =
      lifecycle::update_status(req, actor, self.clock.today()).map_err(rejected)?;
    self.apply(id, mutation).await
  }

  pub async fn assign_personnel(
    &self,
    req: &Assignment,
    actor: &str,
  ) -> Result<CaseRecord> {
    let (id, mutation) =
      lifecycle::assign_personnel(req, actor, self.clock.today()).map_err(rejected)?;
    self.apply(id, mutation).await
  }

  async fn apply(&self, id: CaseId, mutation: CaseMutation) -> Result<CaseRecord> {
    let label = mutation.entry.status.clone();
    let by = mutation.entry.by.clone();
    let updated = self
      .store
      .apply(&id, mutation)
      .await
      .map_err(store_err)?
      .ok_or_else(|| {
        debug!(case_id = %id, "case not found");
        Error::NotFound(id.clone())
      })?;
    info!(case_id = %id, status = %updated.status, by = %by, "{label}");
    Ok(updated)
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Look a case up by id. An unknown id is an ordinary `None`.
  pub async fn lookup_case(&self, id: &str) -> Result<Option<CaseSnapshot>> {
    let id = CaseId::from(id.trim());
    let found = self.store.get(&id).await.map_err(store_err)?;
    Ok(found.map(CaseSnapshot::from))
  }

  /// The full record for `id`, personal data included. Callers gate this
  /// to staff; the public view is [`Docket::lookup_case`].
  pub async fn case_details(&self, id: &str) -> Result<CaseRecord> {
    let id = CaseId::from(id.trim());
    let found = self.store.get(&id).await.map_err(store_err)?;
    found.ok_or(Error::NotFound(id))
  }

  /// The cases `session` is allowed to list.
  pub async fn cases_for(&self, session: &Session) -> Result<Vec<CaseRecord>> {
    let cases = self.store.all().await.map_err(store_err)?;
    Ok(lifecycle::visible_cases(session, cases))
  }
}
