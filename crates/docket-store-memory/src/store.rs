//! [`MemoryStore`] — the in-memory implementation of [`CaseStore`].

use std::{convert::Infallible, sync::Arc};

use tokio::sync::RwLock;

use docket_core::{
  case::{CaseId, CaseMutation, CaseRecord},
  seed::sample_cases,
  store::CaseStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An ordered, process-lifetime collection of cases.
///
/// Cloning is cheap — the inner collection is reference-counted, so clones
/// share the same cases.
#[derive(Clone, Default)]
pub struct MemoryStore {
  cases: Arc<RwLock<Vec<CaseRecord>>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store holding the demonstration cases.
  pub fn seeded() -> Self { Self::with_cases(sample_cases()) }

  pub fn with_cases(cases: Vec<CaseRecord>) -> Self {
    Self { cases: Arc::new(RwLock::new(cases)) }
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for MemoryStore {
  type Error = Infallible;

  async fn get(&self, id: &CaseId) -> Result<Option<CaseRecord>, Infallible> {
    let cases = self.cases.read().await;
    Ok(cases.iter().find(|c| &c.id == id).cloned())
  }

  async fn append(&self, record: CaseRecord) -> Result<(), Infallible> {
    self.cases.write().await.push(record);
    Ok(())
  }

  async fn all(&self) -> Result<Vec<CaseRecord>, Infallible> {
    Ok(self.cases.read().await.clone())
  }

  async fn apply(
    &self,
    id: &CaseId,
    mutation: CaseMutation,
  ) -> Result<Option<CaseRecord>, Infallible> {
    // Find and mutate under one write lock so the change and its audit
    // entry land together.
    let mut cases = self.cases.write().await;
    Ok(cases.iter_mut().find(|c| &c.id == id).map(|case| {
      case.apply(mutation);
      case.clone()
    }))
  }

  async fn len(&self) -> Result<usize, Infallible> {
    Ok(self.cases.read().await.len())
  }
}
