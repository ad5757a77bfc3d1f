//! The `CaseStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `docket-store-memory`).
//! [`crate::service::Docket`] and the HTTP layer depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::case::{CaseId, CaseMutation, CaseRecord};

/// Abstraction over an ordered collection of cases.
///
/// Cases are never deleted. The only way to change a stored case is
/// [`CaseStore::apply`], which appends exactly one audit entry.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CaseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Find a case by exact id. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    id: &'a CaseId,
  ) -> impl Future<Output = Result<Option<CaseRecord>, Self::Error>> + Send + 'a;

  /// Add a case to the end of the collection.
  ///
  /// No duplicate-id check is made; callers obtain unique ids from a
  /// [`CaseIdGenerator`](crate::ids::CaseIdGenerator).
  fn append(
    &self,
    record: CaseRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All cases in insertion order.
  fn all(
    &self,
  ) -> impl Future<Output = Result<Vec<CaseRecord>, Self::Error>> + Send + '_;

  /// Atomically look up `id` and apply `mutation` to it, returning the
  /// updated case. Returns `None`, leaving the store untouched, if the id is
  /// unknown.
  fn apply<'a>(
    &'a self,
    id: &'a CaseId,
    mutation: CaseMutation,
  ) -> impl Future<Output = Result<Option<CaseRecord>, Self::Error>> + Send + 'a;

  /// Number of stored cases.
  fn len(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
