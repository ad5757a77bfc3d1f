//! Case identifier generation.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::case::CaseId;

/// Produces identifiers for newly registered cases. Implementations must
/// never hand out the same id twice for the lifetime of a store.
pub trait CaseIdGenerator: Send + Sync {
  fn next_id(&self, year: i32) -> CaseId;
}

/// Monotonic counter formatted as `C<year><NNNN>`.
///
/// The counter is shared across years, so ids stay unique even when the
/// year rolls over while the process is running.
#[derive(Debug)]
pub struct SequentialIds {
  next: AtomicU32,
}

impl SequentialIds {
  pub fn new() -> Self { Self::starting_at(1) }

  pub fn starting_at(first: u32) -> Self {
    Self { next: AtomicU32::new(first) }
  }
}

impl Default for SequentialIds {
  fn default() -> Self { Self::new() }
}

impl CaseIdGenerator for SequentialIds {
  fn next_id(&self, year: i32) -> CaseId {
    let n = self.next.fetch_add(1, Ordering::Relaxed);
    CaseId::new(format!("C{year}{n:04}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_zero_padded_and_increasing() {
    let ids = SequentialIds::new();
    assert_eq!(ids.next_id(2024).as_str(), "C20240001");
    assert_eq!(ids.next_id(2024).as_str(), "C20240002");
    assert_eq!(ids.next_id(2025).as_str(), "C20250003");
  }

  #[test]
  fn ids_never_collide_with_seed_format() {
    let ids = SequentialIds::starting_at(1);
    let id = ids.next_id(2023);
    assert_ne!(id.as_str(), "C2023001");
    assert_eq!(id.as_str().len(), 9);
  }
}
