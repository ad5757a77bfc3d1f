//! In-memory backend for the Docket case store.
//!
//! Cases live in a `Vec` behind a single [`tokio::sync::RwLock`]; nothing
//! survives a restart.

mod store;

pub use store::MemoryStore;
