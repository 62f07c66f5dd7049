//! Hash collections used across the workspace.
//!
//! Re-exports the AHash backed maps so every crate hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
