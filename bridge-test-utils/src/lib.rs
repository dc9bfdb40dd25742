//! Test fixtures shared across the bridge workspace
//!
//! Provides pre-seeded in-memory stores so client and handler tests don't
//! repeat installation/subscription setup.
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod stores;

// Re-export commonly used items
pub use stores::{TEST_CLIENT_KEY, TEST_INSTALLATION_ID, TEST_SHARED_SECRET, seeded_store, store_with_installation};
