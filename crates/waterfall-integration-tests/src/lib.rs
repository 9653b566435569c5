//! Integration test crate for the Waterfall revenue-split core.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise the full configure → validate → compute → ledger flow
//! across the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p waterfall-integration-tests
//! ```
