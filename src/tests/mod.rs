//! Integration testing module
//!
//! End-to-end tests for the fragmenting pipeline:
//! - The canonical cue arrangement scenarios, byte-for-byte
//! - Parser-to-fragmenter pipeline runs with invariant checks

pub mod fragmenter_scenarios;

/// Install a test subscriber so tracing output shows up under `cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
