//! Integration tests for the tensors crates.
//!
//! - `golden` - fixed inputs with known results
//! - `properties` - algebraic properties checked with proptest
//! - `direct` - buffer views against the math types
//!
//! Set `RUST_LOG=tensors_math=trace` to see inversion and bounds logging
//! while the tests run.

use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod direct;
#[cfg(test)]
mod golden;
#[cfg(test)]
mod properties;

/// Installs a test subscriber that honours `RUST_LOG`.
///
/// Later calls are no-ops, so every test may call it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
