#![doc(test(attr(deny(warnings))))]

//! Spendbook tracks personal income and expenses, derives summary metrics
//! from the recorded transactions, and renders them through an interactive
//! CLI shell. State lives in memory and is mirrored to a single JSON file.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendbook=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Spendbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
