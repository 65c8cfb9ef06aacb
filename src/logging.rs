//! Logging setup.
//!
//! Installs a global `tracing` fmt subscriber. `RUST_LOG` wins over the
//! filter from settings. Subsequent calls are no-ops.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Build the filter from an optional environment value and a fallback.
pub fn build_filter(env: Option<&str>, default_filter: &str) -> Result<EnvFilter> {
    match env.filter(|v| !v.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG filter: {directives}")),
        None => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid log filter: {default_filter}")),
    }
}

/// Initialize tracing once for the process.
pub fn init(default_filter: &str) -> Result<()> {
    INIT.get_or_try_init(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = build_filter(env.as_deref(), default_filter)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
        tracing::debug!("Logging initialized");
        Ok(())
    })
    .map(|_| ())
}
