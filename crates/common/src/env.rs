//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{debug, warn};

/// Ensure the data directory exists and is writable.
///
/// Collections are bootstrapped lazily by the store, so an empty directory is
/// fine; a read-only one is not, since every first access writes defaults.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    let meta = tokio::fs::metadata(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot stat {data_dir}: {e}"))?;
    if meta.permissions().readonly() {
        warn!(%data_dir, "data directory is read-only; every write will fail");
    }
    debug!(%data_dir, "data directory ready");
    Ok(())
}
