//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Extract the on-disk path from a `sqlite:` URL.
///
/// Returns `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the directory that will hold the SQLite database file.
pub async fn ensure_sqlite_parent(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else {
        warn!(%url, "database is not file backed; data will not survive a restart");
        return Ok(());
    };
    let parent = file.parent().unwrap_or_else(|| Path::new("."));
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "database directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_urls() {
        assert_eq!(
            sqlite_file_path("sqlite://data/movers.db?mode=rwc"),
            Some(PathBuf::from("data/movers.db"))
        );
        assert_eq!(sqlite_file_path("sqlite:app.db"), Some(PathBuf::from("app.db")));
    }

    #[test]
    fn memory_and_foreign_urls_have_no_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }
}
