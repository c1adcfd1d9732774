//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! nothing reads process-wide environment variables while serving a request.

use crate::constants::KNOWLEDGE_TABLE_PATH;
use crate::{VerveError, VerveResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    knowledge_table: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `VerveError::TableRead` if `knowledge_table` is not an existing file.
    pub fn new(knowledge_table: PathBuf) -> VerveResult<Self> {
        if !knowledge_table.is_file() {
            return Err(table_not_found(knowledge_table));
        }

        Ok(Self { knowledge_table })
    }

    pub fn knowledge_table(&self) -> &Path {
        &self.knowledge_table
    }
}

/// Resolve the knowledge table path without reading environment variables.
///
/// If `override_path` is provided it is returned as-is; `CoreConfig::new` checks it exists.
/// Otherwise this searches for the bundled table relative to the current working directory and
/// then walks up from `CARGO_MANIFEST_DIR`.
pub fn resolve_knowledge_table_path(override_path: Option<PathBuf>) -> VerveResult<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let cwd_relative = PathBuf::from(KNOWLEDGE_TABLE_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(KNOWLEDGE_TABLE_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(table_not_found(cwd_relative))
}

fn table_not_found(path: PathBuf) -> VerveError {
    VerveError::TableRead {
        path,
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "knowledge table not found; set VERVE_KNOWLEDGE_TABLE",
        ),
    }
}
