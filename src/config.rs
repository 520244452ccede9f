//! Centralized configuration for the viewer.
//!
//! - `ViewerConfig::from_env()` reads `LMKEYS_*` variables on top of defaults.
//! - `with_*` setters let the CLI override single fields (flags win over env).
//! - `validate()` rejects values that would break paging (page_size == 0).
//!
//! Env:
//! - LMKEYS_PAGE_SIZE — rows per page (default 30)
//! - LMKEYS_MAP_SIZE  — LMDB map size hint in bytes (default: engine default)
//! - LMKEYS_LOG_FILE  — write log output to this file instead of stderr

use anyhow::{anyhow, Result};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Rows per page. Env: LMKEYS_PAGE_SIZE (default 30)
    pub page_size: usize,

    /// Optional LMDB map size. When opening an existing environment read-only
    /// LMDB grows the map to the size recorded in the file, so this only
    /// matters for unusual layouts.
    /// Env: LMKEYS_MAP_SIZE
    pub map_size: Option<usize>,

    /// Optional log file. Env: LMKEYS_LOG_FILE
    pub log_file: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            map_size: None,
            log_file: None,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from environment variables.
    /// Unparsable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("LMKEYS_PAGE_SIZE") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.page_size = n;
            }
        }

        if let Ok(v) = std::env::var("LMKEYS_MAP_SIZE") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.map_size = Some(n);
            }
        }

        if let Ok(v) = std::env::var("LMKEYS_LOG_FILE") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.log_file = Some(PathBuf::from(s));
            }
        }

        cfg
    }

    pub fn with_page_size(mut self, rows: usize) -> Self {
        self.page_size = rows;
        self
    }

    pub fn with_map_size(mut self, bytes: Option<usize>) -> Self {
        self.map_size = bytes;
        self
    }

    pub fn with_log_file<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.log_file = path.map(Into::into);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow!("page size must be a positive integer, got 0"));
        }
        if self.map_size == Some(0) {
            return Err(anyhow!("map size must be a positive number of bytes"));
        }
        Ok(())
    }
}

impl fmt::Display for ViewerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ViewerConfig {{ page_size: {}, map_size: {}, log_file: {} }}",
            self.page_size,
            self.map_size
                .map(|v| v.to_string())
                .unwrap_or_else(|| "default(engine)".to_string()),
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stderr".to_string()),
        )
    }
}
