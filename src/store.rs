//! store — read-only access to an ordered key-value collection.
//!
//! `KvSource` is the seam the pager walks: an entry count plus a forward scan
//! in ascending key order, restarted from the first entry on every call.
//!
//! Implementations:
//! - `LmdbStore`: the unnamed database of an LMDB environment, opened with
//!   READ_ONLY | NO_LOCK (no lock file is written, no exclusive access taken).
//!   The environment is closed when the store is dropped.
//! - `BTreeMap<Vec<u8>, Vec<u8>>`: in-memory source with the same ordering.

use anyhow::{Context, Result};
use heed::types::Bytes;
use heed::{Database, Env, EnvFlags, EnvOpenOptions};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::ViewerConfig;

pub trait KvSource {
    /// Number of entries, fetched once per session by the pager.
    fn count_entries(&self) -> Result<u64>;

    /// Visit entries from the first key onwards in ascending key order.
    /// The scan stops as soon as `visit` returns `false`.
    fn scan_stream(&self, visit: &mut dyn FnMut(&[u8], &[u8]) -> bool) -> Result<()>;
}

impl<S: KvSource + ?Sized> KvSource for &S {
    fn count_entries(&self) -> Result<u64> {
        (**self).count_entries()
    }

    fn scan_stream(&self, visit: &mut dyn FnMut(&[u8], &[u8]) -> bool) -> Result<()> {
        (**self).scan_stream(visit)
    }
}

impl KvSource for BTreeMap<Vec<u8>, Vec<u8>> {
    fn count_entries(&self) -> Result<u64> {
        Ok(self.len() as u64)
    }

    fn scan_stream(&self, visit: &mut dyn FnMut(&[u8], &[u8]) -> bool) -> Result<()> {
        for (k, v) in self {
            if !visit(k, v) {
                break;
            }
        }
        Ok(())
    }
}

pub struct LmdbStore {
    root: PathBuf,
    env: Env,
    // None when the environment has never been written to.
    db: Option<Database<Bytes, Bytes>>,
}

impl LmdbStore {
    pub fn open_ro(root: &Path) -> Result<Self> {
        Self::open_ro_with_config(root, &ViewerConfig::from_env())
    }

    pub fn open_ro_with_config(root: &Path, cfg: &ViewerConfig) -> Result<Self> {
        let mut opts = EnvOpenOptions::new();
        opts.max_dbs(0);
        if let Some(bytes) = cfg.map_size {
            opts.map_size(bytes);
        }

        // SAFETY: the environment is opened read-only and without the lock
        // table; LMDB then only maps the data file for reading.
        let env = unsafe {
            opts.flags(EnvFlags::READ_ONLY | EnvFlags::NO_LOCK);
            opts.open(root)
        }
        .with_context(|| format!("open LMDB environment {}", root.display()))?;

        let rtxn = env
            .read_txn()
            .with_context(|| format!("begin read txn {}", root.display()))?;
        let db = env
            .open_database::<Bytes, Bytes>(&rtxn, None)
            .with_context(|| format!("open main database {}", root.display()))?;
        rtxn.commit().context("commit read txn")?;

        debug!(
            "store: opened {} read-only (main db present: {})",
            root.display(),
            db.is_some()
        );

        Ok(Self {
            root: root.to_path_buf(),
            env,
            db,
        })
    }

    /// Directory name shown in the UI.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

impl KvSource for LmdbStore {
    fn count_entries(&self) -> Result<u64> {
        let Some(db) = self.db else {
            return Ok(0);
        };
        let rtxn = self.env.read_txn().context("begin read txn")?;
        let n = db.len(&rtxn).context("stat main database")?;
        Ok(n)
    }

    fn scan_stream(&self, visit: &mut dyn FnMut(&[u8], &[u8]) -> bool) -> Result<()> {
        let Some(db) = self.db else {
            return Ok(());
        };
        let rtxn = self.env.read_txn().context("begin read txn")?;
        let iter = db.iter(&rtxn).context("open cursor")?;
        for item in iter {
            match item {
                Ok((k, v)) => {
                    if !visit(k, v) {
                        break;
                    }
                }
                Err(e) => {
                    // Treat a failing step like an exhausted cursor.
                    warn!("store: cursor stopped early in {}: {}", self.root.display(), e);
                    break;
                }
            }
        }
        Ok(())
    }
}
