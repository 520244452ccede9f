//! interrupt — SIGINT as a normal way to end a session.
//!
//! `InterruptFlag::install()` registers a Ctrl+C handler that only sets a flag.
//! Long work (the pager's scan) polls the flag and unwinds with `Interrupted`,
//! so the LMDB environment and the terminal are released by their `Drop`s
//! before the process exits.

use anyhow::{Context, Result};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Error returned when work stops because of a user interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("interrupted")
    }
}

impl std::error::Error for Interrupted {}

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag and set it from a process-wide Ctrl+C handler.
    pub fn install() -> Result<Self> {
        let flag = Self::new();
        let handle = flag.clone();
        ctrlc::set_handler(move || handle.raise()).context("set Ctrl+C handler")?;
        Ok(flag)
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `Err(Interrupted)` once the flag is raised.
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            return Err(Interrupted.into());
        }
        Ok(())
    }
}

/// True if `err` (or anything it wraps) is an `Interrupted`.
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|e| e.is::<Interrupted>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn check_fails_after_raise() {
        let flag = InterruptFlag::new();
        assert!(flag.check().is_ok());
        flag.clone().raise();
        let err = flag.check().unwrap_err();
        assert!(is_interrupted(&err));
        assert!(is_interrupted(&err.context("load page 3")));
        assert!(!is_interrupted(&anyhow!("open failed")));
    }
}
