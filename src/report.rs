//! report — text forms of a loaded page.
//!
//! Used by the interactive screen (info line) and by `lmkeys --print`
//! (plain table or a single JSON object).

use anyhow::{Context, Result};
use std::io::Write;

use crate::pager::{PageSummary, PageView};

/// `Page X/Y | Showing A-B of N keys | DB: name`, or `No keys | DB: name`.
pub fn info_line(summary: &PageSummary, db_name: &str) -> String {
    if summary.total == 0 {
        return format!("No keys | DB: {}", db_name);
    }
    format!(
        "Page {}/{} | Showing {}-{} of {} keys | DB: {}",
        summary.current_page, summary.total_pages, summary.start, summary.end, summary.total, db_name
    )
}

pub fn write_plain<W: Write>(out: &mut W, view: &PageView, db_name: &str) -> Result<()> {
    writeln!(out, "{}", info_line(&view.summary, db_name))?;
    if view.rows.is_empty() {
        writeln!(out, "(no items)")?;
        return Ok(());
    }

    let idx_w = view
        .rows
        .iter()
        .map(|r| r.ordinal.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Index".len());
    let key_w = view
        .rows
        .iter()
        .map(|r| r.key.chars().count())
        .max()
        .unwrap_or(0)
        .max("Key".len());

    writeln!(out, "{:>idx_w$}  {:<key_w$}  Value Type", "Index", "Key")?;
    for r in &view.rows {
        writeln!(out, "{:>idx_w$}  {:<key_w$}  {}", r.ordinal, r.key, r.value_type)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, view: &PageView) -> Result<()> {
    serde_json::to_writer(&mut *out, view).context("serialize page to JSON")?;
    writeln!(out)?;
    Ok(())
}
