//! pager — turns a page index into a bounded batch of display rows.
//!
//! A page is `(index, size)` over the half-open row range
//! `[index*size, min(index*size + size, total))`. The entry count is taken once
//! when the pager is built; the store is read-only for the session.
//!
//! Every load restarts the scan from the first entry and skips to the page
//! start, so nothing about the cursor position is kept between loads.

use anyhow::{anyhow, Result};
use log::debug;
use serde::Serialize;

use crate::classify::{classify_key, describe_value};
use crate::interrupt::{InterruptFlag, Interrupted};
use crate::store::KvSource;

/// One displayed entry. `ordinal` is the 1-based position in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "index")]
    pub ordinal: u64,
    pub key: String,
    pub value_type: String,
}

/// Pagination counters for display. `current_page` and `start` are 1-based,
/// `end` is the 1-based ordinal of the last row (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub current_page: u64,
    pub total_pages: u64,
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub summary: PageSummary,
    pub rows: Vec<Row>,
}

/// Zero-based half-open row range of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start: u64,
    pub end: u64,
}

impl PageBounds {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// `ceil(total / page_size)`; 0 for an empty store.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Bounds of `page`, or None if the page lies past the last one.
/// An empty store has exactly one valid (empty) page: index 0.
pub fn page_bounds(total: u64, page_size: u64, page: u64) -> Option<PageBounds> {
    if page_size == 0 {
        return None;
    }
    let pages = total_pages(total, page_size);
    if pages == 0 {
        return (page == 0).then_some(PageBounds { start: 0, end: 0 });
    }
    if page >= pages {
        return None;
    }
    let start = page * page_size;
    let end = start.saturating_add(page_size).min(total);
    Some(PageBounds { start, end })
}

pub struct Pager<S: KvSource> {
    source: S,
    page_size: u64,
    current_page: u64,
    total: u64,
    interrupt: Option<InterruptFlag>,
}

impl<S: KvSource> Pager<S> {
    pub fn new(source: S, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(anyhow!("page size must be a positive integer, got 0"));
        }
        let total = source.count_entries()?;
        debug!("pager: {} entries, {} rows per page", total, page_size);
        Ok(Self {
            source,
            page_size: page_size as u64,
            current_page: 0,
            total,
            interrupt: None,
        })
    }

    /// Stop page loads with `Interrupted` once `flag` is raised.
    pub fn with_interrupt(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// True once the attached interrupt flag has been raised.
    pub fn interrupted(&self) -> bool {
        self.interrupt.as_ref().is_some_and(|f| f.is_raised())
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Zero-based index of the page last loaded.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.page_size)
    }

    /// Load `page` (zero-based). Out-of-range requests return `Ok(None)` and
    /// leave the current page untouched.
    pub fn load(&mut self, page: u64) -> Result<Option<PageView>> {
        let Some(bounds) = page_bounds(self.total, self.page_size, page) else {
            debug!(
                "pager: page {} rejected ({} pages total)",
                page,
                self.total_pages()
            );
            return Ok(None);
        };
        if let Some(flag) = &self.interrupt {
            flag.check()?;
        }

        let interrupt = self.interrupt.as_ref();
        let mut interrupted = false;
        let mut rows = Vec::with_capacity(bounds.len() as usize);
        let mut pos: u64 = 0;
        if !bounds.is_empty() {
            self.source.scan_stream(&mut |k, v| {
                if interrupt.is_some_and(|f| f.is_raised()) {
                    interrupted = true;
                    return false;
                }
                if pos >= bounds.start {
                    rows.push(Row {
                        ordinal: pos + 1,
                        key: classify_key(k),
                        value_type: describe_value(Some(v)),
                    });
                }
                pos += 1;
                pos < bounds.end
            })?;
        }
        if interrupted {
            debug!("pager: page {} interrupted at entry {}", page, pos);
            return Err(Interrupted.into());
        }
        self.current_page = page;

        if (rows.len() as u64) < bounds.len() {
            debug!(
                "pager: page {} short by {} row(s), store ended early",
                page,
                bounds.len() - rows.len() as u64
            );
        }

        Ok(Some(PageView {
            summary: PageSummary {
                current_page: page + 1,
                total_pages: self.total_pages(),
                start: bounds.start + 1,
                end: bounds.end,
                total: self.total,
            },
            rows,
        }))
    }

    /// Reload the current page.
    pub fn reload(&mut self) -> Result<Option<PageView>> {
        self.load(self.current_page)
    }

    /// Next page; `Ok(None)` on the last page.
    pub fn next(&mut self) -> Result<Option<PageView>> {
        if self.current_page + 1 >= self.total_pages() {
            return Ok(None);
        }
        self.load(self.current_page + 1)
    }

    /// Previous page; `Ok(None)` on the first page.
    pub fn prev(&mut self) -> Result<Option<PageView>> {
        match self.current_page.checked_sub(1) {
            Some(p) => self.load(p),
            None => Ok(None),
        }
    }
}
