//! Browser state: the pager, the page on screen and the row highlight.

use anyhow::Result;
use ratatui::widgets::TableState;

use crate::pager::{PageView, Pager};
use crate::store::KvSource;

use super::keys::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    Interrupt,
}

pub struct BrowserState<S: KvSource> {
    pub(crate) pager: Pager<S>,
    pub(crate) db_name: String,
    pub(crate) view: Option<PageView>,
    pub(crate) table: TableState,
}

impl<S: KvSource> BrowserState<S> {
    /// Build the state and load the first page.
    pub fn new(pager: Pager<S>, db_name: impl Into<String>) -> Result<Self> {
        let mut st = Self {
            pager,
            db_name: db_name.into(),
            view: None,
            table: TableState::default(),
        };
        if let Some(v) = st.pager.load(0)? {
            st.show(v);
        }
        Ok(st)
    }

    pub fn pager(&self) -> &Pager<S> {
        &self.pager
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn view(&self) -> Option<&PageView> {
        self.view.as_ref()
    }

    /// Highlighted row within the current page.
    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn apply(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::Interrupt => return Ok(Flow::Interrupt),
            Action::PrevPage => {
                if let Some(v) = self.pager.prev()? {
                    self.show(v);
                }
            }
            Action::NextPage => {
                if let Some(v) = self.pager.next()? {
                    self.show(v);
                }
            }
            Action::RowUp => self.select_by(-1),
            Action::RowDown => self.select_by(1),
            Action::FirstRow => self.select_edge(false),
            Action::LastRow => self.select_edge(true),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, v: PageView) {
        let sel = if v.rows.is_empty() { None } else { Some(0) };
        self.view = Some(v);
        self.table.select(sel);
    }

    fn row_count(&self) -> usize {
        self.view.as_ref().map(|v| v.rows.len()).unwrap_or(0)
    }

    fn select_by(&mut self, delta: isize) {
        let n = self.row_count();
        if n == 0 {
            return;
        }
        let cur = self.table.selected().unwrap_or(0);
        let next = if delta < 0 {
            cur.saturating_sub(delta.unsigned_abs())
        } else {
            (cur + delta as usize).min(n - 1)
        };
        self.table.select(Some(next));
    }

    fn select_edge(&mut self, last: bool) {
        let n = self.row_count();
        if n == 0 {
            return;
        }
        self.table.select(Some(if last { n - 1 } else { 0 }));
    }
}
