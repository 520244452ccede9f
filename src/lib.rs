// Display helpers and the paging core
pub mod classify;
pub mod pager;

// LMDB access (read-only) and configuration
pub mod config;
pub mod interrupt;
pub mod store;

// Output: interactive screen and one-shot page reports
pub mod report;
pub mod tui;

pub use classify::{classify_key, classify_value, describe_value, ValueKind};
pub use config::ViewerConfig;
pub use interrupt::{is_interrupted, InterruptFlag, Interrupted};
pub use pager::{page_bounds, total_pages, PageBounds, PageSummary, PageView, Pager, Row};
pub use store::{KvSource, LmdbStore};
