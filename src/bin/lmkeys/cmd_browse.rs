use anyhow::Result;
use log::info;
use std::path::Path;

use lmkeys::tui::{run_browser, Exit};
use lmkeys::{InterruptFlag, LmdbStore, Pager, ViewerConfig};

pub fn exec(path: &Path, cfg: &ViewerConfig, interrupt: InterruptFlag) -> Result<i32> {
    let store = LmdbStore::open_ro_with_config(path, cfg)?;
    let name = store.name();
    let pager = Pager::new(store, cfg.page_size)?.with_interrupt(interrupt);
    info!(
        "browse: {} ({} keys, {} page(s))",
        path.display(),
        pager.total(),
        pager.total_pages()
    );

    // The store is owned by the pager and closed when the browser returns.
    match run_browser(pager, &name)? {
        Exit::Quit => Ok(0),
        Exit::Interrupted => {
            println!("\nExiting...");
            Ok(0)
        }
    }
}
