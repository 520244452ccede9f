use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::Path;

use lmkeys::report::{write_json, write_plain};
use lmkeys::{InterruptFlag, LmdbStore, Pager, ViewerConfig};

pub fn exec(
    path: &Path,
    cfg: &ViewerConfig,
    page: u64,
    json: bool,
    interrupt: InterruptFlag,
) -> Result<i32> {
    if page == 0 {
        return Err(anyhow!("--page is 1-based, got 0"));
    }

    let store = LmdbStore::open_ro_with_config(path, cfg)?;
    let name = store.name();
    let mut pager = Pager::new(store, cfg.page_size)?.with_interrupt(interrupt);

    let view = pager.load(page - 1)?.ok_or_else(|| {
        anyhow!(
            "page {} out of range (store has {} page(s))",
            page,
            pager.total_pages()
        )
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &view)?;
    } else {
        write_plain(&mut out, &view, &name)?;
    }
    out.flush()?;
    Ok(0)
}
