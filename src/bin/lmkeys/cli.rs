use clap::Parser;
use std::path::PathBuf;

/// Browse LMDB keys with a TUI interface
#[derive(Parser, Debug)]
#[command(name = "lmkeys", version, about = "Browse LMDB keys with a TUI interface")]
pub struct Cli {
    /// Path to the LMDB directory
    pub db_path: PathBuf,

    /// Number of keys to display per page (default: 30, or LMKEYS_PAGE_SIZE)
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Print one page to stdout instead of opening the interactive screen
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Page to print (1-based, with --print)
    #[arg(long, requires = "print", default_value_t = 1)]
    pub page: u64,

    /// JSON output (single object, with --print)
    #[arg(long, requires = "print", default_value_t = false)]
    pub json: bool,
}
