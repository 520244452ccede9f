use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

use lmkeys::{is_interrupted, InterruptFlag, ViewerConfig};

mod cli;
mod cmd_browse;
mod cmd_print;

fn main() {
    let cli = cli::Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) if is_interrupted(&e) => {
            println!("\nExiting...");
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: cli::Cli) -> Result<i32> {
    // Ctrl+C only raises the flag; page loads notice it and unwind.
    let interrupt = InterruptFlag::install()?;

    // Path checks come before any store access.
    validate_db_path(&cli.db_path)?;

    let mut cfg = ViewerConfig::from_env();
    if let Some(n) = cli.page_size {
        if n <= 0 {
            bail!("page size must be a positive integer, got {}", n);
        }
        cfg = cfg.with_page_size(n as usize);
    }
    cfg.validate()?;

    init_logger(&cfg, !cli.print)?;
    log::debug!("{}", cfg);

    if cli.print {
        cmd_print::exec(&cli.db_path, &cfg, cli.page, cli.json, interrupt)
    } else {
        cmd_browse::exec(&cli.db_path, &cfg, interrupt)
    }
}

fn validate_db_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("Path '{}' does not exist", path.display()));
    }
    if !path.is_dir() {
        return Err(anyhow!("Path '{}' is not a directory", path.display()));
    }
    Ok(())
}

fn init_logger(cfg: &ViewerConfig, interactive: bool) -> Result<()> {
    // RUST_LOG wins. Otherwise the interactive screen stays quiet unless
    // logs go to a file, since stderr shares the terminal with the UI.
    let default_level = match (&cfg.log_file, interactive) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format_timestamp_millis();

    if let Some(path) = &cfg.log_file {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(f)));
    }

    builder.init();
    Ok(())
}
