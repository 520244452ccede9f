// tests/cli_integration.rs
//
// The lmkeys binary: path validation, page size validation, --version and
// the non-interactive --print/--json output, and Ctrl+C during a long --print.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use heed::types::Bytes;
use heed::{Database, EnvOpenOptions, PutFlags};
use serde_json::Value;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("lmkeys-cli-{prefix}-{pid}-{t}-{id}"))
}

fn cmd() -> Command {
    let mut c = Command::new(env!("CARGO_BIN_EXE_lmkeys"));
    c.env_remove("LMKEYS_PAGE_SIZE")
        .env_remove("LMKEYS_MAP_SIZE")
        .env_remove("LMKEYS_LOG_FILE")
        .env_remove("RUST_LOG");
    c
}

fn write_env(root: &Path, n: usize) -> Result<()> {
    fs::create_dir_all(root)?;
    let env = unsafe {
        EnvOpenOptions::new()
            .map_size(16 * 1024 * 1024)
            .open(root)?
    };
    let mut wtxn = env.write_txn()?;
    let db: Database<Bytes, Bytes> = env.create_database(&mut wtxn, None)?;
    for i in 0..n {
        let k = format!("item:{:03}", i);
        db.put(&mut wtxn, k.as_bytes(), &(i as u32).to_le_bytes())?;
    }
    wtxn.commit()?;
    env.prepare_for_closing().wait();
    Ok(())
}

// Large enough that skipping to the last page takes a while.
fn write_large_env(root: &Path, n: usize) -> Result<()> {
    fs::create_dir_all(root)?;
    let env = unsafe {
        EnvOpenOptions::new()
            .map_size(1024 * 1024 * 1024)
            .open(root)?
    };
    let mut wtxn = env.write_txn()?;
    let db: Database<Bytes, Bytes> = env.create_database(&mut wtxn, None)?;
    for i in 0..n {
        let k = format!("k{:08}", i);
        db.put_with_flags(&mut wtxn, PutFlags::APPEND, k.as_bytes(), &(i as u32).to_le_bytes())?;
    }
    wtxn.commit()?;
    env.prepare_for_closing().wait();
    Ok(())
}

#[test]
fn missing_path_exits_1() {
    let root = unique_root("missing");
    let out = cmd().arg(&root).output().expect("run");
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("does not exist"), "stderr: {err}");
}

#[test]
fn file_path_exits_1() -> Result<()> {
    let root = unique_root("file");
    fs::create_dir_all(&root)?;
    let file = root.join("data.mdb");
    fs::write(&file, b"not a directory")?;

    let out = cmd().arg(&file).output()?;
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("is not a directory"), "stderr: {err}");
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[test]
fn version_exits_0() -> Result<()> {
    let out = cmd().arg("--version").output()?;
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.starts_with("lmkeys "), "stdout: {text}");
    Ok(())
}

#[test]
fn non_positive_page_size_is_rejected() -> Result<()> {
    let root = unique_root("pagesize");
    write_env(&root, 3)?;
    for bad in ["0", "-5"] {
        let out = cmd()
            .arg(&root)
            .args(["--page-size", bad, "--print"])
            .output()?;
        assert_eq!(out.status.code(), Some(1), "page size {bad}");
        let err = String::from_utf8_lossy(&out.stderr);
        assert!(err.contains("page size"), "stderr: {err}");
    }
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[test]
fn print_json_page() -> Result<()> {
    let root = unique_root("json");
    write_env(&root, 65)?;

    let out = cmd()
        .arg(&root)
        .args(["--print", "--json", "--page", "3"])
        .output()?;
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let v: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(v["summary"]["current_page"], 3);
    assert_eq!(v["summary"]["total_pages"], 3);
    assert_eq!(v["summary"]["start"], 61);
    assert_eq!(v["summary"]["end"], 65);
    let rows = v["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["index"], 61);
    assert_eq!(rows[0]["key"], "item:060");
    assert_eq!(rows[0]["value_type"], "int/bytes (4 bytes)");
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[test]
fn print_plain_and_out_of_range() -> Result<()> {
    let root = unique_root("plain");
    write_env(&root, 12)?;

    let out = cmd()
        .arg(&root)
        .args(["--page-size", "5", "--print", "--page", "2"])
        .output()?;
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.starts_with("Page 2/3 | Showing 6-10 of 12 keys"), "stdout: {text}");
    assert!(text.contains("item:005"));
    assert!(!text.contains("item:010"));

    let out = cmd()
        .arg(&root)
        .args(["--page-size", "5", "--print", "--page", "4"])
        .output()?;
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("out of range"), "stderr: {err}");
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[test]
fn print_on_non_lmdb_directory_fails() -> Result<()> {
    let root = unique_root("notlmdb");
    fs::create_dir_all(&root)?;
    let out = cmd().arg(&root).arg("--print").output()?;
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.starts_with("Error: "), "stderr: {err}");
    fs::remove_dir_all(&root)?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn sigint_during_print_exits_0() -> Result<()> {
    let root = unique_root("sigint");
    let n = 3_000_000;
    write_large_env(&root, n)?;

    let mut child = cmd()
        .arg(&root)
        .args(["--page-size", "1", "--print", "--page", &n.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    std::thread::sleep(Duration::from_millis(150));
    if child.try_wait()?.is_none() {
        let status = Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()?;
        assert!(status.success(), "kill -INT failed");
    }

    let out = child.wait_with_output()?;
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(0), "stdout: {stdout} stderr: {stderr}");
    // either the scan was cut short or it finished before the signal landed
    assert!(
        stdout.contains("Exiting...") || stdout.starts_with("Page "),
        "stdout: {stdout}"
    );
    fs::remove_dir_all(&root)?;
    Ok(())
}
