//! Shared integration-test harness for running `bookkit` as a child
//! process against a temporary book directory.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Spawn the `bookkit` binary with the given arguments and wait for it.
///
/// # Panics
///
/// Panics if the process cannot be spawned.
pub fn run_bookkit(args: &[&str], cwd: &Path) -> Output {
    let bin = env!("CARGO_BIN_EXE_bookkit");
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn bookkit")
}

/// Write a chapter file, creating parent directories.
///
/// # Panics
///
/// Panics on any I/O failure; these are test fixtures.
pub fn write_chapter(book_dir: &Path, rel_path: &str, content: &str) {
    let path = book_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create chapter directory");
    }
    std::fs::write(path, content).expect("write chapter");
}
