//! Crash logs for unexpected session failures.
//!
//! Each failure gets its own file, `error_<YYYYmmdd_HHMMSS>.log`, holding the
//! full error chain so the counter staff can send it in. Failures within the
//! same second get `_1`, `_2`, ... suffixes; an existing log is never
//! overwritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Writes `error` to a timestamped file under `dir` and returns its path.
pub fn write(dir: &Path, error: &anyhow::Error, at: DateTime<Local>) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let (path, mut file) = create_unique(dir, &at.format("%Y%m%d_%H%M%S").to_string())?;
    file.write_all(render(error, at).as_bytes())?;
    Ok(path)
}

fn create_unique(dir: &Path, stamp: &str) -> io::Result<(PathBuf, File)> {
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("error_{stamp}.log"),
            n => format!("error_{stamp}_{n}.log"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn render(error: &anyhow::Error, at: DateTime<Local>) -> String {
    let mut text = format!("{}\nERROR CHAIN (outermost first):\n", at.to_rfc3339());
    for (depth, cause) in error.chain().enumerate() {
        text.push_str(&format!("  {depth}: {cause}\n"));
    }
    text
}
