// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Status messages go to stderr; converted artifacts go to stdout or a file.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(enabled: bool) {
    QUIET.store(enabled, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_quiet() {
        eprintln!("{}", msg.green());
    }
}

pub fn warn(msg: &str) {
    if !is_quiet() {
        eprintln!("{}", msg.yellow());
    }
}

pub fn label(key: &str, val: &str) {
    if !is_quiet() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

/// Pretty-prints `value` to `out`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("cannot serialize output")?;
    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("cannot write {}", path.display()))?;
            success(&format!("wrote {}", path.display()));
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
