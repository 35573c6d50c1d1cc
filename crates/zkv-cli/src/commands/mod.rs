// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod curves;
pub mod proof;
pub mod pubs;
pub mod vk;
pub mod witness;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
