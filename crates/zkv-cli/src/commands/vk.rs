// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use zkv_types::ZkvVerificationKey;

use super::read_input;
use crate::config::Settings;
use crate::output;

pub fn convert(settings: &Settings, input: &Path) -> Result<ZkvVerificationKey> {
    let converter = settings.converter()?;
    let json = read_input(input)?;
    let vk = converter
        .vk_json(&json)
        .with_context(|| format!("cannot convert verification key {}", input.display()))?;
    output::label("curve", vk.curve.as_str());
    output::label("public inputs", &vk.gamma_abc_g1.len().saturating_sub(1).to_string());
    Ok(vk)
}

pub fn run(settings: &Settings, input: &Path, out: Option<&Path>) -> Result<()> {
    let vk = convert(settings, input)?;
    output::write_json(&vk, out)
}
