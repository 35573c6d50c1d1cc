// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use zkv_types::ZkvPublicInputs;

use super::read_input;
use crate::config::Settings;
use crate::output;

pub fn convert(settings: &Settings, input: &Path) -> Result<ZkvPublicInputs> {
    let converter = settings.converter()?;
    let json = read_input(input)?;
    let inputs = converter
        .public_inputs_json(&json)
        .with_context(|| format!("cannot convert public inputs {}", input.display()))?;
    if inputs.is_empty() {
        output::warn("no public inputs");
    }
    Ok(inputs)
}

pub fn run(settings: &Settings, input: &Path, out: Option<&Path>) -> Result<()> {
    let inputs = convert(settings, input)?;
    output::write_json(&inputs, out)
}
