// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use zkv_types::ZkvProof;

use super::read_input;
use crate::config::Settings;
use crate::output;

pub fn convert(settings: &Settings, input: &Path) -> Result<ZkvProof> {
    let converter = settings.converter()?;
    let json = read_input(input)?;
    let proof = converter
        .proof_json(&json)
        .with_context(|| format!("cannot convert proof {}", input.display()))?;
    output::label("curve", converter.encoder().curve().as_str());
    Ok(proof)
}

pub fn run(settings: &Settings, input: &Path, out: Option<&Path>) -> Result<()> {
    let proof = convert(settings, input)?;
    output::write_json(&proof, out)
}
