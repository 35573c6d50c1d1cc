// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! gnark binary public witness → JSON array of decimal strings, ready for
//! the `pubs` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use zkv_convert::decode_public_witness;
use zkv_types::GnarkPublicInputs;

use crate::config::Settings;
use crate::output;

pub fn convert(settings: &Settings, input: &Path) -> Result<GnarkPublicInputs> {
    let curve = settings.converter()?.encoder().curve();
    let bytes = fs::read(input).with_context(|| format!("cannot read {}", input.display()))?;
    let witness = decode_public_witness(curve, &bytes)
        .with_context(|| format!("cannot decode public witness {}", input.display()))?;
    output::label("public", &witness.nb_public.to_string());
    Ok(witness.values)
}

pub fn run(settings: &Settings, input: &Path, out: Option<&Path>) -> Result<()> {
    let values = convert(settings, input)?;
    output::write_json(&values, out)
}
