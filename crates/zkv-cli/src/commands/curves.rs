// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};
use zkv_convert::CURVES;

use crate::output;

pub fn list() -> Value {
    Value::Array(
        CURVES
            .iter()
            .map(|p| {
                json!({
                    "curve": p.id,
                    "aliases": p.aliases,
                    "baseFieldBytes": p.base_field_bytes,
                    "scalarFieldBytes": p.scalar_field_bytes,
                    "pointEndianness": p.point_endianness.as_str(),
                })
            })
            .collect(),
    )
}

pub fn run(out: Option<&Path>) -> Result<()> {
    output::write_json(&list(), out)
}
