// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for conversion and encoding.

use zkv_types::CurveId;

use crate::field::FieldKind;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("curve {0} is not supported")]
    UnsupportedCurve(String),

    #[error("point endianness must be either BE or LE, got {0:?}")]
    UnknownEndianness(String),

    #[error("{value} is not an element of the {curve} {field} field")]
    NotInField {
        value: String,
        curve: CurveId,
        field: FieldKind,
    },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("public witness truncated: {0} bytes, header alone is 12")]
    WitnessTruncated(usize),

    #[error("public witness payload of {len} bytes does not hold {count} elements of {width} bytes")]
    WitnessLength {
        len: usize,
        count: usize,
        width: usize,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
