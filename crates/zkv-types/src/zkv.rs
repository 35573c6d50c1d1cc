// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex-encoded artifacts in the shape the zkVerify Groth16 pallet accepts.

use serde::{Deserialize, Serialize};

use crate::CurveId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkvProof {
    pub a: String,
    pub b: String,
    pub c: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZkvVerificationKey {
    pub curve: CurveId,
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    pub gamma_abc_g1: Vec<String>,
}

pub type ZkvPublicInputs = Vec<String>;
