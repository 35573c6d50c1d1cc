// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 artifacts as serialized by gnark's `json.Marshal`.
//!
//! Only the fields the zkVerify format needs are modelled; anything else
//! gnark writes (Pedersen commitments, `G1.Beta`, `G1.Delta`, …) is skipped.

use serde::{Deserialize, Serialize};

use crate::{FieldElement, G1Point, G2Point};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnarkProof {
    #[serde(rename = "Ar")]
    pub ar: G1Point,
    #[serde(rename = "Bs")]
    pub bs: G2Point,
    #[serde(rename = "Krs")]
    pub krs: G1Point,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnarkVkG1 {
    #[serde(rename = "Alpha")]
    pub alpha: G1Point,
    /// `K[0]` is the constant term, `K[1..]` one per public input.
    #[serde(rename = "K")]
    pub k: Vec<G1Point>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnarkVkG2 {
    #[serde(rename = "Beta")]
    pub beta: G2Point,
    #[serde(rename = "Gamma")]
    pub gamma: G2Point,
    #[serde(rename = "Delta")]
    pub delta: G2Point,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnarkVerifyingKey {
    #[serde(rename = "G1")]
    pub g1: GnarkVkG1,
    #[serde(rename = "G2")]
    pub g2: GnarkVkG2,
}

/// Public witness as a JSON array of scalars.
pub type GnarkPublicInputs = Vec<FieldElement>;
