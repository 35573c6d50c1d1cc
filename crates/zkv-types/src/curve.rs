// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use core::fmt;

use serde::{Deserialize, Serialize};

/// Pairing curves understood by the zkVerify Groth16 verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    Bn254,
    #[serde(rename = "Bls12_381")]
    Bls12381,
}

impl CurveId {
    pub const ALL: [CurveId; 2] = [CurveId::Bn254, CurveId::Bls12381];

    /// Name used in the `curve` field of a converted verification key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveId::Bn254 => "Bn254",
            CurveId::Bls12381 => "Bls12_381",
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
