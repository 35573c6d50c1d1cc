// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! gnark artifacts → zkVerify artifacts.
//!
//! | gnark | zkVerify |
//! |---|---|
//! | `Ar`, `Bs`, `Krs` | `a` (G1), `b` (G2), `c` (G1) |
//! | `G1.Alpha` | `alphaG1` |
//! | `G2.Beta`, `G2.Gamma`, `G2.Delta` | `betaG2`, `gammaG2`, `deltaG2` |
//! | `G1.K[..]` | `gammaAbcG1[..]` |
//! | public witness | little-endian scalars |

use tracing::debug;
use zkv_types::{
    FieldElement, GnarkProof, GnarkPublicInputs, GnarkVerifyingKey, ZkvProof, ZkvPublicInputs,
    ZkvVerificationKey,
};

use crate::curve::Endianness;
use crate::encode::PointEncoder;
use crate::error::ConvertResult;

#[derive(Clone, Copy, Debug)]
pub struct Converter {
    encoder: PointEncoder,
}

impl Converter {
    /// Fails with `UnsupportedCurve` before any input is looked at.
    pub fn new(curve_name: &str) -> ConvertResult<Self> {
        PointEncoder::for_name(curve_name).map(Self::from_encoder)
    }

    pub fn from_encoder(encoder: PointEncoder) -> Self {
        Self { encoder }
    }

    pub fn with_endianness(self, endianness: Endianness) -> Self {
        Self::from_encoder(self.encoder.with_endianness(endianness))
    }

    pub fn encoder(&self) -> &PointEncoder {
        &self.encoder
    }

    pub fn proof(&self, proof: &GnarkProof) -> ConvertResult<ZkvProof> {
        debug!(curve = %self.encoder.curve(), "converting proof");
        Ok(ZkvProof {
            a: self.encoder.g1(&proof.ar)?,
            b: self.encoder.g2(&proof.bs)?,
            c: self.encoder.g1(&proof.krs)?,
        })
    }

    pub fn vk(&self, vk: &GnarkVerifyingKey) -> ConvertResult<ZkvVerificationKey> {
        debug!(curve = %self.encoder.curve(), ic = vk.g1.k.len(), "converting verification key");
        Ok(ZkvVerificationKey {
            curve: self.encoder.curve(),
            alpha_g1: self.encoder.g1(&vk.g1.alpha)?,
            beta_g2: self.encoder.g2(&vk.g2.beta)?,
            gamma_g2: self.encoder.g2(&vk.g2.gamma)?,
            delta_g2: self.encoder.g2(&vk.g2.delta)?,
            gamma_abc_g1: vk
                .g1
                .k
                .iter()
                .map(|p| self.encoder.g1(p))
                .collect::<ConvertResult<_>>()?,
        })
    }

    pub fn public_inputs(&self, inputs: &[FieldElement]) -> ConvertResult<ZkvPublicInputs> {
        debug!(curve = %self.encoder.curve(), count = inputs.len(), "converting public inputs");
        inputs.iter().map(|s| self.encoder.scalar(s)).collect()
    }

    pub fn proof_json(&self, json: &str) -> ConvertResult<ZkvProof> {
        let proof: GnarkProof = serde_json::from_str(json)?;
        self.proof(&proof)
    }

    pub fn vk_json(&self, json: &str) -> ConvertResult<ZkvVerificationKey> {
        let vk: GnarkVerifyingKey = serde_json::from_str(json)?;
        self.vk(&vk)
    }

    pub fn public_inputs_json(&self, json: &str) -> ConvertResult<ZkvPublicInputs> {
        let inputs: GnarkPublicInputs = serde_json::from_str(json)?;
        self.public_inputs(&inputs)
    }
}

pub fn convert_proof(proof: &GnarkProof, curve_name: &str) -> ConvertResult<ZkvProof> {
    Converter::new(curve_name)?.proof(proof)
}

pub fn convert_vk(vk: &GnarkVerifyingKey, curve_name: &str) -> ConvertResult<ZkvVerificationKey> {
    Converter::new(curve_name)?.vk(vk)
}

pub fn convert_pub(inputs: &[FieldElement], curve_name: &str) -> ConvertResult<ZkvPublicInputs> {
    Converter::new(curve_name)?.public_inputs(inputs)
}
