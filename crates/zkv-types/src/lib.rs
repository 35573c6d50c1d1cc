// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod curve;
pub mod field;
pub mod gnark;
pub mod point;
pub mod zkv;

pub use curve::CurveId;
pub use field::{FieldElement, ParseFieldElementError};
pub use gnark::{GnarkProof, GnarkPublicInputs, GnarkVerifyingKey, GnarkVkG1, GnarkVkG2};
pub use point::{Fq2Element, G1Point, G2Point};
pub use zkv::{ZkvProof, ZkvPublicInputs, ZkvVerificationKey};
