// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkv-convert
//!
//! Converts gnark Groth16 artifacts (proof, verification key, public
//! inputs) into the fixed-width hex encoding read by the zkVerify verifier,
//! for BN254 and BLS12-381.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`curve`] | Curve parameter table, name resolution, [`Endianness`] |
//! | [`field`] | Range checks and canonical bytes via arkworks |
//! | [`encode`] | [`PointEncoder`]: G1/G2 points and scalars → hex |
//! | [`decode`] | Hex → coordinates, the inverse of [`encode`] |
//! | [`convert`] | Whole-artifact conversion ([`Converter`]) |
//! | [`witness`] | gnark binary public witness → scalars |
//!
//! ## Example
//!
//! ```rust
//! use zkv_convert::{convert_pub, encode_g1};
//! use zkv_types::{CurveId, FieldElement, G1Point};
//!
//! # fn example() -> zkv_convert::ConvertResult<()> {
//! let hex = encode_g1(CurveId::Bn254, &G1Point::new(1, 2))?;
//! assert!(hex.starts_with("0x01"));
//!
//! let pubs = convert_pub(&[FieldElement::from(10)], "bn128")?;
//! assert_eq!(pubs[0].len(), 2 + 64);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod convert;
pub mod curve;
pub mod decode;
pub mod encode;
pub mod error;
pub mod field;
pub mod witness;

pub use convert::{convert_proof, convert_pub, convert_vk, Converter};
pub use curve::{params, resolve_curve, CurveParams, Endianness, CURVES};
pub use decode::{decode_g1, decode_g2, decode_scalar};
pub use encode::{encode_g1, encode_g2, encode_scalar, to_hex, PointEncoder};
pub use error::{ConvertError, ConvertResult};
pub use witness::{decode_public_witness, PublicWitness};
