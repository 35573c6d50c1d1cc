// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fixed-width hex encoding of curve points and scalars.
//!
//! # Byte order
//!
//! - **Points**: every coordinate component is written as a base-field-wide
//!   big-endian buffer, then byte-reversed on its own when the curve's point
//!   endianness is LE (BN254). BLS12-381 keeps big-endian. G2 components are
//!   laid out `x.A0 || x.A1 || y.A0 || y.A1`.
//! - **Scalars**: scalar-field-wide little-endian on every curve. The
//!   zkVerify verifier reads public inputs this way regardless of the point
//!   convention, so the two must stay independent.
//!
//! Output is `0x` followed by lowercase hex, two digits per byte.

use tracing::trace;
use zkv_types::{CurveId, FieldElement, G1Point, G2Point};

use crate::curve::{params, resolve_curve, CurveParams, Endianness};
use crate::error::ConvertResult;
use crate::field::{self, FieldKind};

pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Encodes points and scalars for a single curve.
#[derive(Clone, Copy, Debug)]
pub struct PointEncoder {
    params: &'static CurveParams,
    endianness: Endianness,
}

impl PointEncoder {
    pub fn new(curve: CurveId) -> Self {
        let params = params(curve);
        Self {
            params,
            endianness: params.point_endianness,
        }
    }

    /// Resolves a proving-backend curve name, see [`resolve_curve`].
    pub fn for_name(name: &str) -> ConvertResult<Self> {
        resolve_curve(name).map(|p| Self::new(p.id))
    }

    /// Overrides the curve's point endianness. Scalars are unaffected.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn curve(&self) -> CurveId {
        self.params.id
    }

    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn push_coordinate(&self, value: &FieldElement, out: &mut Vec<u8>) -> ConvertResult<()> {
        let mut buf = field::to_bytes_be(self.curve(), FieldKind::Base, value)?;
        debug_assert_eq!(buf.len(), self.params.base_field_bytes);
        self.endianness.apply(&mut buf);
        out.extend_from_slice(&buf);
        Ok(())
    }

    pub fn g1_bytes(&self, point: &G1Point) -> ConvertResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.params.g1_bytes());
        self.push_coordinate(&point.x, &mut out)?;
        self.push_coordinate(&point.y, &mut out)?;
        Ok(out)
    }

    pub fn g2_bytes(&self, point: &G2Point) -> ConvertResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.params.g2_bytes());
        for component in point.components() {
            self.push_coordinate(component, &mut out)?;
        }
        Ok(out)
    }

    pub fn scalar_bytes(&self, scalar: &FieldElement) -> ConvertResult<Vec<u8>> {
        let mut buf = field::to_bytes_be(self.curve(), FieldKind::Scalar, scalar)?;
        buf.reverse();
        Ok(buf)
    }

    pub fn g1(&self, point: &G1Point) -> ConvertResult<String> {
        let hex = to_hex(&self.g1_bytes(point)?);
        trace!(curve = %self.curve(), %hex, "encoded G1");
        Ok(hex)
    }

    pub fn g2(&self, point: &G2Point) -> ConvertResult<String> {
        let hex = to_hex(&self.g2_bytes(point)?);
        trace!(curve = %self.curve(), %hex, "encoded G2");
        Ok(hex)
    }

    pub fn scalar(&self, scalar: &FieldElement) -> ConvertResult<String> {
        Ok(to_hex(&self.scalar_bytes(scalar)?))
    }
}

pub fn encode_g1(curve: CurveId, point: &G1Point) -> ConvertResult<String> {
    PointEncoder::new(curve).g1(point)
}

pub fn encode_g2(curve: CurveId, point: &G2Point) -> ConvertResult<String> {
    PointEncoder::new(curve).g2(point)
}

pub fn encode_scalar(curve: CurveId, scalar: &FieldElement) -> ConvertResult<String> {
    PointEncoder::new(curve).scalar(scalar)
}
