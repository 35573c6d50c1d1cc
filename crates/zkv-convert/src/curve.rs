// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve parameter table and curve-name resolution.
//!
//! Proving backends name curves inconsistently (`bn128`, `BN254`,
//! `bls12-381`, …). Names are normalized by uppercasing and dropping every
//! non-alphanumeric character before lookup, so `bls12_381` and `BLS12-381`
//! land on the same entry.

use core::fmt;
use core::str::FromStr;

use tracing::debug;
use zkv_types::CurveId;

use crate::error::{ConvertError, ConvertResult};

/// Byte order of a serialized field element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Le,
    Be,
}

impl Endianness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endianness::Le => "LE",
            Endianness::Be => "BE",
        }
    }

    /// Converts a big-endian buffer in place.
    pub fn apply(self, be_bytes: &mut [u8]) {
        if self == Endianness::Le {
            be_bytes.reverse();
        }
    }
}

impl FromStr for Endianness {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LE" => Ok(Endianness::Le),
            "BE" => Ok(Endianness::Be),
            _ => Err(ConvertError::UnknownEndianness(s.to_string())),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub id: CurveId,
    /// Normalized backend names that resolve to this curve.
    pub aliases: &'static [&'static str],
    pub base_field_bytes: usize,
    pub scalar_field_bytes: usize,
    pub point_endianness: Endianness,
}

impl CurveParams {
    pub fn g1_bytes(&self) -> usize {
        2 * self.base_field_bytes
    }

    pub fn g2_bytes(&self) -> usize {
        4 * self.base_field_bytes
    }
}

pub static BN254: CurveParams = CurveParams {
    id: CurveId::Bn254,
    aliases: &["BN128", "BN254", "ALTBN128"],
    base_field_bytes: 32,
    scalar_field_bytes: 32,
    point_endianness: Endianness::Le,
};

pub static BLS12_381: CurveParams = CurveParams {
    id: CurveId::Bls12381,
    aliases: &["BLS12381"],
    base_field_bytes: 48,
    scalar_field_bytes: 32,
    point_endianness: Endianness::Be,
};

pub static CURVES: [&CurveParams; 2] = [&BN254, &BLS12_381];

pub fn params(id: CurveId) -> &'static CurveParams {
    match id {
        CurveId::Bn254 => &BN254,
        CurveId::Bls12381 => &BLS12_381,
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Maps a proving-backend curve name onto its parameters.
pub fn resolve_curve(name: &str) -> ConvertResult<&'static CurveParams> {
    let normalized = normalize(name);
    let params = CURVES
        .iter()
        .copied()
        .find(|p| p.aliases.iter().any(|alias| *alias == normalized))
        .ok_or_else(|| ConvertError::UnsupportedCurve(name.to_string()))?;
    debug!(name, curve = %params.id, endianness = %params.point_endianness, "resolved curve");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::PrimeField;

    fn byte_width<F: PrimeField>() -> usize {
        F::MODULUS_BIT_SIZE.div_ceil(8) as usize
    }

    #[test]
    fn resolves_backend_aliases() {
        for name in ["bn128", "bn254", "BN254", "alt_bn128", "altbn128"] {
            assert_eq!(resolve_curve(name).unwrap().id, CurveId::Bn254, "{name}");
        }
        for name in ["bls12381", "bls12-381", "BLS12_381"] {
            assert_eq!(resolve_curve(name).unwrap().id, CurveId::Bls12381, "{name}");
        }
    }

    #[test]
    fn unsupported_curve_is_rejected() {
        for name in ["secp256k1", "bls12377", "bw6761", ""] {
            match resolve_curve(name) {
                Err(ConvertError::UnsupportedCurve(n)) => assert_eq!(n, name),
                other => panic!("{name}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn table_matches_arkworks_widths() {
        assert_eq!(BN254.base_field_bytes, byte_width::<ark_bn254::Fq>());
        assert_eq!(BN254.scalar_field_bytes, byte_width::<ark_bn254::Fr>());
        assert_eq!(BLS12_381.base_field_bytes, byte_width::<ark_bls12_381::Fq>());
        assert_eq!(BLS12_381.scalar_field_bytes, byte_width::<ark_bls12_381::Fr>());
    }

    #[test]
    fn params_agree_with_table() {
        for p in CURVES {
            assert_eq!(params(p.id), p);
        }
    }

    #[test]
    fn point_endianness_per_curve() {
        assert_eq!(params(CurveId::Bn254).point_endianness, Endianness::Le);
        assert_eq!(params(CurveId::Bls12381).point_endianness, Endianness::Be);
    }

    #[test]
    fn endianness_parsing() {
        assert_eq!("le".parse::<Endianness>().unwrap(), Endianness::Le);
        assert_eq!("BE".parse::<Endianness>().unwrap(), Endianness::Be);
        match "".parse::<Endianness>() {
            Err(ConvertError::UnknownEndianness(s)) => assert!(s.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
        assert!("little".parse::<Endianness>().is_err());
    }

    #[test]
    fn apply_reverses_only_le() {
        let mut buf = [1u8, 2, 3];
        Endianness::Be.apply(&mut buf);
        assert_eq!(buf, [1, 2, 3]);
        Endianness::Le.apply(&mut buf);
        assert_eq!(buf, [3, 2, 1]);
    }
}
