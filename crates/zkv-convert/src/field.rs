// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Bridge between big-integer coordinates and arkworks prime fields.
//!
//! Range checks and canonical byte representations come from `ark-ff`;
//! this module only dispatches on the runtime [`CurveId`].

use core::fmt;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use zkv_types::{CurveId, FieldElement};

use crate::error::{ConvertError, ConvertResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Base,
    Scalar,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Base => "base",
            FieldKind::Scalar => "scalar",
        })
    }
}

fn canonical_be<F: PrimeField>(value: &BigUint) -> Option<Vec<u8>> {
    let repr = F::BigInt::try_from(value.clone()).ok()?;
    F::from_bigint(repr).map(|f| f.into_bigint().to_bytes_be())
}

fn reduce_be<F: PrimeField>(bytes: &[u8]) -> FieldElement {
    let f = F::from_be_bytes_mod_order(bytes);
    FieldElement(f.into_bigint().into())
}

/// Big-endian bytes of `value`, exactly the field's byte width wide.
///
/// Fails with [`ConvertError::NotInField`] when `value` is not below the
/// field modulus.
pub fn to_bytes_be(curve: CurveId, kind: FieldKind, value: &FieldElement) -> ConvertResult<Vec<u8>> {
    let n = value.as_biguint();
    let bytes = match (curve, kind) {
        (CurveId::Bn254, FieldKind::Base) => canonical_be::<ark_bn254::Fq>(n),
        (CurveId::Bn254, FieldKind::Scalar) => canonical_be::<ark_bn254::Fr>(n),
        (CurveId::Bls12381, FieldKind::Base) => canonical_be::<ark_bls12_381::Fq>(n),
        (CurveId::Bls12381, FieldKind::Scalar) => canonical_be::<ark_bls12_381::Fr>(n),
    };
    bytes.ok_or_else(|| ConvertError::NotInField {
        value: value.to_string(),
        curve,
        field: kind,
    })
}

/// Interprets `bytes` as a big-endian integer reduced into the scalar field.
pub fn reduce_scalar_be(curve: CurveId, bytes: &[u8]) -> FieldElement {
    match curve {
        CurveId::Bn254 => reduce_be::<ark_bn254::Fr>(bytes),
        CurveId::Bls12381 => reduce_be::<ark_bls12_381::Fr>(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus<F: PrimeField>() -> FieldElement {
        FieldElement(F::MODULUS.into())
    }

    #[test]
    fn widths_follow_field() {
        let one = FieldElement::from(1);
        assert_eq!(to_bytes_be(CurveId::Bn254, FieldKind::Base, &one).unwrap().len(), 32);
        assert_eq!(to_bytes_be(CurveId::Bls12381, FieldKind::Base, &one).unwrap().len(), 48);
        assert_eq!(to_bytes_be(CurveId::Bls12381, FieldKind::Scalar, &one).unwrap().len(), 32);
    }

    #[test]
    fn modulus_is_rejected() {
        let p = modulus::<ark_bn254::Fq>();
        match to_bytes_be(CurveId::Bn254, FieldKind::Base, &p) {
            Err(ConvertError::NotInField { curve, field, .. }) => {
                assert_eq!(curve, CurveId::Bn254);
                assert_eq!(field, FieldKind::Base);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn largest_element_is_accepted() {
        let r = modulus::<ark_bls12_381::Fr>();
        let max = FieldElement(r.0 - 1u32);
        let bytes = to_bytes_be(CurveId::Bls12381, FieldKind::Scalar, &max).unwrap();
        assert_eq!(BigUint::from_bytes_be(&bytes), max.0);
    }

    #[test]
    fn bn254_base_value_can_exceed_scalar_field() {
        // r < v < p
        let v = FieldElement(modulus::<ark_bn254::Fr>().0 + 1u32);
        assert!(to_bytes_be(CurveId::Bn254, FieldKind::Base, &v).is_ok());
        assert!(to_bytes_be(CurveId::Bn254, FieldKind::Scalar, &v).is_err());
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let huge = FieldElement(BigUint::from(1u8) << 512);
        assert!(to_bytes_be(CurveId::Bls12381, FieldKind::Base, &huge).is_err());
    }

    #[test]
    fn reduction_wraps_modulus() {
        let r = modulus::<ark_bn254::Fr>();
        let mut bytes = r.0.to_bytes_be();
        assert_eq!(reduce_scalar_be(CurveId::Bn254, &bytes), FieldElement::zero());
        *bytes.last_mut().unwrap() += 1;
        assert_eq!(reduce_scalar_be(CurveId::Bn254, &bytes), FieldElement::from(1));
    }
}
