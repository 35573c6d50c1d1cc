// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Inverse of [`encode`](crate::encode): hex back to big-integer coordinates.
//!
//! Only layout is checked (hex syntax and exact byte length). Decoded values
//! are not range-checked against the field modulus.

use num_bigint::BigUint;
use zkv_types::{CurveId, FieldElement, Fq2Element, G1Point, G2Point};

use crate::curve::Endianness;
use crate::encode::PointEncoder;
use crate::error::{ConvertError, ConvertResult};

fn hex_bytes(hex: &str, expected: usize) -> ConvertResult<Vec<u8>> {
    let bytes = hex::decode(hex.strip_prefix("0x").unwrap_or(hex))?;
    if bytes.len() != expected {
        return Err(ConvertError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

fn read(chunk: &[u8], endianness: Endianness) -> FieldElement {
    let mut buf = chunk.to_vec();
    // LE and BE are involutions, so re-applying undoes the encoding.
    endianness.apply(&mut buf);
    FieldElement(BigUint::from_bytes_be(&buf))
}

impl PointEncoder {
    fn coordinates<const N: usize>(&self, hex: &str) -> ConvertResult<[FieldElement; N]> {
        let width = self.params().base_field_bytes;
        let bytes = hex_bytes(hex, N * width)?;
        Ok(core::array::from_fn(|i| {
            read(&bytes[i * width..(i + 1) * width], self.endianness())
        }))
    }

    pub fn decode_g1(&self, hex: &str) -> ConvertResult<G1Point> {
        let [x, y] = self.coordinates(hex)?;
        Ok(G1Point { x, y })
    }

    pub fn decode_g2(&self, hex: &str) -> ConvertResult<G2Point> {
        let [x0, x1, y0, y1] = self.coordinates(hex)?;
        Ok(G2Point::new(Fq2Element::new(x0, x1), Fq2Element::new(y0, y1)))
    }

    pub fn decode_scalar(&self, hex: &str) -> ConvertResult<FieldElement> {
        let bytes = hex_bytes(hex, self.params().scalar_field_bytes)?;
        Ok(FieldElement(BigUint::from_bytes_le(&bytes)))
    }
}

pub fn decode_g1(curve: CurveId, hex: &str) -> ConvertResult<G1Point> {
    PointEncoder::new(curve).decode_g1(hex)
}

pub fn decode_g2(curve: CurveId, hex: &str) -> ConvertResult<G2Point> {
    PointEncoder::new(curve).decode_g2(hex)
}

pub fn decode_scalar(curve: CurveId, hex: &str) -> ConvertResult<FieldElement> {
    PointEncoder::new(curve).decode_scalar(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_g1, encode_g2, encode_scalar};

    #[test]
    fn g1_round_trip_both_curves() {
        let p = G1Point::new(0xdead_beef_u64, 17);
        for id in CurveId::ALL {
            let hex = encode_g1(id, &p).unwrap();
            assert_eq!(decode_g1(id, &hex).unwrap(), p);
        }
    }

    #[test]
    fn g2_round_trip_both_curves() {
        let p = G2Point::new(Fq2Element::new(1, u64::MAX), Fq2Element::new(0, 42));
        for id in CurveId::ALL {
            let hex = encode_g2(id, &p).unwrap();
            assert_eq!(decode_g2(id, &hex).unwrap(), p);
        }
    }

    #[test]
    fn scalar_round_trip() {
        let s = FieldElement::from(123_456_789);
        let hex = encode_scalar(CurveId::Bls12381, &s).unwrap();
        assert_eq!(decode_scalar(CurveId::Bls12381, &hex).unwrap(), s);
    }

    #[test]
    fn accepts_missing_prefix() {
        let hex = encode_g1(CurveId::Bn254, &G1Point::new(1, 2)).unwrap();
        let bare = hex.trim_start_matches("0x");
        assert_eq!(decode_g1(CurveId::Bn254, bare).unwrap(), G1Point::new(1, 2));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let hex = encode_g1(CurveId::Bn254, &G1Point::new(1, 2)).unwrap();
        match decode_g1(CurveId::Bls12381, &hex) {
            Err(ConvertError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 96);
                assert_eq!(actual, 64);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            decode_g2(CurveId::Bn254, &hex),
            Err(ConvertError::InvalidLength { expected: 128, .. })
        ));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            decode_scalar(CurveId::Bn254, "0xzz"),
            Err(ConvertError::InvalidHex(_))
        ));
    }
}
