// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! gnark binary public witness decoding.
//!
//! `witness.MarshalBinary()` layout, all integers big-endian:
//!
//! ```text
//! nbPublic: u32 | nbSecret: u32 | len: u32 | len × scalar (BE, scalar width)
//! ```
//!
//! Elements are reduced modulo the scalar field order, as gnark's
//! `SetBytes` does.

use tracing::debug;
use zkv_types::{CurveId, FieldElement};

use crate::curve::params;
use crate::error::{ConvertError, ConvertResult};
use crate::field::reduce_scalar_be;

pub const WITNESS_HEADER_LEN: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicWitness {
    pub nb_public: u32,
    pub nb_secret: u32,
    pub values: Vec<FieldElement>,
}

fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(word)
}

pub fn decode_public_witness(curve: CurveId, bytes: &[u8]) -> ConvertResult<PublicWitness> {
    if bytes.len() < WITNESS_HEADER_LEN {
        return Err(ConvertError::WitnessTruncated(bytes.len()));
    }
    let (header, payload) = bytes.split_at(WITNESS_HEADER_LEN);
    let nb_public = be_u32(header, 0);
    let nb_secret = be_u32(header, 4);
    let count = be_u32(header, 8) as usize;

    let width = params(curve).scalar_field_bytes;
    if payload.len() % width != 0 || payload.len() / width != count {
        return Err(ConvertError::WitnessLength {
            len: payload.len(),
            count,
            width,
        });
    }

    let values = payload
        .chunks_exact(width)
        .map(|chunk| reduce_scalar_be(curve, chunk))
        .collect::<Vec<_>>();
    debug!(%curve, nb_public, nb_secret, count = values.len(), "decoded public witness");
    Ok(PublicWitness {
        nb_public,
        nb_secret,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn witness(nb_public: u32, elems: &[u64], width: usize) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&nb_public.to_be_bytes());
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&(elems.len() as u32).to_be_bytes());
        for e in elems {
            let mut buf = vec![0u8; width];
            buf[width - 8..].copy_from_slice(&e.to_be_bytes());
            out.extend_from_slice(&buf);
        }
        out
    }

    #[test]
    fn decodes_values_in_order() {
        let bytes = witness(2, &[10, 1], 32);
        let w = decode_public_witness(CurveId::Bn254, &bytes).unwrap();
        assert_eq!(w.nb_public, 2);
        assert_eq!(w.nb_secret, 0);
        assert_eq!(w.values, vec![FieldElement::from(10), FieldElement::from(1)]);
    }

    #[test]
    fn empty_vector() {
        let w = decode_public_witness(CurveId::Bls12381, &witness(0, &[], 32)).unwrap();
        assert!(w.values.is_empty());
    }

    #[test]
    fn truncated_header() {
        assert!(matches!(
            decode_public_witness(CurveId::Bn254, &[0u8; 11]),
            Err(ConvertError::WitnessTruncated(11))
        ));
    }

    #[test]
    fn ragged_payload() {
        let mut bytes = witness(1, &[5], 32);
        bytes.push(0);
        assert!(matches!(
            decode_public_witness(CurveId::Bn254, &bytes),
            Err(ConvertError::WitnessLength { len: 33, .. })
        ));
    }

    #[test]
    fn count_mismatch() {
        let mut bytes = witness(2, &[5, 6], 32);
        bytes[11] = 3;
        assert!(matches!(
            decode_public_witness(CurveId::Bn254, &bytes),
            Err(ConvertError::WitnessLength { count: 3, .. })
        ));
    }
}
