// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Settings resolution: command-line flag, then environment, then default.

use anyhow::Result;
use zkv_convert::{Converter, Endianness, CURVES};

use crate::output;

pub const CURVE_ENV: &str = "ZKV_CURVE";
pub const ENDIANNESS_ENV: &str = "ZKV_POINT_ENDIANNESS";
pub const DEFAULT_CURVE: &str = "bn254";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub curve: String,
    /// `None` keeps the curve's own point endianness.
    pub endianness: Option<Endianness>,
}

fn supported_names() -> String {
    CURVES
        .iter()
        .map(|p| p.aliases.join("/"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Settings {
    pub fn resolve(curve: Option<&str>, endianness: Option<&str>) -> Result<Self> {
        Self::resolve_with(curve, endianness, |key| std::env::var(key).ok())
    }

    pub fn resolve_with(
        curve: Option<&str>,
        endianness: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let curve = curve
            .map(str::to_string)
            .or_else(|| env(CURVE_ENV))
            .unwrap_or_else(|| DEFAULT_CURVE.to_string());
        let endianness = endianness
            .map(str::to_string)
            .or_else(|| env(ENDIANNESS_ENV))
            .map(|s| s.parse::<Endianness>())
            .transpose()
            .map_err(|e| output::fail_with_hint(&e.to_string(), "use LE or BE"))?;
        Ok(Self { curve, endianness })
    }

    pub fn converter(&self) -> Result<Converter> {
        let converter = Converter::new(&self.curve).map_err(|e| {
            output::fail_with_hint(
                &e.to_string(),
                &format!("supported curves: {}", supported_names()),
            )
        })?;
        Ok(match self.endianness {
            Some(endianness) => {
                output::warn(&format!("overriding point endianness with {endianness}"));
                converter.with_endianness(endianness)
            }
            None => converter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use zkv_types::CurveId;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let s = Settings::resolve_with(None, None, env(&[])).unwrap();
        assert_eq!(s.curve, DEFAULT_CURVE);
        assert_eq!(s.endianness, None);
    }

    #[test]
    fn env_fills_missing_flags() {
        let s = Settings::resolve_with(
            None,
            None,
            env(&[(CURVE_ENV, "bls12-381"), (ENDIANNESS_ENV, "le")]),
        )
        .unwrap();
        assert_eq!(s.curve, "bls12-381");
        assert_eq!(s.endianness, Some(Endianness::Le));
    }

    #[test]
    fn flags_beat_env() {
        let s = Settings::resolve_with(Some("bn128"), Some("BE"), env(&[(CURVE_ENV, "bls12381")]))
            .unwrap();
        assert_eq!(s.curve, "bn128");
        assert_eq!(s.endianness, Some(Endianness::Be));
    }

    #[test]
    fn bad_endianness_is_an_error() {
        let err = Settings::resolve_with(None, Some("middle"), env(&[])).unwrap_err();
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn converter_for_unknown_curve_lists_supported() {
        let s = Settings::resolve_with(Some("secp256k1"), None, env(&[])).unwrap();
        let err = s.converter().unwrap_err().to_string();
        assert!(err.contains("secp256k1"));
        assert!(err.contains("BLS12381"));
    }

    #[test]
    fn converter_carries_override() {
        let s = Settings::resolve_with(Some("bls12381"), Some("le"), env(&[])).unwrap();
        let c = s.converter().unwrap();
        assert_eq!(c.encoder().curve(), CurveId::Bls12381);
        assert_eq!(c.encoder().endianness(), Endianness::Le);
    }
}
