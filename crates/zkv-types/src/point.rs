// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::FieldElement;

/// Affine point over the base field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1Point {
    #[serde(rename = "X")]
    pub x: FieldElement,
    #[serde(rename = "Y")]
    pub y: FieldElement,
}

/// Element `A0 + A1·u` of the quadratic extension field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fq2Element {
    #[serde(rename = "A0")]
    pub a0: FieldElement,
    #[serde(rename = "A1")]
    pub a1: FieldElement,
}

/// Affine point over the quadratic extension field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2Point {
    #[serde(rename = "X")]
    pub x: Fq2Element,
    #[serde(rename = "Y")]
    pub y: Fq2Element,
}

impl G1Point {
    pub fn new(x: impl Into<FieldElement>, y: impl Into<FieldElement>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Fq2Element {
    pub fn new(a0: impl Into<FieldElement>, a1: impl Into<FieldElement>) -> Self {
        Self {
            a0: a0.into(),
            a1: a1.into(),
        }
    }
}

impl G2Point {
    pub fn new(x: Fq2Element, y: Fq2Element) -> Self {
        Self { x, y }
    }

    /// Components in output order: `x.A0, x.A1, y.A0, y.A1`.
    pub fn components(&self) -> [&FieldElement; 4] {
        [&self.x.a0, &self.x.a1, &self.y.a0, &self.y.a1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g2_from_gnark_json() {
        let json = r#"{"X":{"A0":"1","A1":2},"Y":{"A0":"3","A1":"4"}}"#;
        let p: G2Point = serde_json::from_str(json).unwrap();
        let got: Vec<String> = p.components().iter().map(|c| c.to_string()).collect();
        assert_eq!(got, ["1", "2", "3", "4"]);
    }

    #[test]
    fn g1_missing_coordinate_fails() {
        assert!(serde_json::from_str::<G1Point>(r#"{"X":"1"}"#).is_err());
    }
}
