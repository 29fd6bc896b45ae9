//! Numeric projection of an intake record and the verdict computed from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Canonical numeric record consumed by the prediction service.
///
/// Booleans and sex travel as 0/1, `bmi` as a float, every other
/// field as an integer. Built in one piece by the encoder and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedRecord {
    pub sex: u8,
    pub age: i64,
    pub education: i64,
    pub cigarettes_per_day: i64,
    pub blood_pressure_medications: u8,
    pub prevalent_stroke: u8,
    pub prevalent_hypertension: u8,
    pub diabetes: u8,
    pub cholesterol: i64,
    pub bmi: f64,
    pub heart_rate: i64,
    pub glucose: i64,
    pub pulse_pressure: i64,
}

/// Binary risk classification returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Verdict {
    NoRisk,
    AtRisk,
}

impl Verdict {
    /// Wire value (`0` or `1`).
    pub fn as_u8(&self) -> u8 {
        match self {
            Verdict::NoRisk => 0,
            Verdict::AtRisk => 1,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoRisk => "No Risk",
            Verdict::AtRisk => "At Risk",
        }
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(self, Verdict::AtRisk)
    }
}

impl TryFrom<u8> for Verdict {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verdict::NoRisk),
            1 => Ok(Verdict::AtRisk),
            other => Err(ValidationError::invalid_format(
                "prediction",
                format!("expected 0 or 1, got {}", other),
            )),
        }
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> Self {
        verdict.as_u8()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A verdict together with the record it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub record: EncodedRecord,
    pub verdict: Verdict,
}

impl PredictionOutcome {
    pub fn new(record: EncodedRecord, verdict: Verdict) -> Self {
        Self { record, verdict }
    }
}
