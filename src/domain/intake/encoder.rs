//! Field encoder: raw intake strings to the numeric model record.
//!
//! Mapping rules:
//!
//! - `sex`: `"Male"` is 1, anything else is 0
//! - Yes/No questions: `"Yes"` is 1, anything else is 0
//! - `bmi`: parsed as a float
//! - every other field: the leading integer, so `"240.5"` is 240 and
//!   `"12 cigs"` is 12
//!
//! A numeric field with no leading number (or a non-finite `bmi`) fails the
//! whole encoding with [`EncodingError`]. The function is pure.

use thiserror::Error;

use super::encoded::EncodedRecord;
use super::field::IntakeField;
use super::record::IntakeRecord;

/// Value that selects 1 for the `sex` field.
const MALE: &str = "Male";
/// Value that selects 1 for the Yes/No questions.
const YES: &str = "Yes";

/// A field could not be converted to the number the model expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{field}' is not a valid number: '{value}'")]
pub struct EncodingError {
    pub field: IntakeField,
    pub value: String,
}

impl EncodingError {
    pub fn new(field: IntakeField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Message asking the user to correct the field.
    pub fn user_message(&self) -> String {
        format!("Please enter a valid number for {}.", self.field.label())
    }
}

/// Encodes a complete intake record.
pub fn encode(record: &IntakeRecord) -> Result<EncodedRecord, EncodingError> {
    Ok(EncodedRecord {
        sex: encode_sex(&record.sex),
        age: parse_int(record, IntakeField::Age)?,
        education: parse_int(record, IntakeField::Education)?,
        cigarettes_per_day: parse_int(record, IntakeField::CigarettesPerDay)?,
        blood_pressure_medications: encode_yes_no(&record.blood_pressure_medications),
        prevalent_stroke: encode_yes_no(&record.prevalent_stroke),
        prevalent_hypertension: encode_yes_no(&record.prevalent_hypertension),
        diabetes: encode_yes_no(&record.diabetes),
        cholesterol: parse_int(record, IntakeField::Cholesterol)?,
        bmi: parse_float(record, IntakeField::Bmi)?,
        heart_rate: parse_int(record, IntakeField::HeartRate)?,
        glucose: parse_int(record, IntakeField::Glucose)?,
        pulse_pressure: parse_int(record, IntakeField::PulsePressure)?,
    })
}

/// `"Male"` is 1, anything else 0.
pub fn encode_sex(value: &str) -> u8 {
    u8::from(value == MALE)
}

/// `"Yes"` is 1, anything else 0.
pub fn encode_yes_no(value: &str) -> u8 {
    u8::from(value == YES)
}

fn parse_int(record: &IntakeRecord, field: IntakeField) -> Result<i64, EncodingError> {
    let raw = record.get(field);
    leading_integer(raw).ok_or_else(|| EncodingError::new(field, raw))
}

/// Optional sign followed by at least one digit, after leading whitespace.
/// Anything after the digits is ignored.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

fn parse_float(record: &IntakeRecord, field: IntakeField) -> Result<f64, EncodingError> {
    let raw = record.get(field);
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EncodingError::new(field, raw)),
    }
}
