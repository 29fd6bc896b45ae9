//! Human-readable form of a submitted record, as stored by the persistence
//! service.
//!
//! Sex and the Yes/No answers travel as the strings the user entered;
//! numbers travel as the encoder parsed them. The persistence service
//! re-derives its own 0/1 encoding from these strings before scoring,
//! independently of the client-side encoder.

use serde::{Deserialize, Serialize};

use super::encoded::EncodedRecord;
use super::encoder::{encode_sex, encode_yes_no};
use super::record::IntakeRecord;

/// Field set sent to and stored by the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadableRecord {
    pub sex: String,
    pub age: i64,
    pub education: i64,
    pub cigarettes_per_day: i64,
    pub blood_pressure_medications: String,
    pub prevalent_stroke: String,
    pub prevalent_hypertension: String,
    pub diabetes: String,
    pub cholesterol: i64,
    pub bmi: f64,
    pub heart_rate: i64,
    pub glucose: i64,
    pub pulse_pressure: i64,
}

impl ReadableRecord {
    /// Builds the `/save` field set from a submission snapshot.
    ///
    /// `raw` supplies the string-valued answers unchanged, so `"male"` is
    /// sent as `"male"`. `encoded` must be the encoding of `raw` and
    /// supplies the numbers.
    pub fn from_submission(raw: &IntakeRecord, encoded: &EncodedRecord) -> Self {
        Self {
            sex: raw.sex.clone(),
            age: encoded.age,
            education: encoded.education,
            cigarettes_per_day: encoded.cigarettes_per_day,
            blood_pressure_medications: raw.blood_pressure_medications.clone(),
            prevalent_stroke: raw.prevalent_stroke.clone(),
            prevalent_hypertension: raw.prevalent_hypertension.clone(),
            diabetes: raw.diabetes.clone(),
            cholesterol: encoded.cholesterol,
            bmi: encoded.bmi,
            heart_rate: encoded.heart_rate,
            glucose: encoded.glucose,
            pulse_pressure: encoded.pulse_pressure,
        }
    }

    /// Server-side encoding used before the second scoring call.
    pub fn reencode(&self) -> EncodedRecord {
        EncodedRecord {
            sex: encode_sex(&self.sex),
            age: self.age,
            education: self.education,
            cigarettes_per_day: self.cigarettes_per_day,
            blood_pressure_medications: encode_yes_no(&self.blood_pressure_medications),
            prevalent_stroke: encode_yes_no(&self.prevalent_stroke),
            prevalent_hypertension: encode_yes_no(&self.prevalent_hypertension),
            diabetes: encode_yes_no(&self.diabetes),
            cholesterol: self.cholesterol,
            bmi: self.bmi,
            heart_rate: self.heart_rate,
            glucose: self.glucose,
            pulse_pressure: self.pulse_pressure,
        }
    }
}
