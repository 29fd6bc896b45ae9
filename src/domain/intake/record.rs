//! The raw, user-entered intake record.

use serde::{Deserialize, Serialize};

use super::field::IntakeField;

/// Raw field values as the user typed or selected them.
///
/// Every value is a string and may be empty until its step is reached.
/// Type checking is deferred to the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRecord {
    pub sex: String,
    pub age: String,
    pub education: String,
    pub cigarettes_per_day: String,
    pub blood_pressure_medications: String,
    pub prevalent_stroke: String,
    pub prevalent_hypertension: String,
    pub diabetes: String,
    pub cholesterol: String,
    pub bmi: String,
    pub heart_rate: String,
    pub glucose: String,
    pub pulse_pressure: String,
}

impl IntakeRecord {
    /// Creates a record with every field empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Sex => &self.sex,
            IntakeField::Age => &self.age,
            IntakeField::Education => &self.education,
            IntakeField::CigarettesPerDay => &self.cigarettes_per_day,
            IntakeField::OnBpMedication => &self.blood_pressure_medications,
            IntakeField::HadStroke => &self.prevalent_stroke,
            IntakeField::HasHypertension => &self.prevalent_hypertension,
            IntakeField::HasDiabetes => &self.diabetes,
            IntakeField::Cholesterol => &self.cholesterol,
            IntakeField::Bmi => &self.bmi,
            IntakeField::HeartRate => &self.heart_rate,
            IntakeField::Glucose => &self.glucose,
            IntakeField::PulsePressure => &self.pulse_pressure,
        }
    }

    /// Overwrites a field. Last write wins.
    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        let slot = match field {
            IntakeField::Sex => &mut self.sex,
            IntakeField::Age => &mut self.age,
            IntakeField::Education => &mut self.education,
            IntakeField::CigarettesPerDay => &mut self.cigarettes_per_day,
            IntakeField::OnBpMedication => &mut self.blood_pressure_medications,
            IntakeField::HadStroke => &mut self.prevalent_stroke,
            IntakeField::HasHypertension => &mut self.prevalent_hypertension,
            IntakeField::HasDiabetes => &mut self.diabetes,
            IntakeField::Cholesterol => &mut self.cholesterol,
            IntakeField::Bmi => &mut self.bmi,
            IntakeField::HeartRate => &mut self.heart_rate,
            IntakeField::Glucose => &mut self.glucose,
            IntakeField::PulsePressure => &mut self.pulse_pressure,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`IntakeRecord::set`].
    pub fn with(mut self, field: IntakeField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when the field holds a non-empty value.
    pub fn is_filled(&self, field: IntakeField) -> bool {
        !self.get(field).is_empty()
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<IntakeField> {
        IntakeField::ALL
            .into_iter()
            .filter(|field| !self.is_filled(*field))
            .collect()
    }
}
