//! Intake fields and the steps that group them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One input field of the intake form.
///
/// The wire name of each variant is the JSON key used by both the
/// prediction and persistence services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Sex,
    Age,
    Education,
    CigarettesPerDay,
    #[serde(rename = "blood_pressure_medications")]
    OnBpMedication,
    #[serde(rename = "prevalent_stroke")]
    HadStroke,
    #[serde(rename = "prevalent_hypertension")]
    HasHypertension,
    #[serde(rename = "diabetes")]
    HasDiabetes,
    Cholesterol,
    Bmi,
    HeartRate,
    Glucose,
    PulsePressure,
}

impl IntakeField {
    /// Every field, in form order.
    pub const ALL: [IntakeField; 13] = [
        IntakeField::Sex,
        IntakeField::Age,
        IntakeField::Education,
        IntakeField::CigarettesPerDay,
        IntakeField::OnBpMedication,
        IntakeField::HadStroke,
        IntakeField::HasHypertension,
        IntakeField::HasDiabetes,
        IntakeField::Cholesterol,
        IntakeField::Bmi,
        IntakeField::HeartRate,
        IntakeField::Glucose,
        IntakeField::PulsePressure,
    ];

    /// JSON key used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            IntakeField::Sex => "sex",
            IntakeField::Age => "age",
            IntakeField::Education => "education",
            IntakeField::CigarettesPerDay => "cigarettes_per_day",
            IntakeField::OnBpMedication => "blood_pressure_medications",
            IntakeField::HadStroke => "prevalent_stroke",
            IntakeField::HasHypertension => "prevalent_hypertension",
            IntakeField::HasDiabetes => "diabetes",
            IntakeField::Cholesterol => "cholesterol",
            IntakeField::Bmi => "bmi",
            IntakeField::HeartRate => "heart_rate",
            IntakeField::Glucose => "glucose",
            IntakeField::PulsePressure => "pulse_pressure",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            IntakeField::Sex => "Sex",
            IntakeField::Age => "Age",
            IntakeField::Education => "Education (1 lower, 4 higher)",
            IntakeField::CigarettesPerDay => "Cigarettes per Day",
            IntakeField::OnBpMedication => "Blood Pressure Medications?",
            IntakeField::HadStroke => "Prevalent Stroke?",
            IntakeField::HasHypertension => "Prevalent Hypertension?",
            IntakeField::HasDiabetes => "Diabetes?",
            IntakeField::Cholesterol => "Cholesterol Level",
            IntakeField::Bmi => "BMI",
            IntakeField::HeartRate => "Heart Rate",
            IntakeField::Glucose => "Glucose Level",
            IntakeField::PulsePressure => "Pulse Pressure",
        }
    }

    /// Step on which this field is collected.
    pub fn step(&self) -> IntakeStep {
        match self {
            IntakeField::Sex | IntakeField::Age | IntakeField::Education => IntakeStep::Demographic,
            IntakeField::CigarettesPerDay => IntakeStep::Behavioral,
            IntakeField::OnBpMedication
            | IntakeField::HadStroke
            | IntakeField::HasHypertension
            | IntakeField::HasDiabetes => IntakeStep::MedicalHistory,
            IntakeField::Cholesterol
            | IntakeField::Bmi
            | IntakeField::HeartRate
            | IntakeField::Glucose
            | IntakeField::PulsePressure => IntakeStep::MedicalCurrent,
        }
    }

    /// True for the Yes/No questions of the medical history step.
    pub fn is_yes_no(&self) -> bool {
        self.step() == IntakeStep::MedicalHistory
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for IntakeField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntakeField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("intake_field", format!("unknown field '{}'", s))
            })
    }
}

/// One of the four sequential groups of intake fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    Demographic,
    Behavioral,
    MedicalHistory,
    MedicalCurrent,
}

impl IntakeStep {
    /// Steps in the order the user walks through them.
    pub const ALL: [IntakeStep; 4] = [
        IntakeStep::Demographic,
        IntakeStep::Behavioral,
        IntakeStep::MedicalHistory,
        IntakeStep::MedicalCurrent,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            IntakeStep::Demographic => 1,
            IntakeStep::Behavioral => 2,
            IntakeStep::MedicalHistory => 3,
            IntakeStep::MedicalCurrent => 4,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        IntakeStep::ALL.into_iter().find(|step| step.number() == number)
    }

    /// The following step, or `None` on the last one.
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// True for the step whose completion triggers submission.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Section title.
    pub fn title(&self) -> &'static str {
        match self {
            IntakeStep::Demographic => "Demographic Data",
            IntakeStep::Behavioral => "Behavioral Data",
            IntakeStep::MedicalHistory => "Medical (History)",
            IntakeStep::MedicalCurrent => "Medical (Current)",
        }
    }

    /// Fields that must be filled before leaving this step.
    pub fn required_fields(&self) -> Vec<IntakeField> {
        IntakeField::ALL
            .into_iter()
            .filter(|field| field.step() == *self)
            .collect()
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}
