//! Domain model for a physical health check-in.
use serde::{Deserialize, Serialize};

/// Accepted ranges for each vital sign.
///
/// These gate what gets sent to the risk model; readings outside them
/// are almost certainly entry mistakes.
pub const AGE_RANGE: (u32, u32) = (13, 65);
pub const SYSTOLIC_RANGE: (u32, u32) = (40, 300);
pub const DIASTOLIC_RANGE: (u32, u32) = (20, 200);
pub const HEART_RATE_RANGE: (u32, u32) = (20, 250);
/// Blood sugar in mmol/L
pub const BLOOD_SUGAR_RANGE: (f64, f64) = (6.0, 20.0);
/// Body temperature in degrees Fahrenheit
pub const BODY_TEMP_RANGE: (f64, f64) = (95.0, 106.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCheckIn {
    pub id: String,
    pub profile_id: String,
    pub age: u32,
    /// Systolic blood pressure, mmHg
    pub systolic: u32,
    /// Diastolic blood pressure, mmHg
    pub diastolic: u32,
    /// Heart rate, beats per minute
    pub heart_rate: u32,
    /// Blood sugar, mmol/L
    pub blood_sugar: f64,
    /// Body temperature, degrees Fahrenheit
    pub body_temp: f64,
    /// Risk label returned by the prediction service
    pub risk_level: String,
    pub submitted_at: String, // RFC 3339 timestamp
}

impl DomainCheckIn {
    /// Generate a check-in ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("checkin::{}", epoch_millis)
    }
}

/// The six vital readings as entered, before validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalReadings {
    pub age: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub heart_rate: u32,
    pub blood_sugar: f64,
    pub body_temp: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VitalsValidationError {
    #[error("Age must be between {} and {}", AGE_RANGE.0, AGE_RANGE.1)]
    AgeOutOfRange,
    #[error("Systolic pressure must be between {} and {} mmHg", SYSTOLIC_RANGE.0, SYSTOLIC_RANGE.1)]
    SystolicOutOfRange,
    #[error("Diastolic pressure must be between {} and {} mmHg", DIASTOLIC_RANGE.0, DIASTOLIC_RANGE.1)]
    DiastolicOutOfRange,
    #[error("Diastolic pressure must be lower than systolic pressure")]
    DiastolicNotBelowSystolic,
    #[error("Heart rate must be between {} and {} bpm", HEART_RATE_RANGE.0, HEART_RATE_RANGE.1)]
    HeartRateOutOfRange,
    #[error("Blood sugar must be between {} and {} mmol/L", BLOOD_SUGAR_RANGE.0, BLOOD_SUGAR_RANGE.1)]
    BloodSugarOutOfRange,
    #[error("Body temperature must be between {} and {} °F", BODY_TEMP_RANGE.0, BODY_TEMP_RANGE.1)]
    BodyTempOutOfRange,
}

/// Validate a full set of readings, collecting every problem at once.
///
/// An empty result means the readings can go to the risk model.
pub fn validate_vitals(readings: &VitalReadings) -> Vec<VitalsValidationError> {
    let mut errors = Vec::new();

    if readings.age < AGE_RANGE.0 || readings.age > AGE_RANGE.1 {
        errors.push(VitalsValidationError::AgeOutOfRange);
    }
    if readings.systolic < SYSTOLIC_RANGE.0 || readings.systolic > SYSTOLIC_RANGE.1 {
        errors.push(VitalsValidationError::SystolicOutOfRange);
    }
    if readings.diastolic < DIASTOLIC_RANGE.0 || readings.diastolic > DIASTOLIC_RANGE.1 {
        errors.push(VitalsValidationError::DiastolicOutOfRange);
    } else if readings.diastolic >= readings.systolic {
        errors.push(VitalsValidationError::DiastolicNotBelowSystolic);
    }
    if readings.heart_rate < HEART_RATE_RANGE.0 || readings.heart_rate > HEART_RATE_RANGE.1 {
        errors.push(VitalsValidationError::HeartRateOutOfRange);
    }
    if readings.blood_sugar < BLOOD_SUGAR_RANGE.0 || readings.blood_sugar > BLOOD_SUGAR_RANGE.1 {
        errors.push(VitalsValidationError::BloodSugarOutOfRange);
    }
    if readings.body_temp < BODY_TEMP_RANGE.0 || readings.body_temp > BODY_TEMP_RANGE.1 {
        errors.push(VitalsValidationError::BodyTempOutOfRange);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_readings() -> VitalReadings {
        VitalReadings {
            age: 28,
            systolic: 118,
            diastolic: 76,
            heart_rate: 72,
            blood_sugar: 7.2,
            body_temp: 98.4,
        }
    }

    #[test]
    fn test_healthy_readings_pass() {
        assert!(validate_vitals(&healthy_readings()).is_empty());
    }

    #[test]
    fn test_each_bound_is_inclusive() {
        let mut r = healthy_readings();
        r.age = 13;
        r.systolic = 300;
        r.diastolic = 20;
        r.heart_rate = 250;
        r.blood_sugar = 6.0;
        r.body_temp = 106.0;
        assert!(validate_vitals(&r).is_empty());
    }

    #[test]
    fn test_age_out_of_range() {
        let mut r = healthy_readings();
        r.age = 12;
        assert!(validate_vitals(&r).contains(&VitalsValidationError::AgeOutOfRange));
        r.age = 66;
        assert!(validate_vitals(&r).contains(&VitalsValidationError::AgeOutOfRange));
    }

    #[test]
    fn test_diastolic_must_stay_below_systolic() {
        let mut r = healthy_readings();
        r.systolic = 90;
        r.diastolic = 95;
        let errors = validate_vitals(&r);
        assert!(errors.contains(&VitalsValidationError::DiastolicNotBelowSystolic));
    }

    #[test]
    fn test_blood_sugar_bounds() {
        let mut r = healthy_readings();
        r.blood_sugar = 5.9;
        assert!(validate_vitals(&r).contains(&VitalsValidationError::BloodSugarOutOfRange));
        r.blood_sugar = 20.1;
        assert!(validate_vitals(&r).contains(&VitalsValidationError::BloodSugarOutOfRange));
    }

    #[test]
    fn test_multiple_problems_collected_together() {
        let r = VitalReadings {
            age: 5,
            systolic: 350,
            diastolic: 10,
            heart_rate: 300,
            blood_sugar: 2.0,
            body_temp: 90.0,
        };
        let errors = validate_vitals(&r);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_validation_messages_are_user_readable() {
        let message = VitalsValidationError::BloodSugarOutOfRange.to_string();
        assert!(message.contains("6"));
        assert!(message.contains("20"));
        assert!(message.contains("mmol/L"));
    }
}
