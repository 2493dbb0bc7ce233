use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::errors::ValidationError;
use super::response::Validate;

/// Event categories the prediction model has base rates for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum EventType {
    Wedding,
    Birthday,
    Corporate,
    Festival,
    Other,
}

/// Body of `POST /predict/predict-wastage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionRequest {
    pub event_type: EventType,
    pub expected_attendees: u32,
    pub actual_attendees: u32,
}

impl PredictionRequest {
    /// Validates raw form input and builds the request.
    ///
    /// # Errors
    /// - [`ValidationError::MissingFields`] when any field is blank.
    /// - [`ValidationError::UnknownEventType`] for an unrecognised event type.
    /// - [`ValidationError::InvalidAttendeeCount`] when a count is not a
    ///   non-negative integer.
    /// - [`ValidationError::ExpectedBelowActual`] when fewer people were
    ///   expected than attended.
    pub fn from_form(
        event_type: &str,
        expected_attendees: &str,
        actual_attendees: &str,
    ) -> Result<Self, ValidationError> {
        let event_type = event_type.trim();
        let expected = expected_attendees.trim();
        let actual = actual_attendees.trim();
        if event_type.is_empty() || expected.is_empty() || actual.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let event_type =
            EventType::from_str(event_type).map_err(|_| ValidationError::UnknownEventType)?;
        let expected_attendees =
            u32::from_str(expected).map_err(|_| ValidationError::InvalidAttendeeCount)?;
        let actual_attendees =
            u32::from_str(actual).map_err(|_| ValidationError::InvalidAttendeeCount)?;

        if expected_attendees < actual_attendees {
            return Err(ValidationError::ExpectedBelowActual);
        }

        Ok(Self {
            event_type,
            expected_attendees,
            actual_attendees,
        })
    }
}

/// Metrics computed by the backend for one event.
///
/// Both differences are `expected - actual`: positive means fewer people came
/// than were planned for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Estimated surplus food in kilograms.
    pub predicted_wastage: f64,
    pub attendance_difference: f64,
    pub percentage_difference: f64,
}

impl Validate for PredictionResult {
    fn is_valid(&self) -> bool {
        self.predicted_wastage.is_finite()
            && self.attendance_difference.is_finite()
            && self.percentage_difference.is_finite()
    }
}

impl PredictionResult {
    /// Formats the three metrics for display.
    #[must_use]
    pub fn summary(&self) -> PredictionSummary {
        let people = if self.attendance_difference > 0.0 {
            "fewer"
        } else {
            "more"
        };
        let direction = if self.percentage_difference > 0.0 {
            "lower"
        } else {
            "higher"
        };

        PredictionSummary {
            wastage: format!("{} kg", self.predicted_wastage.abs()),
            attendance: format!(
                "Difference: {} {people} people than expected",
                self.attendance_difference.abs()
            ),
            percentage: format!(
                "{}% {direction} attendance than expected",
                self.percentage_difference.abs()
            ),
        }
    }
}

/// Display strings for a [`PredictionResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionSummary {
    pub wastage: String,
    pub attendance: String,
    pub percentage: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn valid_form_builds_request() {
        let request = PredictionRequest::from_form("Wedding", " 120 ", "100").unwrap();
        assert_eq!(
            request,
            PredictionRequest {
                event_type: EventType::Wedding,
                expected_attendees: 120,
                actual_attendees: 100,
            }
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "event_type": "Wedding",
                "expected_attendees": 120,
                "actual_attendees": 100
            })
        );
    }

    #[test]
    fn expected_below_actual_is_rejected() {
        let error = PredictionRequest::from_form("Birthday", "50", "80").unwrap_err();
        assert_eq!(error, ValidationError::ExpectedBelowActual);
        assert!(error.to_string().contains("cannot be less than actual"));
    }

    #[test]
    fn equal_counts_are_accepted() {
        assert!(PredictionRequest::from_form("Other", "0", "0").is_ok());
    }

    #[test_case("", "10", "5", ValidationError::MissingFields ; "missing event type")]
    #[test_case("Wedding", "  ", "5", ValidationError::MissingFields ; "missing expected")]
    #[test_case("Wedding", "10", "", ValidationError::MissingFields ; "missing actual")]
    #[test_case("Gala", "10", "5", ValidationError::UnknownEventType ; "unknown event type")]
    #[test_case("Wedding", "-10", "5", ValidationError::InvalidAttendeeCount ; "negative count")]
    #[test_case("Wedding", "10.5", "5", ValidationError::InvalidAttendeeCount ; "fractional count")]
    #[test_case("Wedding", "ten", "5", ValidationError::InvalidAttendeeCount ; "word count")]
    fn invalid_forms_are_rejected(
        event_type: &str,
        expected: &str,
        actual: &str,
        error: ValidationError,
    ) {
        assert_eq!(
            PredictionRequest::from_form(event_type, expected, actual),
            Err(error)
        );
    }

    #[test]
    fn every_event_type_round_trips_through_its_label() {
        for event_type in EventType::iter() {
            assert_eq!(EventType::from_str(event_type.as_ref()), Ok(event_type));
        }
    }

    #[test]
    fn surplus_attendance_reads_as_more_and_higher() {
        let result = PredictionResult {
            predicted_wastage: 12.5,
            attendance_difference: -30.0,
            percentage_difference: -60.0,
        };
        let summary = result.summary();
        assert_eq!(summary.wastage, "12.5 kg");
        assert!(summary.attendance.contains("30 more people than expected"));
        assert_eq!(summary.percentage, "60% higher attendance than expected");
    }

    #[test]
    fn shortfall_reads_as_fewer_and_lower() {
        let result = PredictionResult {
            predicted_wastage: 6.0,
            attendance_difference: 20.0,
            percentage_difference: 16.67,
        };
        let summary = result.summary();
        assert_eq!(summary.wastage, "6 kg");
        assert_eq!(
            summary.attendance,
            "Difference: 20 fewer people than expected"
        );
        assert_eq!(summary.percentage, "16.67% lower attendance than expected");
    }

    #[test]
    fn non_finite_metrics_are_invalid() {
        let result = PredictionResult {
            predicted_wastage: f64::NAN,
            attendance_difference: 0.0,
            percentage_difference: 0.0,
        };
        assert!(!result.is_valid());
    }
}
