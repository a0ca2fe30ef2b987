//! Opt-in strict validation for submitted schedules.
//!
//! The default [`ValidationMode::Permissive`] accepts every structurally valid
//! record. [`ValidationMode::Strict`] rejects records whose numbers cannot
//! describe a real train.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::schedule::TrainSchedule;

/// How submitted schedules are checked before they are stored.
///
/// Deserialization goes through [`FromStr`], so config files and the
/// environment accept the same case-insensitive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValidationMode {
    /// Accept every record as given
    #[default]
    Permissive,
    /// Reject records failing [`validate_schedule`]
    Strict,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Unknown validation mode: {}", s)),
        }
    }
}

impl TryFrom<String> for ValidationMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl ValidationMode {
    /// Check a schedule according to this mode.
    ///
    /// Permissive mode never fails. Strict mode returns every violation found.
    pub fn check(&self, schedule: &TrainSchedule) -> Result<(), Vec<ScheduleViolation>> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict => {
                let violations = validate_schedule(schedule);
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    }
}

/// A single reason a schedule fails strict validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleViolation {
    #[error("trainId must not be empty")]
    EmptyTrainId,
    #[error("capacity must not be negative (got {0})")]
    NegativeCapacity(i32),
    #[error("bookedSeats must not be negative (got {0})")]
    NegativeBookedSeats(i32),
    #[error("bookedSeats ({booked_seats}) exceeds capacity ({capacity})")]
    BookedExceedsCapacity { booked_seats: i32, capacity: i32 },
}

/// Collect all strict-mode violations for a schedule.
pub fn validate_schedule(schedule: &TrainSchedule) -> Vec<ScheduleViolation> {
    let mut violations = Vec::new();

    if schedule.train_id.trim().is_empty() {
        violations.push(ScheduleViolation::EmptyTrainId);
    }
    if schedule.capacity < 0 {
        violations.push(ScheduleViolation::NegativeCapacity(schedule.capacity));
    }
    if schedule.booked_seats < 0 {
        violations.push(ScheduleViolation::NegativeBookedSeats(schedule.booked_seats));
    }
    if schedule.booked_seats > schedule.capacity {
        violations.push(ScheduleViolation::BookedExceedsCapacity {
            booked_seats: schedule.booked_seats,
            capacity: schedule.capacity,
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" Permissive ".parse::<ValidationMode>().unwrap(), ValidationMode::Permissive);
        assert!("lenient".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn test_deserialize_is_case_insensitive() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ValidationMode,
        }

        let parsed: Wrapper = toml::from_str("mode = \"Strict\"").unwrap();
        assert_eq!(parsed.mode, ValidationMode::Strict);
        let parsed: Wrapper = toml::from_str("mode = \"PERMISSIVE\"").unwrap();
        assert_eq!(parsed.mode, ValidationMode::Permissive);
        assert!(toml::from_str::<Wrapper>("mode = \"loose\"").is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ValidationMode,
        }

        let text = toml::to_string(&Wrapper {
            mode: ValidationMode::Strict,
        })
        .unwrap();
        assert_eq!(text.trim(), "mode = \"strict\"");
    }

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(ValidationMode::default(), ValidationMode::Permissive);
    }

    #[test]
    fn test_permissive_accepts_anything() {
        let bad = TrainSchedule::new("", "A", "B", -5, 200);
        assert!(ValidationMode::Permissive.check(&bad).is_ok());
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        let ok = TrainSchedule::new("T1", "A", "B", 100, 100);
        assert!(ValidationMode::Strict.check(&ok).is_ok());
    }

    #[test]
    fn test_strict_zero_capacity_is_valid() {
        let empty = TrainSchedule::new("T0", "A", "B", 0, 0);
        assert!(validate_schedule(&empty).is_empty());
    }

    #[test]
    fn test_strict_collects_all_violations() {
        let bad = TrainSchedule::new("  ", "A", "B", -5, -10);
        let violations = ValidationMode::Strict.check(&bad).unwrap_err();
        assert_eq!(
            violations,
            vec![
                ScheduleViolation::EmptyTrainId,
                ScheduleViolation::NegativeCapacity(-5),
                ScheduleViolation::NegativeBookedSeats(-10),
            ]
        );
    }

    #[test]
    fn test_strict_overbooked() {
        let over = TrainSchedule::new("T1", "A", "B", 100, 101);
        assert_eq!(
            validate_schedule(&over),
            vec![ScheduleViolation::BookedExceedsCapacity {
                booked_seats: 101,
                capacity: 100
            }]
        );
        assert_eq!(
            validate_schedule(&over)[0].to_string(),
            "bookedSeats (101) exceeds capacity (100)"
        );
    }
}
