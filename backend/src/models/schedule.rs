//! Train schedule record and the overload predicate.

use serde::{Deserialize, Serialize};

/// Fraction of capacity at which a train is flagged as needing expansion.
pub const OVERLOAD_RATIO: f64 = 0.9;

/// One train's route and current booking occupancy.
///
/// No invariant between `capacity` and `booked_seats` is enforced here; see
/// [`crate::models::validation`] for the opt-in strict checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSchedule {
    /// Train identifier. Not required to be unique.
    pub train_id: String,
    /// Origin station name
    pub source: String,
    /// Destination station name
    pub destination: String,
    /// Total seats on the train
    pub capacity: i32,
    /// Seats currently booked
    pub booked_seats: i32,
}

impl TrainSchedule {
    pub fn new(
        train_id: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        capacity: i32,
        booked_seats: i32,
    ) -> Self {
        Self {
            train_id: train_id.into(),
            source: source.into(),
            destination: destination.into(),
            capacity,
            booked_seats,
        }
    }

    /// Whether booked seats are at or above 90% of capacity.
    ///
    /// The threshold is computed in floating point, so a zero capacity yields a
    /// zero threshold and any non-negative booking count satisfies it.
    pub fn needs_expansion(&self) -> bool {
        f64::from(self.booked_seats) >= f64::from(self.capacity) * OVERLOAD_RATIO
    }

    /// Booked seats as a fraction of capacity, or `None` for a zero capacity.
    pub fn occupancy(&self) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(f64::from(self.booked_seats) / f64::from(self.capacity))
    }
}
