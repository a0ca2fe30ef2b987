//! Data Transfer Objects for the HTTP API.
//!
//! Schedule records travel as [`TrainSchedule`] directly; only the health
//! response needs its own shape.

use serde::{Deserialize, Serialize};

pub use crate::models::TrainSchedule;

/// Body returned by a successful add.
pub const SCHEDULE_ADDED: &str = "Train schedule added.";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of schedules currently in the registry
    pub schedules: usize,
}
