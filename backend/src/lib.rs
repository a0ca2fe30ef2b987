//! # Rail Scheduler Backend
//!
//! A small REST backend that records train schedules and flags the trains
//! whose bookings approach capacity.
//!
//! ## Architecture
//!
//! - [`models`]: the [`TrainSchedule`](models::TrainSchedule) record, its
//!   overload predicate and the optional strict validation
//! - [`db`]: the repository trait, the in-memory registry and the service layer
//! - [`config`]: TOML file and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All state is held in memory for the lifetime of the process.

pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
