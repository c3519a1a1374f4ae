//! Core library for the mears workspace: shared models, kernels and
//! validation for event train analysis.
//!
//! An event train is a sorted sequence of timestamps, typically the spike
//! times of one unit from a multielectrode recording. This crate holds the
//! pieces that every measure crate builds on:
//!
//! - [`SpikeTrain`] and the [`EventSource`] trait, the data model;
//! - [`kernel`], smoothing kernels used for intensity estimation and the
//!   smoothed overlap covariance;
//! - [`utils`], the shared input validation gates;
//! - [`TrainError`], the error type every fallible operation returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use mears_core::models::{EventSource, SpikeTrain};
//!
//! let train = SpikeTrain::with_unit("ch07", vec![0.013_f64, 0.152, 0.420]);
//! assert_eq!(train.len(), 3);
//!
//! // lagged views are how the measure crates realign trains
//! let shifted = train.timestamps_with_lag(0.5);
//! assert!((shifted[0] - 0.513).abs() < 1e-12);
//! ```

pub mod errors;
pub mod kernel;
pub mod models;
pub mod utils;

// re-exports
pub use self::errors::TrainError;
pub use self::models::{EventSource, SpikeTrain};
