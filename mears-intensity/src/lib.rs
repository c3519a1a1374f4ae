//! Kernel intensity estimation for event trains.
//!
//! Smoothing a sorted train of event times with a kernel yields a
//! continuous firing-rate estimate that can be probed at any time point.
//! The estimator here is deliberately lazy: it returns a closure over
//! the borrowed train and rescans it per evaluation, which keeps memory
//! flat and avoids committing to an evaluation grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use mears_intensity::convolve_gaussian;
//!
//! // a burst of four spikes
//! let train = [0.50_f64, 0.52, 0.55, 0.56];
//! let rate = convolve_gaussian(&train, 0.02);
//!
//! // intensity peaks inside the burst and falls off outside it
//! assert!(rate(0.53) > rate(0.40));
//! assert!(rate(0.53) > rate(0.70));
//! ```

pub mod convolve;

// re-exports
pub use self::convolve::{convolve, convolve_gaussian, convolve_pruned};
