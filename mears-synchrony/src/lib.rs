//! Synchrony measures for sorted event trains.
//!
//! Two complementary views of how strongly a pair of spike trains fires
//! together:
//!
//! - [`sttc`]: the spike time tiling coefficient of Cutts and Eglen
//!   (2014). Window based, insensitive to firing rate, scores in
//!   `[-1, 1]`.
//! - [`stoic`]: a smoothed train overlap covariance. Kernel based,
//!   evaluated exactly through pairwise kernel product integrals,
//!   scores in `[0, 1]` under normalization.
//!
//! Both ride on the close-pair scan from `mears-neighbours` and share
//! its validation and window-rule semantics. The lagged variants accept
//! anything implementing `EventSource` and realign train `b` before
//! scoring.
//!
//! ## Quick Start
//!
//! ```rust
//! use mears_synchrony::{sttc, stoic};
//!
//! let a = [0.10_f64, 0.50, 1.20, 3.40];
//! let b = [0.11_f64, 0.49, 1.23, 2.80];
//!
//! let tiling = sttc(&a, &b, 0.05)?;
//! assert!(tiling > 0.5);
//!
//! let covariance = stoic(&a, &b)?;
//! assert!(covariance > 0.5);
//! # Ok::<(), mears_core::TrainError>(())
//! ```

pub mod stoic;
pub mod sttc;
pub mod tiling;

// re-exports
pub use self::stoic::{stoic, stoic_kpi, stoic_lagged, stoic_with, StoicParams};
pub use self::sttc::{sttc, sttc_lagged};
pub use self::tiling::tiling_coverage;
