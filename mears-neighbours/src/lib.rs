//! Close-pair scanning over sorted event trains.
//!
//! Two events are close neighbours when they fall within a coincidence
//! window `delta` of each other. Because event trains are sorted, all
//! close pairs can be found in one forward pass with a catch-up cursor
//! instead of comparing every pair. This crate provides that scan in two
//! forms:
//!
//! - [`scan_close_pairs`]: streaming, invokes a callback per pair. The
//!   synchrony measures build on this directly and never materialise
//!   the pair set.
//! - [`close_neighbours`]: collects the pairs into a sparse distance
//!   matrix, rows indexed by the shorter train.
//!
//! All pair-finding logic should live here. Higher-level crates
//! (synchrony, intensity) wrap this functionality for their measures but
//! should not reimplement the window scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use mears_neighbours::close_neighbours;
//!
//! // spike times from two units, in seconds
//! let unit_a = [0.013, 0.151, 0.420, 0.444];
//! let unit_b = [0.012, 0.160, 0.300];
//!
//! // which spikes land within 10 ms of each other?
//! let mat = close_neighbours(&unit_a, &unit_b, 0.010)?;
//! assert_eq!(mat.nnz(), 2);
//!
//! for (dist, (row, col)) in mat.triplet_iter() {
//!     println!("b[{row}] ~ a[{col}], {dist:.4} s apart");
//! }
//! # Ok::<(), mears_core::TrainError>(())
//! ```

pub mod matrix;
pub mod scan;

// re-exports
pub use self::matrix::close_neighbours;
pub use self::scan::scan_close_pairs;
pub use sprs::TriMat;
