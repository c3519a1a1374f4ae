use num_traits::Float;

use mears_core::errors::TrainError;
use mears_core::utils::{ensure_sorted, ensure_window};

///
/// Fraction of a train's recorded span that is tiled by `delta`-windows
/// around its events.
///
/// Each event contributes the part of `[t - delta, t + delta]` not
/// already covered by the previous event's window:
///
/// ```text
/// sum of min(t + delta - prev_end, 2 * delta)
/// ```
///
/// normalised by the span `last - first + 2 * delta`. Overlapping
/// windows are counted once, so duplicate timestamps add nothing. The
/// running `prev_end` starts at zero, which clips the first window of a
/// train whose first event lies within `delta` of time zero; events are
/// assumed to carry nonnegative times well clear of zero.
///
/// This is the `T` term of the spike time tiling coefficient of Cutts
/// and Eglen (2014), computed per train.
///
/// # Errors
///
/// Fails with [TrainError::EmptyTrain] for an empty slice, and with the
/// usual window and ordering faults otherwise.
///
/// # Examples
///
/// ```
/// use mears_synchrony::tiling_coverage;
///
/// // an isolated event tiles its whole span
/// let t = tiling_coverage(&[5.0_f64], 0.1)?;
/// assert!((t - 1.0).abs() < 1e-12);
///
/// // sparse events leave most of the span uncovered
/// let t = tiling_coverage(&[1.0, 10.0, 20.0], 0.1)?;
/// assert!(t < 0.05);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn tiling_coverage<F: Float>(s: &[F], delta: F) -> Result<F, TrainError> {
    ensure_window(delta)?;
    ensure_sorted(s)?;
    let (&first, &last) = match (s.first(), s.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TrainError::EmptyTrain),
    };

    let two_delta = delta + delta;
    let mut covered = F::zero();
    let mut prev_end = F::zero();
    for &t in s {
        covered = covered + (t + delta - prev_end).min(two_delta);
        prev_end = t + delta;
    }

    Ok(covered / (last - first + two_delta))
}
