use num_traits::Float;

use mears_core::errors::TrainError;
use mears_core::models::EventSource;
use mears_core::utils::{ensure_sorted, ensure_window};

use crate::tiling::tiling_coverage;

/// Proportion of events in `x` that have at least one event of `y`
/// within the coincidence window.
///
/// Walks `x` with a single catch-up cursor into `y` and tests one
/// candidate per event, which counts each `x` event at most once. The
/// candidate is the first `y` whose window has not yet closed, so for
/// sorted inputs the membership test is exact.
fn membership_proportion<F: Float>(x: &[F], y: &[F], delta: F) -> F {
    let mut hits = F::zero();
    let mut total = F::zero();
    let mut j = 0;
    for &xv in x {
        while j + 1 < y.len() && y[j] + delta < xv {
            j += 1;
        }
        if y[j] - delta < xv && xv <= y[j] + delta {
            hits = hits + F::one();
        }
        total = total + F::one();
    }
    hits / total
}

///
/// Spike time tiling coefficient of two sorted event trains.
///
/// Port of the measure introduced by Cutts and Eglen (2014), built from
/// two per-train terms:
///
/// - `T`: the [tiling_coverage] of each train;
/// - `P`: the proportion of one train's events falling within `delta`
///   of any event of the other.
///
/// ```text
/// sttc = 1/2 * ( (Pa - Tb) / (1 - Pa * Tb) + (Pb - Ta) / (1 - Pb * Ta) )
/// ```
///
/// The result lies in `[-1, 1]` for non-degenerate inputs. When a
/// membership proportion and the opposite coverage both reach one, the
/// corresponding term divides zero by zero and the result is `NaN`;
/// degenerate arithmetic propagates rather than being masked.
///
/// # Errors
///
/// Fails with [TrainError::EmptyTrain] if either train is empty, plus
/// the usual window and ordering faults.
///
/// # Examples
///
/// ```
/// use mears_synchrony::sttc;
///
/// let a = [0.1_f64, 0.5, 1.2, 3.4];
///
/// // a train against itself scores 1
/// let score = sttc(&a, &a, 0.2)?;
/// assert!((score - 1.0).abs() < 1e-12);
///
/// // against an offset copy the score drops
/// let b = [0.8_f64, 1.9, 2.7];
/// assert!(sttc(&a, &b, 0.2)? < score);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn sttc<F: Float>(a: &[F], b: &[F], delta: F) -> Result<F, TrainError> {
    ensure_window(delta)?;
    ensure_sorted(a)?;
    ensure_sorted(b)?;
    if a.is_empty() || b.is_empty() {
        return Err(TrainError::EmptyTrain);
    }

    let ta = tiling_coverage(a, delta)?;
    let tb = tiling_coverage(b, delta)?;
    let pa = membership_proportion(a, b, delta);
    let pb = membership_proportion(b, a, delta);

    let one = F::one();
    let two = one + one;
    Ok(((pa - tb) / (one - pa * tb) + (pb - ta) / (one - pb * ta)) / two)
}

///
/// [sttc] with train `b` shifted by `lag` before scoring.
///
/// Useful for probing delayed synchrony: sweeping the lag traces out a
/// cross-correlogram of tiling scores. A zero lag borrows `b` as-is.
///
/// # Examples
///
/// ```
/// use mears_synchrony::sttc_lagged;
///
/// let a = vec![0.5_f64, 1.5, 2.5];
/// let b = vec![0.1_f64, 1.1, 2.1];
///
/// // b leads a by 0.4; undo the offset and the trains align
/// let aligned = sttc_lagged(&a, &b, 0.05, 0.4)?;
/// assert!((aligned - 1.0).abs() < 1e-12);
///
/// let raw = sttc_lagged(&a, &b, 0.05, 0.0)?;
/// assert!(raw < aligned);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn sttc_lagged<F, A, B>(a: &A, b: &B, delta: F, lag: F) -> Result<F, TrainError>
where
    F: Float,
    A: EventSource<F> + ?Sized,
    B: EventSource<F> + ?Sized,
{
    let shifted = b.timestamps_with_lag(lag);
    sttc(a.timestamps(), shifted.as_ref(), delta)
}
