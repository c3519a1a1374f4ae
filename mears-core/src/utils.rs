use num_traits::Float;

use crate::errors::TrainError;

///
/// Check that a slice of event times is sorted ascending (ties allowed).
///
/// Every measure in this workspace assumes its input trains are sorted;
/// this is the shared gate they all call before scanning.
///
/// # Arguments
///
/// - times: event times to validate
///
/// # Returns
///
/// `Ok(())` for a sorted slice, otherwise [TrainError::UnsortedInput]
/// carrying the first index that breaks the order.
pub fn ensure_sorted<F: Float>(times: &[F]) -> Result<(), TrainError> {
    match times.windows(2).position(|w| w[1] < w[0]) {
        Some(pos) => Err(TrainError::UnsortedInput { index: pos + 1 }),
        None => Ok(()),
    }
}

/// Validate a coincidence window `delta`. Must be positive and finite.
pub fn ensure_window<F: Float>(delta: F) -> Result<(), TrainError> {
    if delta > F::zero() && delta.is_finite() {
        Ok(())
    } else {
        Err(TrainError::NonPositiveWindow)
    }
}

/// Validate a kernel width `sigma`. Must be positive and finite.
pub fn ensure_width<F: Float>(sigma: F) -> Result<(), TrainError> {
    if sigma > F::zero() && sigma.is_finite() {
        Ok(())
    } else {
        Err(TrainError::NonPositiveWidth)
    }
}
