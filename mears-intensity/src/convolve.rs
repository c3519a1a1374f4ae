use num_traits::Float;
use num_traits::float::FloatConst;

use mears_core::kernel::gaussian;

///
/// Smooth an event train into a continuous intensity function.
///
/// The returned closure evaluates the kernel sum
///
/// ```text
/// f(x) = sum over events t of kernel(x - t)
/// ```
///
/// by rescanning the whole train on every call. Nothing is cached and
/// no grid is imposed, so the estimate can be probed at arbitrary
/// points; the price is `O(n)` work per evaluation. The closure borrows
/// the train rather than copying it.
///
/// An empty train produces the constant zero function.
///
/// # Examples
///
/// ```
/// use mears_core::kernel::gaussian;
/// use mears_intensity::convolve;
///
/// let train = [0.0_f64, 1.0];
/// let rate = convolve(&train, gaussian(1.0));
///
/// // halfway between the two events both kernels contribute equally
/// let mid = rate(0.5);
/// assert!((mid - 0.7041306535285989).abs() < 1e-9);
///
/// // symmetric far from the mass
/// assert!((rate(-3.0) - rate(4.0)).abs() < 1e-12);
/// ```
pub fn convolve<'a, F, K>(train: &'a [F], kernel: K) -> impl Fn(F) -> F + 'a
where
    F: Float,
    K: Fn(F) -> F + 'a,
{
    move |x| {
        let mut total = F::zero();
        for &t in train {
            total = total + kernel(x - t);
        }
        total
    }
}

///
/// [convolve] with far-away events skipped.
///
/// Events further than `range` from the query point are not evaluated:
///
/// ```text
/// f(x) = sum over events t with |x - t| <= range of kernel(x - t)
/// ```
///
/// For a rapidly decaying kernel this trades a controlled truncation
/// error for fewer kernel evaluations. The scan over the train is still
/// linear; only the kernel calls are saved, so this pays off when the
/// kernel is expensive. `range` must be nonnegative to be useful: a
/// negative radius excludes everything.
///
/// # Examples
///
/// ```
/// use mears_core::kernel::gaussian;
/// use mears_intensity::{convolve, convolve_pruned};
///
/// let train = [0.0_f64, 1.0, 8.0];
/// let full = convolve(&train, gaussian(0.5));
/// let pruned = convolve_pruned(&train, gaussian(0.5), 2.0);
///
/// // the dropped tail at 8.0 is far below one ulp of the sum here,
/// // so the two evaluations agree to the last bit
/// assert_eq!(pruned(0.5), full(0.5));
///
/// // the event at 8.0 is dropped when probing near zero, leaving a
/// // truncation error below the kernel tail
/// assert!((full(1.9) - pruned(1.9)).abs() < 1e-12);
/// ```
pub fn convolve_pruned<'a, F, K>(train: &'a [F], kernel: K, range: F) -> impl Fn(F) -> F + 'a
where
    F: Float,
    K: Fn(F) -> F + 'a,
{
    move |x| {
        let mut total = F::zero();
        for &t in train {
            if (x - t).abs() <= range {
                total = total + kernel(x - t);
            }
        }
        total
    }
}

///
/// [convolve] under a Gaussian kernel of width `sigma`.
///
/// The usual entry point for rate estimation: the intensity at `x` is
/// the Gaussian-smoothed event density, in events per unit time.
///
/// # Examples
///
/// ```
/// use mears_intensity::convolve_gaussian;
///
/// // ten regular events at 10 Hz; mid-train intensity sits near 10
/// let train: Vec<f64> = (0..10).map(|i| i as f64 * 0.1).collect();
/// let rate = convolve_gaussian(&train, 0.05);
/// assert!((rate(0.45) - 10.0).abs() < 0.5);
/// ```
pub fn convolve_gaussian<'a, F>(train: &'a [F], sigma: F) -> impl Fn(F) -> F + 'a
where
    F: Float + FloatConst + 'a,
{
    convolve(train, gaussian(sigma))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_train_is_the_zero_function() {
        let rate = convolve(&[], gaussian(1.0));
        assert_eq!(rate(0.0), 0.0);
        assert_eq!(rate(-100.0), 0.0);
    }

    #[test]
    fn single_event_reproduces_the_kernel() {
        let train = [2.0];
        let rate = convolve(&train, gaussian(0.5));
        let g = gaussian(0.5);
        for x in [-1.0, 1.9, 2.0, 2.1, 5.0] {
            assert_eq!(rate(x), g(x - 2.0));
        }
    }

    #[test]
    fn two_events_superpose() {
        let train = [0.0, 1.0];
        let rate = convolve(&train, gaussian(1.0));
        // both kernels half a width away: twice the standard normal at 0.5
        let expected = 2.0 * (-0.125_f64).exp() / (2.0 * std::f64::consts::PI).sqrt();
        assert!((rate(0.5) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.9)]
    #[case(-0.3)]
    fn pruning_within_range_changes_nothing(#[case] x: f64) {
        // every event within range of the probes: sums are identical
        let train = [0.0, 1.0];
        let full = convolve(&train, gaussian(0.5));
        let pruned = convolve_pruned(&train, gaussian(0.5), 3.0);
        assert_eq!(pruned(x), full(x));
    }

    #[test]
    fn pruning_drops_distant_events() {
        let train = [0.0, 100.0];
        let pruned = convolve_pruned(&train, gaussian(0.5), 3.0);
        let g = gaussian(0.5);
        // only the nearby event contributes
        assert_eq!(pruned(0.2), g(0.2));
        // nothing within range at all
        assert_eq!(pruned(50.0), 0.0);
    }

    #[test]
    fn truncation_error_is_bounded_by_the_tail() {
        let train: Vec<f64> = (0..100).map(|i| i as f64 * 0.05).collect();
        let full = convolve(&train, gaussian(0.05));
        let pruned = convolve_pruned(&train, gaussian(0.05), 0.25);
        // tail mass beyond five sigmas is tiny
        assert!((full(2.5) - pruned(2.5)).abs() < 1e-5);
        assert!(pruned(2.5) <= full(2.5));
    }

    #[test]
    fn gaussian_convenience_estimates_the_rate() {
        let train: Vec<f64> = (0..50).map(|i| i as f64 * 0.02).collect();
        let rate = convolve_gaussian(&train, 0.05);
        // 50 Hz regular train probed mid-span
        assert!((rate(0.5) - 50.0).abs() < 1.0);
    }

    #[test]
    fn borrows_rather_than_copies() {
        let train = vec![0.0, 1.0, 2.0];
        let rate = convolve(&train, gaussian(1.0));
        let at_one = rate(1.0);
        assert!(at_one > 0.0);
        // train is still usable alongside the closure
        assert_eq!(train.len(), 3);
        let again = rate(1.0);
        assert_eq!(at_one, again);
    }
}
