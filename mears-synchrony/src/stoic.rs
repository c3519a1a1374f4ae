use num_traits::Float;
use num_traits::float::FloatConst;

use mears_core::errors::TrainError;
use mears_core::kernel::gaussian_product_integral;
use mears_core::models::EventSource;
use mears_core::utils::{ensure_width, ensure_window};

use mears_neighbours::scan_close_pairs;

/// Parameters for the smoothed overlap covariance.
///
/// `delta` is the scan window handed to the close-pair scan; pairs
/// further apart than `delta` contribute nothing even though a Gaussian
/// weight never reaches zero. The default window of ten sigmas keeps
/// the truncation error far below double precision noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoicParams<F> {
    /// Width of the smoothing kernel applied to each event.
    pub sigma: F,
    /// Coincidence window for the pair scan.
    pub delta: F,
    /// Scale by the geometric mean of the two self-covariances.
    pub normalize: bool,
}

impl<F: Float> StoicParams<F> {
    /// Parameters for kernel width `sigma`, with the scan window derived
    /// as `10 * sigma` and normalization on.
    pub fn with_sigma(sigma: F) -> Self {
        let ten = F::from(10.0).unwrap();
        StoicParams {
            sigma,
            delta: ten * sigma,
            normalize: true,
        }
    }
}

impl<F: Float> Default for StoicParams<F> {
    /// The conventional defaults: `sigma` of 25 ms and the derived
    /// 250 ms scan window, for event times in seconds.
    fn default() -> Self {
        StoicParams::with_sigma(F::from(0.025).unwrap())
    }
}

///
/// Smoothed train overlap covariance with the default parameters.
///
/// Each train is conceptually smoothed with a Gaussian of width `sigma`
/// and the two intensity functions are correlated. The integral reduces
/// to a sum of pairwise kernel product integrals, so the measure is
/// computed directly on the close pairs of the two trains without ever
/// materialising an intensity function:
///
/// ```text
/// stoic = sum over close pairs of kpi(sigma)(|a[i] - b[j]|)
/// ```
///
/// normalised by the geometric mean of the two self-covariances. A
/// normalised score lands in `(0, 1]` when any pair qualifies, and a
/// pair-free result short-circuits to exactly `0.0` before any division
/// can produce `0/0`.
///
/// # Errors
///
/// Fails with [TrainError::NonPositiveWidth] or
/// [TrainError::NonPositiveWindow] for bad parameters, and
/// [TrainError::UnsortedInput] for unsorted trains. Empty trains are
/// legal and simply have no pairs.
///
/// # Examples
///
/// ```
/// use mears_synchrony::stoic;
///
/// let a = [0.0_f64, 0.5, 1.0];
///
/// // a train against itself scores 1
/// let score = stoic(&a, &a)?;
/// assert!((score - 1.0).abs() < 1e-12);
///
/// // trains with no close pairs score exactly zero
/// let b = [10.0_f64, 20.0, 30.0];
/// assert_eq!(stoic(&a, &b)?, 0.0);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn stoic<F>(a: &[F], b: &[F]) -> Result<F, TrainError>
where
    F: Float + FloatConst,
{
    stoic_with(a, b, &StoicParams::default())
}

/// [stoic] with explicit [StoicParams].
///
/// # Examples
///
/// ```
/// use mears_synchrony::{stoic_with, StoicParams};
///
/// let a = [0.00_f64, 0.30, 0.62];
/// let b = [0.01_f64, 0.29, 0.65];
///
/// // a sharper kernel is stricter about near-coincidence
/// let wide = stoic_with(&a, &b, &StoicParams::with_sigma(0.05))?;
/// let sharp = stoic_with(&a, &b, &StoicParams::with_sigma(0.005))?;
/// assert!(sharp < wide);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn stoic_with<F>(a: &[F], b: &[F], params: &StoicParams<F>) -> Result<F, TrainError>
where
    F: Float + FloatConst,
{
    ensure_width(params.sigma)?;
    let kpi = gaussian_product_integral(params.sigma);
    stoic_kpi(a, b, kpi, params)
}

///
/// The overlap covariance under a caller-supplied kernel product
/// integral.
///
/// `kpi` maps the absolute distance of a close pair to its weight; the
/// Gaussian family used by [stoic_with] is one choice of many. Only
/// `delta` and `normalize` are read from `params` here, since the
/// kernel already encodes its own width.
pub fn stoic_kpi<F, K>(a: &[F], b: &[F], kpi: K, params: &StoicParams<F>) -> Result<F, TrainError>
where
    F: Float,
    K: Fn(F) -> F,
{
    ensure_window(params.delta)?;
    pair_covariance(a, b, &kpi, params.delta, params.normalize)
}

fn pair_covariance<F, K>(
    a: &[F],
    b: &[F],
    kpi: &K,
    delta: F,
    normalize: bool,
) -> Result<F, TrainError>
where
    F: Float,
    K: Fn(F) -> F,
{
    let mut acc = F::zero();
    let mut pairs = 0usize;
    scan_close_pairs(a, b, delta, |av, bv, _, _| {
        acc = acc + kpi((av - bv).abs());
        pairs += 1;
    })?;

    if pairs == 0 {
        return Ok(F::zero());
    }
    if !normalize {
        return Ok(acc);
    }

    let self_a = pair_covariance(a, a, kpi, delta, false)?;
    let self_b = pair_covariance(b, b, kpi, delta, false)?;
    Ok(acc / (self_a * self_b).sqrt())
}

///
/// [stoic_with] with train `b` shifted by `lag` before scoring.
///
/// # Examples
///
/// ```
/// use mears_synchrony::{stoic_lagged, StoicParams};
///
/// let a = vec![0.5_f64, 1.5, 2.5];
/// let b = vec![0.1_f64, 1.1, 2.1];
///
/// let params = StoicParams::default();
/// let aligned = stoic_lagged(&a, &b, &params, 0.4)?;
/// let raw = stoic_lagged(&a, &b, &params, 0.0)?;
/// assert!(raw < aligned);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn stoic_lagged<F, A, B>(a: &A, b: &B, params: &StoicParams<F>, lag: F) -> Result<F, TrainError>
where
    F: Float + FloatConst,
    A: EventSource<F> + ?Sized,
    B: EventSource<F> + ?Sized,
{
    let shifted = b.timestamps_with_lag(lag);
    stoic_with(a.timestamps(), shifted.as_ref(), params)
}
