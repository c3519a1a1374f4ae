//! Smoothing kernels for event trains.
//!
//! A kernel here is just a closure `Fn(F) -> F` over the offset from an
//! event time. Constructors in this module return closures so that the
//! smoothing and synchrony code can stay agnostic about the kernel shape.

use num_traits::Float;
use num_traits::float::FloatConst;

///
/// Build a Gaussian density of width `sigma`, centred at zero.
///
/// # Arguments
///
/// - sigma: standard deviation of the kernel
///
/// # Examples
///
/// ```
/// use mears_core::kernel::gaussian;
///
/// let g = gaussian(1.0_f64);
/// // peak of the standard normal density
/// assert!((g(0.0) - 0.3989422804014327).abs() < 1e-12);
/// assert!((g(1.5) - g(-1.5)).abs() < 1e-15);
/// ```
pub fn gaussian<F>(sigma: F) -> impl Fn(F) -> F
where
    F: Float + FloatConst,
{
    let two = F::one() + F::one();
    let norm = sigma * (two * F::PI()).sqrt();
    move |x| (-(x * x) / (two * sigma * sigma)).exp() / norm
}

///
/// Build the overlap integral of two Gaussians of width `sigma` whose
/// centres sit `d` apart:
///
/// ```text
/// kpi(d) = integral of g_sigma(t) * g_sigma(t - d) over t
/// ```
///
/// The product of two equal-width Gaussians integrates to a Gaussian of
/// width `sigma * sqrt(2)`, so this closed form is what the closure
/// evaluates. It is the pair weight used by the smoothed overlap
/// covariance in `mears-synchrony`.
///
/// # Examples
///
/// ```
/// use mears_core::kernel::gaussian_product_integral;
///
/// let kpi = gaussian_product_integral(0.5_f64);
/// // at zero offset this is 1 / (2 * sigma * sqrt(pi))
/// assert!((kpi(0.0) - 0.5641895835477563).abs() < 1e-12);
/// ```
pub fn gaussian_product_integral<F>(sigma: F) -> impl Fn(F) -> F
where
    F: Float + FloatConst,
{
    let two = F::one() + F::one();
    let four = two * two;
    let norm = two * sigma * F::PI().sqrt();
    move |d| (-(d * d) / (four * sigma * sigma)).exp() / norm
}
