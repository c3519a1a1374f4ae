use num_traits::Float;
use sprs::TriMat;

use crate::scan::scan_close_pairs;
use mears_core::errors::TrainError;

///
/// Collect every close pair of two sorted event trains into a sparse
/// matrix of absolute time distances.
///
/// The scan is a single forward pass (see [scan_close_pairs] for the
/// window rule); each close pair appends its indices and distance to
/// three parallel triplet buffers, which are assembled into a
/// [sprs::TriMat] at the end.
///
/// The matrix is oriented so that rows always index the shorter train
/// and columns the longer one, keeping the row count at
/// `min(la, lb)` regardless of argument order:
///
/// - `a` at least as long as `b`: entry `(j, i)`, shape `(lb, la)`;
/// - `b` longer than `a`: entry `(i, j)`, shape `(la, lb)`.
///
/// Only the storage layout flips. The window rule itself keeps its
/// `(a, b)` roles either way, so the set of stored pairs is identical
/// under either orientation.
///
/// Beware of windows much wider than the typical event spacing: every
/// pair then qualifies and the result densifies towards `la * lb`
/// entries, which also costs `O(la * lb)` time to enumerate.
///
/// # Examples
///
/// ```
/// use mears_neighbours::close_neighbours;
///
/// let a = [0.0_f64, 1.0, 2.0];
/// let b = [0.05, 1.05, 5.0];
///
/// let mat = close_neighbours(&a, &b, 0.1)?;
/// assert_eq!(mat.shape(), (3, 3));
/// assert_eq!(mat.nnz(), 2);
///
/// for (dist, (row, col)) in mat.triplet_iter() {
///     assert_eq!(row, col);
///     assert!((dist - 0.05).abs() < 1e-12);
/// }
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn close_neighbours<F: Float>(a: &[F], b: &[F], delta: F) -> Result<TriMat<F>, TrainError> {
    let (la, lb) = (a.len(), b.len());
    let swap = lb > la;

    let mut rows = Vec::new();
    let mut cols = Vec::new();
    let mut dists = Vec::new();
    scan_close_pairs(a, b, delta, |av, bv, i, j| {
        let (row, col) = if swap { (i, j) } else { (j, i) };
        rows.push(row);
        cols.push(col);
        dists.push((av - bv).abs());
    })?;

    let shape = (la.min(lb), la.max(lb));
    Ok(TriMat::from_triplets(shape, rows, cols, dists))
}
