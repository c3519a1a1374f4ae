use num_traits::Float;

use mears_core::errors::TrainError;
use mears_core::utils::{ensure_sorted, ensure_window};

///
/// Scan two sorted event trains and invoke `visit` once for every close
/// pair, in a single forward pass.
///
/// A pair `(a[i], b[j])` is close when `a[i]` falls inside the window
/// anchored at `b[j]`:
///
/// ```text
/// b[j] - delta < a[i] <= b[j] + delta
/// ```
///
/// The window is open on the left and closed on the right, so an event
/// sitting exactly `delta` after its partner still counts while one
/// sitting exactly `delta` before it does not. Both comparisons are
/// evaluated on the raw values with no algebraic rearrangement, which
/// keeps the boundary behaviour bit-for-bit reproducible.
///
/// The scan walks the shorter train as the outer sequence and drags a
/// catch-up cursor over the longer one. The cursor never rewinds, so the
/// cost is `O(la + lb + matches)`. Callbacks arrive grouped by the outer
/// train: scanning position never moves backwards in either train.
///
/// `visit` receives `(a_value, b_value, a_index, b_index)`. The argument
/// roles are fixed to the trains as passed, whichever train the scan
/// iterates as outer.
///
/// # Errors
///
/// Fails with [TrainError::NonPositiveWindow] if `delta` is not a
/// positive finite number, or [TrainError::UnsortedInput] if either
/// train is not sorted ascending. Validation runs before any callback.
///
/// # Examples
///
/// ```
/// use mears_neighbours::scan_close_pairs;
///
/// let a = [0.0_f64, 1.0, 2.0];
/// let b = [0.05, 1.05, 5.0];
///
/// let mut pairs = Vec::new();
/// scan_close_pairs(&a, &b, 0.1, |av, bv, i, j| {
///     pairs.push((i, j, (av - bv).abs()));
/// })?;
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!((pairs[0].0, pairs[0].1), (0, 0));
/// assert_eq!((pairs[1].0, pairs[1].1), (1, 1));
/// # Ok::<(), mears_core::TrainError>(())
/// ```
///
/// An empty train on either side yields no callbacks:
///
/// ```
/// use mears_neighbours::scan_close_pairs;
///
/// let mut called = false;
/// scan_close_pairs::<f64, _>(&[], &[1.0], 0.5, |_, _, _, _| called = true)?;
/// assert!(!called);
/// # Ok::<(), mears_core::TrainError>(())
/// ```
pub fn scan_close_pairs<F, V>(a: &[F], b: &[F], delta: F, mut visit: V) -> Result<(), TrainError>
where
    F: Float,
    V: FnMut(F, F, usize, usize),
{
    ensure_window(delta)?;
    ensure_sorted(a)?;
    ensure_sorted(b)?;

    if a.len() <= b.len() {
        scan_a_outer(a, b, delta, &mut visit);
    } else {
        scan_b_outer(a, b, delta, &mut visit);
    }
    Ok(())
}

/// Outer loop over `a`, catch-up cursor over `b`.
#[inline]
fn scan_a_outer<F, V>(a: &[F], b: &[F], delta: F, visit: &mut V)
where
    F: Float,
    V: FnMut(F, F, usize, usize),
{
    let mut lo = 0;
    for (i, &av) in a.iter().enumerate() {
        // skip b events whose window ends before av
        while lo < b.len() && av > b[lo] + delta {
            lo += 1;
        }
        // emit while av is past the left edge of the window at b[j]
        let mut j = lo;
        while j < b.len() && b[j] - delta < av {
            visit(av, b[j], i, j);
            j += 1;
        }
    }
}

/// Outer loop over `b`, catch-up cursor over `a`. Same window rule with
/// the comparisons negated rather than rearranged, so the two
/// orientations agree on every pair.
#[inline]
fn scan_b_outer<F, V>(a: &[F], b: &[F], delta: F, visit: &mut V)
where
    F: Float,
    V: FnMut(F, F, usize, usize),
{
    let mut lo = 0;
    for (j, &bv) in b.iter().enumerate() {
        // skip a events at or before the open left edge
        while lo < a.len() && bv - delta >= a[lo] {
            lo += 1;
        }
        // emit while a[i] has not left the window anchored at bv
        let mut i = lo;
        while i < a.len() && a[i] <= bv + delta {
            visit(a[i], bv, i, j);
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    type Hit = (f64, f64, usize, usize);

    fn collect(a: &[f64], b: &[f64], delta: f64) -> Result<Vec<Hit>, TrainError> {
        let mut hits = Vec::new();
        scan_close_pairs(a, b, delta, |av, bv, i, j| hits.push((av, bv, i, j)))?;
        Ok(hits)
    }

    #[fixture]
    fn staggered() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 1.0, 2.0], vec![0.05, 1.05, 5.0])
    }

    #[rstest]
    fn finds_the_two_close_pairs(staggered: (Vec<f64>, Vec<f64>)) {
        let (a, b) = staggered;
        let hits = collect(&a, &b, 0.1).unwrap();

        let indices: Vec<(usize, usize)> = hits.iter().map(|h| (h.2, h.3)).collect();
        assert_eq!(indices, vec![(0, 0), (1, 1)]);
        for (av, bv, _, _) in &hits {
            assert!(((av - bv).abs() - 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn right_edge_is_closed_left_edge_is_open() {
        // exactly delta after the partner: inside
        let hits = collect(&[2.0], &[1.0], 1.0).unwrap();
        assert_eq!(hits.len(), 1);

        // exactly delta before the partner: outside
        let hits = collect(&[0.0], &[1.0], 1.0).unwrap();
        assert_eq!(hits.len(), 0);
    }

    #[test]
    fn roles_stay_fixed_when_b_is_shorter() {
        // a longer than b forces the b-outer orientation
        let a = [0.0, 1.0, 2.0, 3.0, 4.0];
        let b = [2.05];
        let hits = collect(&a, &b, 0.1).unwrap();
        assert_eq!(hits, vec![(2.0, 2.05, 2, 0)]);
    }

    #[test]
    fn orientations_agree_on_every_pair() {
        let x = [0.1, 0.35, 0.4, 0.8, 1.3, 1.31, 2.0];
        let y = [0.0, 0.36, 0.37, 1.29, 2.05];

        // forcing each orientation by padding the other train would change
        // the inputs, so compare against a quadratic reference instead
        let mut expected = Vec::new();
        for (i, &av) in x.iter().enumerate() {
            for (j, &bv) in y.iter().enumerate() {
                if bv - 0.1 < av && av <= bv + 0.1 {
                    expected.push((av, bv, i, j));
                }
            }
        }

        let mut hits = collect(&x, &y, 0.1).unwrap();
        hits.sort_by(|p, q| (p.2, p.3).cmp(&(q.2, q.3)));
        assert_eq!(hits, expected);
    }

    #[test]
    fn callbacks_group_by_the_shorter_train() {
        // b is shorter, so it is walked as the outer sequence and its
        // index never decreases across callbacks
        let a = [0.0, 0.01, 0.02];
        let b = [0.0, 0.015];
        let hits = collect(&a, &b, 0.1).unwrap();
        assert_eq!(hits.len(), 6);
        let outer: Vec<usize> = hits.iter().map(|h| h.3).collect();
        let mut sorted = outer.clone();
        sorted.sort_unstable();
        assert_eq!(outer, sorted);
    }

    #[test]
    fn ties_in_a_train_all_match() {
        let hits = collect(&[1.0, 1.0], &[1.0], 0.5).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[rstest]
    #[case(&[1.0, 0.5], &[0.0])]
    #[case(&[0.0], &[1.0, 0.5])]
    fn unsorted_input_faults_before_any_callback(#[case] a: &[f64], #[case] b: &[f64]) {
        let mut called = false;
        let res = scan_close_pairs(a, b, 0.1, |_, _, _, _| called = true);
        assert!(matches!(res, Err(TrainError::UnsortedInput { index: 1 })));
        assert!(!called);
    }

    #[test]
    fn zero_window_is_rejected() {
        let res = scan_close_pairs(&[0.0_f64], &[0.0], 0.0, |_, _, _, _| {});
        assert!(matches!(res, Err(TrainError::NonPositiveWindow)));
    }

    #[test]
    fn wide_window_degrades_to_all_pairs() {
        let a = [0.0, 1.0, 2.0];
        let b = [0.5, 1.5];
        let hits = collect(&a, &b, 100.0).unwrap();
        assert_eq!(hits.len(), a.len() * b.len());
    }
}
