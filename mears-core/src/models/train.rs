use std::borrow::Cow;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recorded spike train: the event times of one unit, sorted ascending.
///
/// The struct itself does not enforce ordering. Every measure validates
/// its inputs on entry, so an unsorted train is caught at the first call
/// rather than at construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpikeTrain<F> {
    /// Optional label for the recorded unit, e.g. an electrode id.
    pub unit: Option<String>,
    /// Event times, in seconds by convention.
    pub times: Vec<F>,
}

impl<F: Float> SpikeTrain<F> {
    pub fn new(times: Vec<F>) -> Self {
        SpikeTrain { unit: None, times }
    }

    pub fn with_unit<S: Into<String>>(unit: S, times: Vec<F>) -> Self {
        SpikeTrain {
            unit: Some(unit.into()),
            times,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time between the first and the last event, or zero for trains
    /// with fewer than two events.
    pub fn duration(&self) -> F {
        match (self.times.first(), self.times.last()) {
            (Some(&first), Some(&last)) => last - first,
            _ => F::zero(),
        }
    }
}

impl<F: Float> From<Vec<F>> for SpikeTrain<F> {
    fn from(times: Vec<F>) -> Self {
        SpikeTrain::new(times)
    }
}

/// Anything the measures can read event times out of.
///
/// Slices, vectors and [SpikeTrain] all implement this, so the lagged
/// measure variants accept any of them without conversion.
pub trait EventSource<F: Float> {
    /// The event times, sorted ascending.
    fn timestamps(&self) -> &[F];

    /// The event times shifted by `lag`.
    ///
    /// A zero lag borrows the underlying slice; any other lag allocates
    /// a shifted copy. Shifting by a constant preserves the ordering.
    fn timestamps_with_lag(&self, lag: F) -> Cow<'_, [F]> {
        if lag == F::zero() {
            Cow::Borrowed(self.timestamps())
        } else {
            Cow::Owned(self.timestamps().iter().map(|&t| t + lag).collect())
        }
    }
}

impl<F: Float> EventSource<F> for [F] {
    fn timestamps(&self) -> &[F] {
        self
    }
}

impl<F: Float> EventSource<F> for Vec<F> {
    fn timestamps(&self) -> &[F] {
        self
    }
}

impl<F: Float> EventSource<F> for SpikeTrain<F> {
    fn timestamps(&self) -> &[F] {
        &self.times
    }
}
