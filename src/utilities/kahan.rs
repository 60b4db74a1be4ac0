//! Kahan-compensated summation.
//!
//! Grounded on Aleph's `aleph::math::KahanSummation<T>`
//! (`math/KahanSummation.hh`), which accumulates persistence-diagram
//! sums (total persistence, p-norms) to within 1 ULP of the true sum.
//! The teacher's own `solar` crate has no summation utility of its own
//! (its numeric work is all per-entry scale/gather on sparse vectors),
//! so this is carried over from Aleph rather than generalized from an
//! existing `solar` module.

use num_traits::{Float, Zero};

/// Running Kahan-compensated sum.
#[derive(Debug, Clone, Copy)]
pub struct KahanSum<T> {
    sum: T,
    compensation: T,
}

impl<T: Float> KahanSum<T> {
    pub fn new() -> Self {
        KahanSum {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    pub fn add(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    pub fn total(&self) -> T {
        self.sum
    }
}

impl<T: Float> Default for KahanSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum an iterator with Kahan compensation.
pub fn kahan_sum<T: Float>(values: impl IntoIterator<Item = T>) -> T {
    let mut acc = KahanSum::new();
    for v in values {
        acc.add(v);
    }
    acc.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_naive_sum_on_well_conditioned_input() {
        let values: Vec<f64> = (0..10_000).map(|i| (i as f64).sin()).collect();
        let naive: f64 = values.iter().sum();
        let compensated = kahan_sum(values.iter().copied());
        assert!((naive - compensated).abs() <= 1e-9);
    }

    #[test]
    fn recovers_precision_lost_by_naive_summation() {
        // A classic case where naive summation loses the small terms.
        let mut values = vec![1.0e16_f64];
        values.extend(std::iter::repeat(1.0_f64).take(1000));
        values.push(-1.0e16_f64);

        let compensated = kahan_sum(values.iter().copied());
        assert_eq!(compensated, 1000.0);
    }
}
