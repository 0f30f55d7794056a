use std::{cmp::Ordering, ops::Add};
use num_traits::Zero;


/// Edge weight / accumulated path cost
/// Wraps f64 with a total order so it can key a BinaryHeap
#[derive(Clone, Copy, Debug, Default)]
pub struct Cost(pub f64);

impl Cost {
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, other: Cost) -> Cost {
        Cost(self.0 + other.0)
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Cost(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Cost {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity_sorts_last() {
        let mut costs = vec![Cost::INFINITY, Cost(3.0), Cost::zero(), Cost(1.5)];
        costs.sort();
        assert_eq!(costs, vec![Cost(0.0), Cost(1.5), Cost(3.0), Cost::INFINITY]);
    }

    #[test]
    fn test_add_with_infinity_stays_infinite() {
        let total = Cost(4.0) + Cost::INFINITY;
        assert!(!total.is_finite());
        assert_eq!(total, Cost::INFINITY);
    }
}
