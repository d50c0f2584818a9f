//! Best-so-far tour bookkeeping.

use crate::models::Tour;

/// Shortest tour offered so far.
///
/// Only a strictly shorter tour replaces the current one, so the recorded
/// length never increases and ties keep the earlier tour.
#[derive(Debug, Clone, Default)]
pub struct BestTourRecord {
    tour: Option<Tour>,
}

impl BestTourRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate; returns `true` if it became the new best.
    pub fn offer(&mut self, candidate: Tour) -> bool {
        let better = match &self.tour {
            Some(current) => candidate.length() < current.length(),
            None => true,
        };
        if better {
            self.tour = Some(candidate);
        }
        better
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Best length, `f64::INFINITY` while empty.
    pub fn length(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, Tour::length)
    }

    pub fn into_tour(self) -> Option<Tour> {
        self.tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let r = BestTourRecord::new();
        assert!(r.tour().is_none());
        assert_eq!(r.length(), f64::INFINITY);
    }

    #[test]
    fn test_strict_improvement_only() {
        let mut r = BestTourRecord::new();
        assert!(r.offer(Tour::new(vec![0, 1, 2], 10.0, true)));
        assert!(!r.offer(Tour::new(vec![0, 2, 1], 10.0, true)));
        assert_eq!(r.tour().map(Tour::order), Some(&[0, 1, 2][..]));
        assert!(!r.offer(Tour::new(vec![0, 2, 1], 11.0, true)));
        assert!(r.offer(Tour::new(vec![0, 2, 1], 9.5, true)));
        assert_eq!(r.length(), 9.5);
        assert_eq!(r.into_tour().map(Tour::into_order), Some(vec![0, 2, 1]));
    }
}
