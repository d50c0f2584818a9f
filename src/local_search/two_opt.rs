//! 2-opt improvement for single tours with a fixed start.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` (never moving position 0), compute the
//! change in length from reversing the segment `tour[i..=j]`:
//!
//! ```text
//! delta = d(t[i-1], t[j]) + d(t[i], t[j+1]) - d(t[i-1], t[i]) - d(t[j], t[j+1])
//! ```
//!
//! where `t[j+1]` wraps to the start for closed tours and is absent for the
//! last position of an open tour. Reversals with `delta < 0` are applied
//! until a full pass finds none (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::CostMatrix;
use crate::models::Tour;

/// Applies 2-opt to a tour, keeping its first node in place.
///
/// The returned tour is never longer than the input.
///
/// # Examples
///
/// ```
/// use u_aco::distance::CostMatrix;
/// use u_aco::local_search::two_opt_improve;
/// use u_aco::models::Tour;
///
/// let mut dm = CostMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let order = vec![0, 2, 1, 3];
/// let length = dm.tour_length(&order, false);
/// let improved = two_opt_improve(&Tour::new(order, length, false), &dm);
/// assert_eq!(improved.order(), &[0, 1, 2, 3]);
/// assert!((improved.length() - 3.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(tour: &Tour, costs: &CostMatrix) -> Tour {
    let closed = tour.is_closed();
    let mut current = tour.order().to_vec();
    let n = current.len();
    if n < 3 {
        return tour.clone();
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, costs, closed, i, j);
                if delta < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let length = costs.tour_length(&current, closed);
    if length < tour.length() {
        Tour::new(current, length, closed)
    } else {
        tour.clone()
    }
}

/// Distance change from reversing `tour[i..=j]`, `1 <= i < j < n`.
fn two_opt_delta(tour: &[usize], costs: &CostMatrix, closed: bool, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let prev_i = tour[i - 1];
    let next_j = if j + 1 < n {
        Some(tour[j + 1])
    } else if closed {
        Some(tour[0])
    } else {
        None
    };

    let mut old_cost = costs.get(prev_i, tour[i]);
    let mut new_cost = costs.get(prev_i, tour[j]);
    if let Some(next) = next_j {
        old_cost += costs.get(tour[j], next);
        new_cost += costs.get(tour[i], next);
    }
    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> CostMatrix {
        let n = coords.len();
        let mut dm = CostMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let dx = coords[i].0 - coords[j].0;
                let dy = coords[i].1 - coords[j].1;
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    fn tour(dm: &CostMatrix, order: Vec<usize>, closed: bool) -> Tour {
        let length = dm.tour_length(&order, closed);
        Tour::new(order, length, closed)
    }

    #[test]
    fn test_2opt_uncrosses_square() {
        let dm = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let crossed = tour(&dm, vec![0, 2, 1, 3], true);
        let improved = two_opt_improve(&crossed, &dm);
        assert!((improved.length() - 4.0).abs() < 1e-10);
        assert_eq!(improved.start(), Some(0));
        assert!(improved.is_permutation(4));
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let t = tour(&dm, vec![0, 1, 2, 3], false);
        let improved = two_opt_improve(&t, &dm);
        assert_eq!(improved, t);
    }

    #[test]
    fn test_2opt_open_tail_reversal() {
        // Start at 0; optimal open path is 0,1,2,3
        let dm = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let t = tour(&dm, vec![0, 3, 2, 1], false);
        let improved = two_opt_improve(&t, &dm);
        assert_eq!(improved.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_2opt_small_tours_unchanged() {
        let dm = points(&[(0.0, 0.0), (1.0, 0.0)]);
        let t = tour(&dm, vec![1, 0], true);
        assert_eq!(two_opt_improve(&t, &dm), t);
    }

    #[test]
    fn test_2opt_never_worse() {
        let dm = points(&[(0.0, 0.0), (5.0, 1.0), (1.0, 4.0), (3.0, 3.0), (6.0, 6.0), (2.0, 7.0)]);
        for closed in [true, false] {
            let t = tour(&dm, vec![0, 4, 1, 5, 2, 3], closed);
            let improved = two_opt_improve(&t, &dm);
            assert!(improved.length() <= t.length() + 1e-10);
            assert!(improved.is_permutation(6));
        }
    }
}
