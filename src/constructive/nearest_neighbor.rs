//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from `start`, always move to the nearest
//! unvisited node. Used to scale the default initial pheromone.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.

use crate::distance::CostMatrix;
use crate::models::Tour;

/// Constructs a tour over every node of `costs` using the nearest-neighbor
/// heuristic.
///
/// # Examples
///
/// ```
/// use u_aco::distance::CostMatrix;
/// use u_aco::constructive::nearest_neighbor_tour;
///
/// // Nodes on a line at 0, 1, 2, 3
/// let mut dm = CostMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let tour = nearest_neighbor_tour(&dm, 0, true);
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert!((tour.length() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour(costs: &CostMatrix, start: usize, closed: bool) -> Tour {
    let n = costs.size();
    if n == 0 {
        return Tour::new(Vec::new(), 0.0, closed);
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(next) = costs.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    let length = costs.tour_length(&order, closed);
    Tour::new(order, length, closed)
}
