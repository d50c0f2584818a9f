//! Tour type.

use serde::{Deserialize, Serialize};

/// An ordered visit sequence over matrix positions.
///
/// A closed tour returns from the last node to the first; an open tour ends
/// at its last node. The stored length is set by whoever built the tour
/// (ants, 2-opt, the cost matrix).
///
/// # Examples
///
/// ```
/// use u_aco::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1], 12.5, true);
/// assert_eq!(tour.len(), 3);
/// assert!(tour.is_permutation(3));
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
    closed: bool,
}

impl Tour {
    /// Creates a tour from a visit order and its total length.
    pub fn new(order: Vec<usize>, length: f64, closed: bool) -> Self {
        Self {
            order,
            length,
            closed,
        }
    }

    /// Visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning its visit order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total length, including the closing edge for closed tours.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if the tour returns to its first node.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// First node of the tour.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Edges in travel order. Closed tours end with `(last, first)`.
    ///
    /// A closed tour of a single node has no edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let closing = match (self.closed, self.order.first(), self.order.last()) {
            (true, Some(&first), Some(&last)) if self.order.len() > 1 => Some((last, first)),
            _ => None,
        };
        self.order
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Returns `true` if the tour visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.order {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Rotates a closed tour so it begins at `node`.
    ///
    /// Open tours and tours not containing `node` are left unchanged.
    pub fn rotate_to(&mut self, node: usize) {
        if !self.closed {
            return;
        }
        if let Some(pos) = self.order.iter().position(|&x| x == node) {
            self.order.rotate_left(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_accessors() {
        let t = Tour::new(vec![2, 0, 1], 7.0, false);
        assert_eq!(t.order(), &[2, 0, 1]);
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.length(), 7.0);
        assert!(!t.is_closed());
        assert_eq!(t.start(), Some(2));
    }

    #[test]
    fn test_open_edges_skip_return() {
        let t = Tour::new(vec![0, 1, 2], 0.0, false);
        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_closed_edges_include_return() {
        let t = Tour::new(vec![0, 1], 0.0, true);
        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let t = Tour::new(vec![4], 0.0, true);
        assert_eq!(t.edges().count(), 0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Tour::new(vec![3, 1, 0, 2], 0.0, true).is_permutation(4));
        assert!(!Tour::new(vec![0, 1, 1, 2], 0.0, true).is_permutation(4));
        assert!(!Tour::new(vec![0, 1, 2], 0.0, true).is_permutation(4));
        assert!(!Tour::new(vec![0, 1, 2, 4], 0.0, true).is_permutation(4));
    }

    #[test]
    fn test_rotate_closed() {
        let mut t = Tour::new(vec![10, 20, 30, 40], 1.0, true);
        t.rotate_to(30);
        assert_eq!(t.order(), &[30, 40, 10, 20]);
        assert_eq!(t.length(), 1.0);
    }

    #[test]
    fn test_rotate_missing_or_open_is_noop() {
        let mut closed = Tour::new(vec![1, 2, 3], 1.0, true);
        closed.rotate_to(99);
        assert_eq!(closed.order(), &[1, 2, 3]);

        let mut open = Tour::new(vec![1, 2, 3], 1.0, false);
        open.rotate_to(2);
        assert_eq!(open.order(), &[1, 2, 3]);
    }
}
