//! Dense cost matrix.

use crate::error::{Error, Result};
use crate::models::Node;

/// A dense n×n cost matrix stored in row-major order, in kilometers.
///
/// Built once per solve from node coordinates via [`haversine_km`] and never
/// mutated afterwards.
///
/// [`haversine_km`]: super::haversine_km
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
/// use u_aco::distance::CostMatrix;
///
/// let nodes = Node::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
/// let cm = CostMatrix::from_nodes(&nodes).unwrap();
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(1, 1), 0.0);
/// assert_eq!(cm.get(0, 1), cm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the great-circle cost matrix for the given nodes.
    ///
    /// Returns [`Error::Computation`] if any distance comes out non-finite.
    pub fn from_nodes(nodes: &[Node]) -> Result<Self> {
        let n = nodes.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                if !d.is_finite() {
                    return Err(Error::computation(format!(
                        "distance between node {} and node {} is {d}",
                        nodes[i].id(),
                        nodes[j].id()
                    )));
                }
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        Ok(cm)
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`. Entries
    /// are not inspected; non-finite costs surface when an ant walks them.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// NaN costs sort last. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Total cost of visiting `order` in sequence, plus the return edge
    /// when `closed`.
    pub fn tour_length(&self, order: &[usize], closed: bool) -> f64 {
        let mut length: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        if closed && order.len() > 1 {
            length += self.get(order[order.len() - 1], order[0]);
        }
        length
    }
}
