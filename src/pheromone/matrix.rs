//! Dense symmetric pheromone matrix.

use crate::models::Tour;

/// Edge intensities τ(i, j) over the nodes of one solve.
///
/// Symmetric: [`reinforce`](Self::reinforce) writes both directions. No
/// entry ever drops below the floor given at construction, so every edge
/// keeps a non-zero selection probability.
///
/// # Examples
///
/// ```
/// use u_aco::models::Tour;
/// use u_aco::pheromone::PheromoneMatrix;
///
/// let mut pm = PheromoneMatrix::new(3, 1.0, 1e-6);
/// pm.evaporate(0.5);
/// assert!((pm.intensity(0, 1) - 0.5).abs() < 1e-12);
///
/// pm.reinforce(&Tour::new(vec![0, 1, 2], 4.0, true), 0.25);
/// assert!((pm.intensity(1, 0) - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
    floor: f64,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix with every entry set to `tau0`.
    ///
    /// `tau0` below `floor` is raised to the floor.
    pub fn new(size: usize, tau0: f64, floor: f64) -> Self {
        Self {
            data: vec![tau0.max(floor); size * size],
            size,
            floor,
        }
    }

    /// Current intensity of edge `(i, j)`, never below the floor.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn intensity(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j].max(self.floor)
    }

    /// Multiplies every entry by `1 - rho`, clamping at the floor.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        let floor = self.floor;
        for tau in &mut self.data {
            *tau = (*tau * keep).max(floor);
        }
    }

    /// Adds `amount` to both directions of every edge of `tour`.
    pub fn reinforce(&mut self, tour: &Tour, amount: f64) {
        for (i, j) in tour.edges() {
            self.data[i * self.size + j] += amount;
            self.data[j * self.size + i] += amount;
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lower bound on every intensity.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Smallest off-diagonal intensity, `None` for fewer than two nodes.
    pub fn min_intensity(&self) -> Option<f64> {
        self.off_diagonal().reduce(f64::min)
    }

    /// Largest off-diagonal intensity, `None` for fewer than two nodes.
    pub fn max_intensity(&self) -> Option<f64> {
        self.off_diagonal().reduce(f64::max)
    }

    fn off_diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size).flat_map(move |i| {
            (0..self.size)
                .filter(move |&j| j != i)
                .map(move |j| self.intensity(i, j))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_uniform() {
        let pm = PheromoneMatrix::new(4, 0.3, 1e-9);
        assert_eq!(pm.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert_eq!(pm.intensity(i, j), 0.3);
                }
            }
        }
        assert_eq!(pm.min_intensity(), Some(0.3));
        assert_eq!(pm.max_intensity(), Some(0.3));
    }

    #[test]
    fn test_tau0_below_floor_raised() {
        let pm = PheromoneMatrix::new(2, 0.0, 1e-3);
        assert_eq!(pm.intensity(0, 1), 1e-3);
    }

    #[test]
    fn test_evaporate_exact_factor() {
        let mut pm = PheromoneMatrix::new(3, 2.0, 1e-12);
        pm.reinforce(&Tour::new(vec![0, 1], 1.0, false), 1.0);
        let before: Vec<f64> = (0..9).map(|k| pm.intensity(k / 3, k % 3)).collect();
        pm.evaporate(0.1);
        for k in 0..9 {
            let after = pm.intensity(k / 3, k % 3);
            assert!((after - before[k] * 0.9).abs() < 1e-12);
            assert!(after < before[k]);
        }
    }

    #[test]
    fn test_evaporate_never_below_floor() {
        let mut pm = PheromoneMatrix::new(3, 1.0, 0.01);
        for _ in 0..1000 {
            pm.evaporate(0.5);
        }
        assert_eq!(pm.min_intensity(), Some(0.01));
        assert!(pm.min_intensity().expect("3 nodes") > 0.0);
    }

    #[test]
    fn test_reinforce_symmetric_closed() {
        let mut pm = PheromoneMatrix::new(3, 1.0, 1e-9);
        pm.reinforce(&Tour::new(vec![0, 1, 2], 3.0, true), 0.5);
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            assert!((pm.intensity(i, j) - 1.5).abs() < 1e-12);
            assert!((pm.intensity(j, i) - 1.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reinforce_open_skips_return_edge() {
        let mut pm = PheromoneMatrix::new(3, 1.0, 1e-9);
        pm.reinforce(&Tour::new(vec![0, 1, 2], 2.0, false), 0.5);
        assert!((pm.intensity(0, 1) - 1.5).abs() < 1e-12);
        assert!((pm.intensity(2, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_max_single_node() {
        let pm = PheromoneMatrix::new(1, 1.0, 1e-9);
        assert_eq!(pm.min_intensity(), None);
        assert_eq!(pm.max_intensity(), None);
    }
}
