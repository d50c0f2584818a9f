//! Tour construction by a single ant.

use rand::RngCore;

use super::strategy::ColonyStrategy;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;
use crate::pheromone::PheromoneMatrix;

/// Read-only view of the colony's state shared by every ant of a step.
#[derive(Clone, Copy)]
pub struct Trails<'a> {
    pub costs: &'a CostMatrix,
    pub pheromone: &'a PheromoneMatrix,
    pub alpha: f64,
    pub beta: f64,
}

impl Trails<'_> {
    /// Desirability τ^α · (1/cost)^β of moving from `from` to `to`.
    ///
    /// Returns `Ok(None)` for a zero-cost edge, or one so short that its
    /// desirability overflows; such an edge is taken unconditionally.
    fn desirability(&self, from: usize, to: usize) -> Result<Option<f64>> {
        let cost = self.costs.get(from, to);
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::computation(format!(
                "cost({from}, {to}) is {cost}"
            )));
        }
        if cost == 0.0 {
            return Ok(None);
        }
        let eta = cost.recip().powf(self.beta);
        let tau = self.pheromone.intensity(from, to).powf(self.alpha);
        let weight = tau * eta;
        if eta == f64::INFINITY || weight == f64::INFINITY {
            return Ok(None);
        }
        if !weight.is_finite() {
            return Err(Error::computation(format!(
                "desirability of edge ({from}, {to}) is {weight}"
            )));
        }
        Ok(Some(weight))
    }
}

/// Partial tour of one ant.
#[derive(Debug, Clone)]
pub struct Ant {
    tour: Vec<usize>,
    visited: Vec<bool>,
    length: f64,
}

impl Ant {
    /// Places an ant on `start` among `n` nodes.
    pub fn new(n: usize, start: usize) -> Self {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tour = Vec::with_capacity(n);
        tour.push(start);
        Self {
            tour,
            visited,
            length: 0.0,
        }
    }

    /// Node the ant currently stands on.
    pub fn current(&self) -> usize {
        self.tour[self.tour.len() - 1]
    }

    /// Returns `true` once every node has been visited.
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }

    /// Visited nodes in order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Length walked so far.
    pub fn length(&self) -> f64 {
        self.length
    }

    fn visit(&mut self, node: usize, cost: f64) {
        self.visited[node] = true;
        self.tour.push(node);
        self.length += cost;
    }

    /// Walks a full tour from `start`, returning to it when `closed`.
    pub fn construct(
        trails: Trails<'_>,
        strategy: &dyn ColonyStrategy,
        start: usize,
        closed: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Tour> {
        let n = trails.costs.size();
        let mut ant = Ant::new(n, start);
        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(n);

        while !ant.is_complete() {
            let current = ant.current();
            candidates.clear();
            let mut free_move = None;
            for next in (0..n).filter(|&j| !ant.visited[j]) {
                match trails.desirability(current, next)? {
                    Some(weight) => candidates.push((next, weight)),
                    None => {
                        free_move = Some(next);
                        break;
                    }
                }
            }
            let next = match free_move {
                Some(next) => next,
                None => strategy.choose_next(&candidates, rng)?,
            };
            ant.visit(next, trails.costs.get(current, next));
        }

        if closed && n > 1 {
            let back = trails.costs.get(ant.current(), start);
            if !back.is_finite() {
                return Err(Error::computation(format!(
                    "cost({}, {start}) is {back}",
                    ant.current()
                )));
            }
            ant.length += back;
        }

        Ok(Tour::new(ant.tour, ant.length, closed))
    }
}
