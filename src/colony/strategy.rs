//! Edge-selection and deposit rules, one implementation per [`Mode`].

use rand::{Rng, RngCore};

use super::config::{ColonyConfig, Mode};
use crate::error::{Error, Result};
use crate::models::Tour;
use crate::pheromone::PheromoneMatrix;

/// How a colony picks edges and lays pheromone.
///
/// Ants call [`choose_next`](Self::choose_next) concurrently with only shared
/// access; [`deposit`](Self::deposit) runs once per step after every ant has
/// finished.
pub trait ColonyStrategy: Send + Sync {
    /// Picks the next node from `(node, desirability)` candidates.
    ///
    /// Desirabilities are finite and non-negative. Fails if `candidates` is
    /// empty or their total is not finite.
    fn choose_next(&self, candidates: &[(usize, f64)], rng: &mut dyn RngCore) -> Result<usize>;

    /// Reinforces trails after evaporation.
    ///
    /// `step_tours` are this step's ant tours; `best` is the best-so-far tour
    /// including this step.
    fn deposit(
        &self,
        pheromone: &mut PheromoneMatrix,
        step_tours: &[Tour],
        best: &Tour,
        deposit_factor: f64,
    );
}

/// Builds the strategy selected by `config.mode`.
pub fn strategy_for(config: &ColonyConfig) -> Box<dyn ColonyStrategy> {
    match config.mode {
        Mode::AntSystem => Box::new(AntSystem),
        Mode::ElitistAntSystem => Box::new(ElitistAntSystem {
            weight: config.elitist_weight,
        }),
        Mode::AntColonySystem => Box::new(AntColonySystem { q0: config.q0 }),
    }
}

/// Pheromone laid by a tour of the given length.
///
/// A zero-length tour (all nodes coincide) deposits `q` itself.
pub fn deposit_amount(deposit_factor: f64, length: f64) -> f64 {
    if length > 0.0 {
        deposit_factor / length
    } else {
        deposit_factor
    }
}

/// Classic Ant System (Dorigo, Maniezzo & Colorni, 1996).
#[derive(Debug, Clone, Copy, Default)]
pub struct AntSystem;

impl ColonyStrategy for AntSystem {
    fn choose_next(&self, candidates: &[(usize, f64)], rng: &mut dyn RngCore) -> Result<usize> {
        roulette(candidates, rng)
    }

    fn deposit(
        &self,
        pheromone: &mut PheromoneMatrix,
        step_tours: &[Tour],
        _best: &Tour,
        deposit_factor: f64,
    ) {
        for tour in step_tours {
            pheromone.reinforce(tour, deposit_amount(deposit_factor, tour.length()));
        }
    }
}

/// Ant System with an elitist deposit on the best-so-far tour.
#[derive(Debug, Clone, Copy)]
pub struct ElitistAntSystem {
    pub weight: f64,
}

impl ColonyStrategy for ElitistAntSystem {
    fn choose_next(&self, candidates: &[(usize, f64)], rng: &mut dyn RngCore) -> Result<usize> {
        roulette(candidates, rng)
    }

    fn deposit(
        &self,
        pheromone: &mut PheromoneMatrix,
        step_tours: &[Tour],
        best: &Tour,
        deposit_factor: f64,
    ) {
        AntSystem.deposit(pheromone, step_tours, best, deposit_factor);
        if self.weight > 0.0 {
            pheromone.reinforce(best, self.weight * deposit_amount(deposit_factor, best.length()));
        }
    }
}

/// Ant Colony System (Dorigo & Gambardella, 1997) pseudo-random
/// proportional rule with global-best update.
#[derive(Debug, Clone, Copy)]
pub struct AntColonySystem {
    pub q0: f64,
}

impl ColonyStrategy for AntColonySystem {
    fn choose_next(&self, candidates: &[(usize, f64)], rng: &mut dyn RngCore) -> Result<usize> {
        if rng.random::<f64>() < self.q0 {
            greedy(candidates)
        } else {
            roulette(candidates, rng)
        }
    }

    fn deposit(
        &self,
        pheromone: &mut PheromoneMatrix,
        _step_tours: &[Tour],
        best: &Tour,
        deposit_factor: f64,
    ) {
        pheromone.reinforce(best, deposit_amount(deposit_factor, best.length()));
    }
}

/// Highest-desirability candidate; the first one wins ties.
fn greedy(candidates: &[(usize, f64)]) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(node, weight) in candidates {
        match best {
            Some((_, w)) if weight <= w => {}
            _ => best = Some((node, weight)),
        }
    }
    best.map(|(node, _)| node)
        .ok_or_else(|| Error::computation("no unvisited node is reachable"))
}

/// Samples a candidate with probability proportional to its desirability.
///
/// If every desirability underflowed to zero the choice is uniform.
fn roulette(candidates: &[(usize, f64)], rng: &mut dyn RngCore) -> Result<usize> {
    if candidates.is_empty() {
        return Err(Error::computation("no unvisited node is reachable"));
    }
    let mut total: f64 = candidates.iter().map(|&(_, w)| w).sum();
    let mut scale = 1.0;
    if total == f64::INFINITY {
        // Finite weights whose sum overflows: sample on weights relative to the largest
        let largest = candidates.iter().map(|&(_, w)| w).fold(0.0, f64::max);
        scale = largest.recip();
        total = candidates.iter().map(|&(_, w)| w * scale).sum();
    }
    if !total.is_finite() {
        return Err(Error::computation(format!(
            "edge desirabilities sum to {total}"
        )));
    }
    if total <= 0.0 {
        return Ok(candidates[rng.random_range(0..candidates.len())].0);
    }

    let mut pick = rng.random::<f64>() * total;
    for &(node, weight) in candidates {
        pick -= weight * scale;
        if pick <= 0.0 {
            return Ok(node);
        }
    }
    // Rounding left a sliver past the last bucket
    Ok(candidates[candidates.len() - 1].0)
}
