//! Colony solver: the construct / evaporate / reinforce loop.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::ant::{Ant, Trails};
use super::config::ColonyConfig;
use super::record::BestTourRecord;
use super::result::{SolveResult, SolverState, Termination};
use super::strategy::{strategy_for, ColonyStrategy};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::local_search::two_opt_improve;
use crate::models::{Node, Tour};
use crate::pheromone::PheromoneMatrix;

/// Ant colony solver for tours over geographic nodes.
///
/// Every call to a `solve*` method owns fresh cost and pheromone matrices;
/// nothing is shared between calls.
///
/// # Examples
///
/// ```
/// use u_aco::colony::{ColonyConfig, ColonySolver};
///
/// let solver = ColonySolver::new(ColonyConfig::default().with_seed(42));
/// let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let result = solver.solve_coordinates(&square, Some(0)).unwrap();
///
/// assert_eq!(result.best_tour.len(), 4);
/// assert_eq!(result.best_tour[0], 0);
/// assert!(result.best_length < 4.0 * 111.3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColonySolver {
    config: ColonyConfig,
}

impl ColonySolver {
    pub fn new(config: ColonyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Solves over `(lat, lon)` pairs numbered 0..N-1 in input order.
    ///
    /// `start` is an input index; `None` lets every ant start anywhere.
    pub fn solve_coordinates(
        &self,
        coordinates: &[(f64, f64)],
        start: Option<usize>,
    ) -> Result<SolveResult> {
        ensure_node_count(coordinates.len())?;
        let nodes = Node::from_coordinates(coordinates)?;
        self.solve(&nodes, start)
    }

    /// Solves over caller nodes. `start` and the returned tour use node ids.
    pub fn solve(&self, nodes: &[Node], start: Option<usize>) -> Result<SolveResult> {
        ensure_node_count(nodes.len())?;
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(nodes.len());
        for node in nodes {
            if !seen.insert(node.id()) {
                return Err(Error::invalid_input(format!(
                    "duplicate node id {}",
                    node.id()
                )));
            }
        }
        let start = start
            .map(|id| {
                nodes
                    .iter()
                    .position(|n| n.id() == id)
                    .ok_or_else(|| Error::invalid_input(format!("start node {id} not found")))
            })
            .transpose()?;

        let costs = CostMatrix::from_nodes(nodes)?;
        let mut result = Colony::new(&self.config, costs, start).run()?;
        for id in &mut result.best_tour {
            *id = nodes[*id].id();
        }
        Ok(result)
    }

    /// Solves over an explicit cost matrix; positions are node ids.
    pub fn solve_matrix(&self, costs: CostMatrix, start: Option<usize>) -> Result<SolveResult> {
        ensure_node_count(costs.size())?;
        self.config.validate()?;
        if let Some(s) = start {
            if s >= costs.size() {
                return Err(Error::invalid_input(format!(
                    "start node {s} out of range for {} nodes",
                    costs.size()
                )));
            }
        }
        Colony::new(&self.config, costs, start).run()
    }
}

fn ensure_node_count(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "a tour needs at least 2 nodes, got {n}"
        )));
    }
    Ok(())
}

/// State of one solve call.
struct Colony<'a> {
    config: &'a ColonyConfig,
    strategy: Box<dyn ColonyStrategy>,
    costs: CostMatrix,
    pheromone: PheromoneMatrix,
    record: BestTourRecord,
    rng: StdRng,
    start: Option<usize>,
}

impl<'a> Colony<'a> {
    fn new(config: &'a ColonyConfig, costs: CostMatrix, start: Option<usize>) -> Self {
        let n = costs.size();
        let tau0 = config
            .initial_pheromone
            .unwrap_or_else(|| default_tau0(&costs, start.unwrap_or(0), config.closed));
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            strategy: strategy_for(config),
            pheromone: PheromoneMatrix::new(n, tau0, config.min_pheromone),
            costs,
            record: BestTourRecord::new(),
            rng,
            start,
        }
    }

    fn run(mut self) -> Result<SolveResult> {
        let config = self.config;
        let n = self.costs.size();
        let deadline = config
            .time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok());

        info!(
            "solving {n} nodes: mode={:?} ants={} steps={} closed={}",
            config.mode, config.colony_size, config.steps, config.closed
        );
        let began = Instant::now();
        debug!("colony {:?} -> {:?}", SolverState::Idle, SolverState::Running);

        let mut history = Vec::with_capacity(config.steps);
        let mut stale = 0usize;
        let mut termination = Termination::Exhausted;

        for step in 0..config.steps {
            if self.step()? {
                debug!("step {step}: new best {:.6}", self.record.length());
                stale = 0;
            } else {
                stale += 1;
            }
            history.push(self.record.length());

            if config.stagnation_limit.is_some_and(|limit| stale >= limit) {
                termination = Termination::Converged;
                break;
            }
            let more_steps = step + 1 < config.steps;
            if more_steps && deadline.is_some_and(|limit| began.elapsed() >= limit) {
                termination = Termination::TimedOut;
                break;
            }
        }

        let runtime = began.elapsed();
        debug!(
            "colony {:?} -> {:?}",
            SolverState::Running,
            SolverState::Finished(termination)
        );

        let closed = config.closed;
        let free_start = self.start.is_none();
        let mut best = self
            .record
            .into_tour()
            .ok_or_else(|| Error::computation("no tour was constructed"))?;
        if free_start {
            best.rotate_to(0);
        }

        info!(
            "finished after {} steps ({termination:?}) in {runtime:?}: best {:.6}",
            history.len(),
            best.length()
        );
        Ok(SolveResult {
            runtime,
            best_length: best.length(),
            best_tour: best.into_order(),
            closed,
            steps_completed: history.len(),
            termination,
            history,
        })
    }

    /// Runs one generation; returns `true` if the best tour improved.
    fn step(&mut self) -> Result<bool> {
        let config = self.config;
        let n = self.costs.size();

        let plans: Vec<(usize, u64)> = (0..config.colony_size)
            .map(|_| {
                let start = match self.start {
                    Some(s) => s,
                    None => self.rng.random_range(0..n),
                };
                (start, self.rng.random())
            })
            .collect();

        let trails = Trails {
            costs: &self.costs,
            pheromone: &self.pheromone,
            alpha: config.alpha,
            beta: config.beta,
        };
        let tours = construct_all(
            trails,
            self.strategy.as_ref(),
            &plans,
            config.closed,
            config.parallel,
        )?;

        let mut step_best = tours
            .iter()
            .reduce(|best, t| if t.length() < best.length() { t } else { best })
            .cloned()
            .ok_or_else(|| Error::computation("colony produced no tours"))?;
        if config.local_search {
            step_best = two_opt_improve(&step_best, &self.costs);
        }
        trace!("step best {:.6}", step_best.length());
        let improved = self.record.offer(step_best);

        self.pheromone.evaporate(config.evaporation_rate);
        if let Some(best) = self.record.tour() {
            self.strategy
                .deposit(&mut self.pheromone, &tours, best, config.deposit_factor);
        }
        Ok(improved)
    }
}

/// Builds one tour per `(start, seed)` plan. Output order follows `plans`
/// whether or not the work is spread over the rayon pool.
fn construct_all(
    trails: Trails<'_>,
    strategy: &dyn ColonyStrategy,
    plans: &[(usize, u64)],
    closed: bool,
    parallel: bool,
) -> Result<Vec<Tour>> {
    let build = |&(start, seed): &(usize, u64)| {
        let mut rng = StdRng::seed_from_u64(seed);
        Ant::construct(trails, strategy, start, closed, &mut rng)
    };
    if parallel {
        plans.par_iter().map(build).collect()
    } else {
        plans.iter().map(build).collect()
    }
}

/// τ0 = 1 / (n · L_nn), or 1.0 when the nearest-neighbor tour has no length.
fn default_tau0(costs: &CostMatrix, start: usize, closed: bool) -> f64 {
    let nn = nearest_neighbor_tour(costs, start, closed);
    let length = nn.length();
    if length > 0.0 && length.is_finite() {
        1.0 / (costs.size() as f64 * length)
    } else {
        1.0
    }
}
