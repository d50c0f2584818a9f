//! Ant colony solver.
//!
//! - [`ColonyConfig`] / [`Mode`] — parameters and rule selection
//! - [`ColonyStrategy`] — edge choice and deposit rule per mode (AS, EAS, ACS)
//! - [`Ant`] — construction of one tour over read-only [`Trails`]
//! - [`ColonySolver`] — the step loop, returning a [`SolveResult`]
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant colony system: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Trans. EC*
//! 1(1), 53-66.

mod ant;
mod config;
mod record;
mod result;
mod solver;
mod strategy;

pub use ant::{Ant, Trails};
pub use config::{ColonyConfig, Mode};
pub use record::BestTourRecord;
pub use result::{SolveResult, SolverState, Termination};
pub use solver::ColonySolver;
pub use strategy::{
    deposit_amount, strategy_for, AntColonySystem, AntSystem, ColonyStrategy, ElitistAntSystem,
};
