//! # u-aco
//!
//! Ant colony optimization for short visiting orders over geographic points
//! of interest: a haversine cost matrix, a pheromone graph, and a colony
//! solver with Ant System, Elitist Ant System and Ant Colony System rules.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Tour)
//! - [`distance`] — Haversine distance and cost matrix
//! - [`pheromone`] — Pheromone matrix (evaporate, reinforce, floor)
//! - [`colony`] — Colony solver, strategies, configuration and results
//! - [`constructive`] — Nearest-neighbor tour (seeds the default τ0)
//! - [`local_search`] — 2-opt tour polish
//! - [`error`] — Error taxonomy
//!
//! ## Example
//!
//! ```
//! use u_aco::colony::{ColonyConfig, ColonySolver, Mode};
//!
//! let config = ColonyConfig::default()
//!     .with_mode(Mode::AntColonySystem)
//!     .with_closed(false)
//!     .with_seed(1);
//! let stops = [(51.5007, -0.1246), (51.5081, -0.0759), (51.5033, -0.1196), (51.5138, -0.0984)];
//! let (secs, km, order) = ColonySolver::new(config)
//!     .solve_coordinates(&stops, Some(0))
//!     .unwrap()
//!     .into_parts();
//! assert!(secs >= 0.0);
//! assert!(km > 0.0);
//! assert_eq!(order.len(), 4);
//! ```

pub mod colony;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod pheromone;

pub use error::{Error, Result};
