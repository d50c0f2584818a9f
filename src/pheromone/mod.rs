//! Pheromone trails shared by the ants of a colony.

mod matrix;

pub use matrix::PheromoneMatrix;
