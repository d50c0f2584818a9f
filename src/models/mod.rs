//! Domain model types for geographic tours.
//!
//! Nodes carry a caller identifier and a latitude/longitude position; tours
//! are ordered visit sequences over matrix positions, open or closed.

mod node;
mod tour;

pub use node::Node;
pub use tour::Tour;
