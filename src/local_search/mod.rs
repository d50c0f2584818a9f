//! Local search operators for single tours.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal with a fixed start node

mod two_opt;

pub use two_opt::two_opt_improve;
