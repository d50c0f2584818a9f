//! Solve outcome and lifecycle states.

use std::time::Duration;

use serde::Serialize;

/// Lifecycle of a solve.
///
/// `Idle → Running → {Converged, Exhausted, TimedOut}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverState {
    Idle,
    Running,
    Finished(Termination),
}

/// Why a solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The configured number of steps ran.
    Exhausted,
    /// The stagnation limit was reached.
    Converged,
    /// The deadline passed; the best tour so far is returned.
    TimedOut,
}

/// Best tour found by a solve.
///
/// ```text
/// (runtime_seconds, best_length_km, best_tour)
/// ```
///
/// is available through [`into_parts`](Self::into_parts).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    /// Wall-clock time spent running, measured once per solve.
    pub runtime: Duration,
    /// Length of `best_tour` in kilometers, closing edge included for
    /// closed tours.
    pub best_length: f64,
    /// Caller node ids in visiting order.
    pub best_tour: Vec<usize>,
    pub closed: bool,
    pub steps_completed: usize,
    pub termination: Termination,
    /// Best length after each completed step, non-increasing.
    pub history: Vec<f64>,
}

impl SolveResult {
    /// Runtime in seconds.
    pub fn runtime_seconds(&self) -> f64 {
        self.runtime.as_secs_f64()
    }

    /// `(runtime_seconds, best_length, best_tour)`.
    pub fn into_parts(self) -> (f64, f64, Vec<usize>) {
        (self.runtime_seconds(), self.best_length, self.best_tour)
    }
}
