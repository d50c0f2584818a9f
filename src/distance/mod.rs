//! Great-circle distances and the dense cost matrix.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::CostMatrix;
