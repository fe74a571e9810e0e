// src/math/mod.rs

pub mod error;
pub mod sweep;
pub mod units;

pub use error::ModelError;
pub use sweep::{linspace, map_axis, try_map_axis};
pub use units::{db_to_linear, linear_to_db, power_sum_dbm, watts_to_dbm};
