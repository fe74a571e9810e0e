// src/models/mod.rs

pub mod geometry;
pub mod satellite;
pub mod sinr;
pub mod terrestrial;

pub use geometry::{slant_range, slant_range_batch};
pub use satellite::{
    atmospheric_loss, free_space_path_loss, satellite_breakdown, satellite_pathloss,
    satellite_pathloss_batch, SatelliteLoss,
};
pub use sinr::{link_budget, noise_floor_dbm, sinr, sinr_batch, LinkBudget};
pub use terrestrial::{
    terrestrial_pathloss, terrestrial_pathloss_batch, uma_breakdown, uma_los_probability,
    uma_pathloss, uma_pathloss_batch, UmaBreakdown,
};
