// src/config/mod.rs

pub mod constants;
pub mod scenario;

pub use constants::LinkConstants;
pub use scenario::{
    AxisRange, SatelliteScenario, ScenarioSet, SweepAxes, TerrestrialScenario, TransmitProfile,
    Transmitters, UmaScenario,
};
