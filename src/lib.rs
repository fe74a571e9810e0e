// src/lib.rs

//! 地上セルラーと LEO 衛星リンクの経路損失・SINR を掃引計算するエンジン。
//!
//! 単位: 距離 km、周波数 GHz、角度 度、電力 dBm、帯域幅 Hz、アンテナ高 m。
//! 単位の取り違えは実行時に検出できないため、呼び出し側が守ること。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{LinkConstants, ScenarioSet};
pub use math::ModelError;
pub use simulation::framework::{run_all, SimulationOutput};
pub use simulation::{LinkRecord, SimulationError, SweepAxis, SweepTable};
