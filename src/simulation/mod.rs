// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;
pub mod summary;

pub use error::{Result, SimulationError};

/// 掃引軸の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    Distance,  // 水平距離（km）
    Elevation, // 仰角（度）
}

impl SweepAxis {
    /// CSV の列名
    pub fn column(&self) -> &'static str {
        match self {
            SweepAxis::Distance => "Distance_km",
            SweepAxis::Elevation => "Elevation_deg",
        }
    }
}

/// 掃引点ひとつ分の結果
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub axis_value: f64,   // 独立変数（距離 km または仰角 度）
    pub path_loss_db: f64, // 経路損失（dB）
    pub sinr_db: f64,      // SINR（dB）
    pub label: String,     // シナリオ名
}

/// 1グループ分の掃引結果（シナリオ順、軸順に並ぶ）
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable {
    pub axis: SweepAxis,
    pub label_column: &'static str, // ラベル列名（Scenario / Band / Orbit）
    pub records: Vec<LinkRecord>,
}

impl SweepTable {
    pub fn new(axis: SweepAxis, label_column: &'static str) -> Self {
        Self {
            axis,
            label_column,
            records: Vec::new(),
        }
    }
}
