// src/simulation/error.rs

use thiserror::Error;

use crate::math::ModelError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAMLの解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSONの書き出しに失敗しました: {0}")]
    Json(#[from] serde_json::Error),
    #[error("シナリオ '{scenario}' の計算に失敗しました: {source}")]
    Model {
        scenario: String,
        #[source]
        source: ModelError,
    },
    #[error("シナリオ '{name}' が不正です: {reason}")]
    InvalidScenario { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
