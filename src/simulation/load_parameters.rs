// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;
use tracing::info;

use crate::config::{LinkConstants, ScenarioSet};
use crate::simulation::Result;

/// YAML ファイルを任意の型に読み込む
pub fn parse_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let data: T = from_reader(file)?;
    Ok(data)
}

/// 共有定数の読み込み（パス省略時は既定値）
pub fn load_constants(path: Option<&Path>) -> Result<LinkConstants> {
    match path {
        Some(path) => {
            info!("Loading link constants from {}", path.display());
            parse_yaml(path)
        }
        None => {
            info!("Using built-in link constants");
            Ok(LinkConstants::default())
        }
    }
}

/// シナリオの読み込み（パス省略時は既定のシナリオ表）
pub fn load_scenarios(path: Option<&Path>) -> Result<ScenarioSet> {
    match path {
        Some(path) => {
            info!("Loading scenarios from {}", path.display());
            parse_yaml(path)
        }
        None => {
            info!("Using built-in scenario tables");
            Ok(ScenarioSet::default())
        }
    }
}
