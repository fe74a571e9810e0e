// src/simulation/summary.rs

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::simulation::framework::SimulationOutput;
use crate::simulation::{Result, SweepTable};

/// シナリオ1件分の統計
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub points: usize,
    pub path_loss_min_db: f64,
    pub path_loss_max_db: f64,
    pub path_loss_mean_db: f64,
    pub sinr_min_db: f64,
    pub sinr_max_db: f64,
    /// 掃引順で最初に SINR が 0 dB を下回った軸の値
    pub first_negative_sinr_at: Option<f64>,
}

/// 出力ファイル1つ分の統計
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub file: String,
    pub axis: &'static str,
    pub label_column: &'static str,
    pub groups: Vec<GroupSummary>,
}

impl GroupSummary {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            points: 0,
            path_loss_min_db: f64::INFINITY,
            path_loss_max_db: f64::NEG_INFINITY,
            path_loss_mean_db: 0.0,
            sinr_min_db: f64::INFINITY,
            sinr_max_db: f64::NEG_INFINITY,
            first_negative_sinr_at: None,
        }
    }
}

/// 表をラベルごとに集計する（ラベルの出現順を保つ）
pub fn summarize(file: &str, table: &SweepTable) -> TableSummary {
    let mut groups: Vec<GroupSummary> = Vec::new();

    for record in &table.records {
        let index = match groups.iter().position(|g| g.label == record.label) {
            Some(i) => i,
            None => {
                groups.push(GroupSummary::new(&record.label));
                groups.len() - 1
            }
        };
        let g = &mut groups[index];

        g.points += 1;
        g.path_loss_min_db = g.path_loss_min_db.min(record.path_loss_db);
        g.path_loss_max_db = g.path_loss_max_db.max(record.path_loss_db);
        // 平均は逐次更新
        g.path_loss_mean_db += (record.path_loss_db - g.path_loss_mean_db) / g.points as f64;
        g.sinr_min_db = g.sinr_min_db.min(record.sinr_db);
        g.sinr_max_db = g.sinr_max_db.max(record.sinr_db);
        if g.first_negative_sinr_at.is_none() && record.sinr_db < 0.0 {
            g.first_negative_sinr_at = Some(record.axis_value);
        }
    }

    TableSummary {
        file: file.to_string(),
        axis: table.axis.column(),
        label_column: table.label_column,
        groups,
    }
}

/// 全グループを集計し、ログに出す
pub fn summarize_output(output: &SimulationOutput) -> Vec<TableSummary> {
    let summaries: Vec<TableSummary> = output
        .tables()
        .into_iter()
        .map(|(file, table)| summarize(file, table))
        .collect();

    for summary in &summaries {
        info!("{} ({})", summary.file, summary.label_column);
        for g in &summary.groups {
            match g.first_negative_sinr_at {
                Some(at) => info!(
                    "  {:24} SINR {:7.2} .. {:7.2} dB, below 0 dB from {} = {:.3}",
                    g.label, g.sinr_min_db, g.sinr_max_db, summary.axis, at
                ),
                None => info!(
                    "  {:24} SINR {:7.2} .. {:7.2} dB",
                    g.label, g.sinr_min_db, g.sinr_max_db
                ),
            }
        }
    }
    summaries
}

/// 集計結果をJSONで書き出す
pub fn write_summary(path: &Path, summaries: &[TableSummary]) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, summaries)?;
    info!("Wrote summary to {}", path.display());
    Ok(())
}
