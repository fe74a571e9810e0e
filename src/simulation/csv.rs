// src/simulation/csv.rs

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::simulation::framework::SimulationOutput;
use crate::simulation::{LinkRecord, Result, SweepTable};

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W, table: &SweepTable) -> std::io::Result<()> {
    writeln!(
        writer,
        "{},PathLoss_dB,SINR_dB,{}",
        table.axis.column(),
        table.label_column
    )
}

/// カンマ・引用符・改行を含むフィールドを引用符で囲む
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// CSV行の作成
pub fn create_csv_row(record: &LinkRecord) -> String {
    format!(
        "{},{},{},{}\n",
        record.axis_value,
        record.path_loss_db,
        record.sinr_db,
        escape_field(&record.label)
    )
}

/// 表全体をCSVとして書き込む
pub fn write_table<W: Write>(writer: &mut W, table: &SweepTable) -> std::io::Result<()> {
    write_csv_header(writer, table)?;
    for record in &table.records {
        writer.write_all(create_csv_row(record).as_bytes())?;
    }
    writer.flush()
}

/// 表をファイルに書き出す
pub fn write_table_file(path: &Path, table: &SweepTable) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, table)?;
    info!("Wrote {} rows to {}", table.records.len(), path.display());
    Ok(())
}

/// 全グループのCSVを出力ディレクトリに書き出す
///
/// # 戻り値
/// - 書き出したファイルのパス（書き出し順）
pub fn write_all_tables(output_dir: &Path, output: &SimulationOutput) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    output
        .tables()
        .into_iter()
        .map(|(file_name, table)| -> Result<PathBuf> {
            let path = output_dir.join(file_name);
            write_table_file(&path, table)?;
            Ok(path)
        })
        .collect()
}
