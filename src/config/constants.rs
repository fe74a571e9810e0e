// src/config/constants.rs

use serde::Deserialize;

/// 伝搬モデルとリンクバジェットで共有する物理・工学定数
///
/// 各モデル関数に参照で渡す。YAMLで一部だけ指定した場合、残りは既定値になる。
/// 既定値は 3GPP TR 38.811 と Ahmed et al. (2025) の参照値。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LinkConstants {
    pub earth_radius_km: f64,         // 地球半径（km）
    pub reference_distance_km: f64,   // 地上モデルの基準距離 D0（km）
    pub reference_loss_db: f64,       // 基準距離での損失 ZETA（dB）
    pub min_distance_km: f64,         // log10(0) を避ける距離下限（km）
    pub zenith_attenuation_db: f64,   // 天頂方向の大気減衰（dB）
    pub rx_antenna_gain_dbi: f64,     // 端末アンテナ利得（dBi）
    pub noise_figure_db: f64,         // 受信機雑音指数（dB）
    pub boltzmann: f64,               // ボルツマン定数（J/K）
    pub noise_temperature_k: f64,     // 雑音温度（K）
    pub interference_dbm: f64,        // 想定干渉レベル（dBm）
}

impl Default for LinkConstants {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            reference_distance_km: 0.1,
            reference_loss_db: 90.0,
            min_distance_km: 0.001,
            zenith_attenuation_db: 0.05,
            rx_antenna_gain_dbi: 5.0,
            noise_figure_db: 7.0,
            boltzmann: 1.38e-23,
            noise_temperature_k: 290.0,
            interference_dbm: -110.0,
        }
    }
}
