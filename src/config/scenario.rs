// src/config/scenario.rs

use serde::Deserialize;

/// 全シナリオの設定
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioSet {
    pub terrestrial: Vec<TerrestrialScenario>,
    pub terrestrial_3gpp: Vec<UmaScenario>,
    pub satellite: Vec<SatelliteScenario>,
    pub stress: Vec<SatelliteScenario>,
    pub transmitters: Transmitters,
    pub sweep: SweepAxes,
}

/// 対数距離モデルのシナリオ（損失指数で環境を区別する）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TerrestrialScenario {
    pub name: String,
    pub path_loss_exponent: f64, // 損失指数 φ
}

/// 3GPP UMa モデルのシナリオ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UmaScenario {
    pub name: String,
    pub frequency_ghz: f64, // 搬送波周波数（GHz）
    pub bs_height_m: f64,   // 基地局アンテナ高（m）
    pub ut_height_m: f64,   // 端末高（m）
}

/// 衛星リンクのシナリオ（周波数帯・軌道高度）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SatelliteScenario {
    pub name: String,
    pub frequency_ghz: f64, // 搬送波周波数（GHz）
    pub altitude_km: f64,   // 軌道高度（km）
}

/// 送信側パラメータ
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TransmitProfile {
    pub tx_power_dbm: f64, // 送信電力（dBm）
    pub bandwidth_hz: f64, // 帯域幅（Hz）
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Transmitters {
    pub base_station: TransmitProfile,
    pub leo_satellite: TransmitProfile,
}

/// 掃引軸の定義（両端を含む等間隔）
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SweepAxes {
    pub distance_km: AxisRange,   // 地上リンクの水平距離（km）
    pub elevation_deg: AxisRange, // 衛星リンクの仰角（度）
}

impl Default for Transmitters {
    fn default() -> Self {
        Self {
            base_station: TransmitProfile {
                tx_power_dbm: 46.0,
                bandwidth_hz: 10e6,
            },
            leo_satellite: TransmitProfile {
                tx_power_dbm: 43.0,
                bandwidth_hz: 20e6,
            },
        }
    }
}

impl Default for SweepAxes {
    fn default() -> Self {
        Self {
            distance_km: AxisRange {
                start: 0.1,
                stop: 15.0,
                points: 200,
            },
            elevation_deg: AxisRange {
                start: 5.0,
                stop: 90.0,
                points: 180,
            },
        }
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        let terrestrial = [
            ("Rural (Baseline)", 3.5),
            ("Suburban", 3.8),
            ("Urban (Dense)", 4.5),
        ]
        .into_iter()
        .map(|(name, phi)| TerrestrialScenario {
            name: name.to_string(),
            path_loss_exponent: phi,
        })
        .collect();

        let terrestrial_3gpp = [("3GPP UMa (2 GHz)", 2.0), ("3GPP UMa (28 GHz)", 28.0)]
            .into_iter()
            .map(|(name, f)| UmaScenario {
                name: name.to_string(),
                frequency_ghz: f,
                bs_height_m: 25.0,
                ut_height_m: 1.5,
            })
            .collect();

        let satellite = [("S-Band (2 GHz)", 2.0), ("Ka-Band (28 GHz)", 28.0)]
            .into_iter()
            .map(|(name, f)| SatelliteScenario {
                name: name.to_string(),
                frequency_ghz: f,
                altitude_km: 600.0,
            })
            .collect();

        let stress = [
            ("V-LEO (300 km)", 300.0),
            ("LEO (600 km)", 600.0),
            ("M-LEO (1200 km)", 1200.0),
        ]
        .into_iter()
        .map(|(name, h)| SatelliteScenario {
            name: name.to_string(),
            frequency_ghz: 2.0,
            altitude_km: h,
        })
        .collect();

        Self {
            terrestrial,
            terrestrial_3gpp,
            satellite,
            stress,
            transmitters: Transmitters::default(),
            sweep: SweepAxes::default(),
        }
    }
}
