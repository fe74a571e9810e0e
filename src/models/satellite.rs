// src/models/satellite.rs

use crate::config::LinkConstants;
use crate::math::{try_map_axis, ModelError};
use crate::models::geometry::slant_range;

/// f を MHz、d を km で与えたときの自由空間損失定数（dB）
const FSPL_CONSTANT_MHZ_KM_DB: f64 = 32.45;

/// 衛星リンク損失の内訳
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteLoss {
    pub slant_range_km: f64,    // スラントレンジ（km）
    pub atmospheric_db: f64,    // 大気減衰（dB）
    pub free_space_db: f64,     // 自由空間損失（dB）
}

impl SatelliteLoss {
    /// 合計損失（dB）
    pub fn total_db(&self) -> f64 {
        self.atmospheric_db + self.free_space_db
    }
}

/// 仰角が (0, 90] に入っているか検証する
///
/// 仰角 0° では大気減衰が発散するため、クランプせずに拒否する。
pub fn validate_elevation(elevation_deg: f64) -> Result<f64, ModelError> {
    if elevation_deg.is_finite() && elevation_deg > 0.0 && elevation_deg <= 90.0 {
        Ok(elevation_deg)
    } else {
        Err(ModelError::InvalidElevation(elevation_deg))
    }
}

fn validate_positive(value: f64, err: fn(f64) -> ModelError) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// 大気減衰 `L_a = L_zenith / sin(θ)`
///
/// 仰角が低いほど大気中の経路が長くなり、減衰が増える。
pub fn atmospheric_loss(constants: &LinkConstants, elevation_deg: f64) -> Result<f64, ModelError> {
    let elevation_deg = validate_elevation(elevation_deg)?;
    Ok(constants.zenith_attenuation_db / elevation_deg.to_radians().sin())
}

/// 自由空間損失 `20 log10(f_MHz) + 20 log10(d_km) + 32.45`
///
/// # 引数
/// - `freq_ghz`: 周波数（GHz、内部で MHz に換算）
/// - `distance_km`: 距離（km）
pub fn free_space_path_loss(freq_ghz: f64, distance_km: f64) -> f64 {
    20.0 * (freq_ghz * 1000.0).log10() + 20.0 * distance_km.log10() + FSPL_CONSTANT_MHZ_KM_DB
}

/// 衛星リンク損失の内訳を計算する
///
/// # 引数
/// - `constants`: 共有定数
/// - `freq_ghz`: 搬送波周波数（GHz）
/// - `elevation_deg`: 仰角（度、(0, 90]）
/// - `altitude_km`: 軌道高度（km）
///
/// # 戻り値
/// - 内訳。仰角・高度・周波数が範囲外なら `ModelError`
pub fn satellite_breakdown(
    constants: &LinkConstants,
    freq_ghz: f64,
    elevation_deg: f64,
    altitude_km: f64,
) -> Result<SatelliteLoss, ModelError> {
    let freq_ghz = validate_positive(freq_ghz, ModelError::InvalidFrequency)?;
    let altitude_km = validate_positive(altitude_km, ModelError::InvalidAltitude)?;

    let atmospheric_db = atmospheric_loss(constants, elevation_deg)?;
    let slant_range_km = slant_range(constants, elevation_deg, altitude_km);
    let free_space_db = free_space_path_loss(freq_ghz, slant_range_km);

    Ok(SatelliteLoss {
        slant_range_km,
        atmospheric_db,
        free_space_db,
    })
}

/// 衛星リンクの合計経路損失（大気減衰 + 自由空間損失、dB）
pub fn satellite_pathloss(
    constants: &LinkConstants,
    freq_ghz: f64,
    elevation_deg: f64,
    altitude_km: f64,
) -> Result<f64, ModelError> {
    satellite_breakdown(constants, freq_ghz, elevation_deg, altitude_km).map(|l| l.total_db())
}

/// 仰角の掃引軸に対する衛星リンク損失
pub fn satellite_pathloss_batch(
    constants: &LinkConstants,
    freq_ghz: f64,
    elevations_deg: &[f64],
    altitude_km: f64,
) -> Result<Vec<f64>, ModelError> {
    try_map_axis(elevations_deg, |el| {
        satellite_pathloss(constants, freq_ghz, el, altitude_km)
    })
}
