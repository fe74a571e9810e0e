// src/models/geometry.rs

use crate::config::LinkConstants;
use crate::math::map_axis;

/// 端末と衛星間のスラントレンジを計算する純粋関数
///
/// 地球を球とみなし、曲率を考慮した見通し距離を求める。
/// 仰角 0° でも式自体は定義されるが、呼び出し側は (0, 90] を保証すること。
///
/// # 引数
/// - `constants`: 共有定数（地球半径を使用）
/// - `elevation_deg`: 仰角（度）
/// - `altitude_km`: 軌道高度（km）
///
/// # 戻り値
/// - スラントレンジ（km）
pub fn slant_range(constants: &LinkConstants, elevation_deg: f64, altitude_km: f64) -> f64 {
    let r_earth = constants.earth_radius_km;
    let r_sin = r_earth * elevation_deg.to_radians().sin();

    let term1 = r_sin.powi(2);
    let term2 = altitude_km.powi(2) + 2.0 * r_earth * altitude_km;
    (term1 + term2).sqrt() - r_sin
}

/// 仰角の掃引軸に対するスラントレンジ
pub fn slant_range_batch(
    constants: &LinkConstants,
    elevations_deg: &[f64],
    altitude_km: f64,
) -> Vec<f64> {
    map_axis(elevations_deg, |el| slant_range(constants, el, altitude_km))
}
