// src/models/sinr.rs

use crate::config::{LinkConstants, TransmitProfile};
use crate::math::{map_axis, power_sum_dbm, watts_to_dbm, ModelError};

/// リンクバジェットの内訳
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBudget {
    pub rx_power_dbm: f64,                // 受信電力（dBm）
    pub noise_floor_dbm: f64,             // 熱雑音 + 雑音指数（dBm）
    pub noise_plus_interference_dbm: f64, // 雑音と干渉の線形和（dBm）
    pub sinr_db: f64,                     // SINR（dB）
}

/// 熱雑音フロア `10 log10(k T B) + 30 + NF`（dBm）
///
/// # 引数
/// - `constants`: 共有定数（k, T, NF）
/// - `bandwidth_hz`: 帯域幅（Hz）
pub fn noise_floor_dbm(constants: &LinkConstants, bandwidth_hz: f64) -> Result<f64, ModelError> {
    if !(bandwidth_hz.is_finite() && bandwidth_hz > 0.0) {
        return Err(ModelError::InvalidBandwidth(bandwidth_hz));
    }
    let noise_watts = constants.boltzmann * constants.noise_temperature_k * bandwidth_hz;
    Ok(watts_to_dbm(noise_watts) + constants.noise_figure_db)
}

/// 経路損失と送信パラメータからリンクバジェットを計算する
///
/// 結果はクランプしない。負の SINR はリンク不成立を表す。
///
/// # 引数
/// - `constants`: 共有定数
/// - `path_loss_db`: 経路損失（dB）
/// - `tx_power_dbm`: 送信電力（dBm）
/// - `bandwidth_hz`: 帯域幅（Hz）
///
/// # 戻り値
/// - 内訳。帯域幅が正でなければ `ModelError::InvalidBandwidth`
pub fn link_budget(
    constants: &LinkConstants,
    path_loss_db: f64,
    tx_power_dbm: f64,
    bandwidth_hz: f64,
) -> Result<LinkBudget, ModelError> {
    let rx_power_dbm = tx_power_dbm + constants.rx_antenna_gain_dbi - path_loss_db;
    let noise_floor_dbm = noise_floor_dbm(constants, bandwidth_hz)?;
    let noise_plus_interference_dbm = power_sum_dbm(noise_floor_dbm, constants.interference_dbm);

    Ok(LinkBudget {
        rx_power_dbm,
        noise_floor_dbm,
        noise_plus_interference_dbm,
        sinr_db: rx_power_dbm - noise_plus_interference_dbm,
    })
}

/// SINR（dB）
pub fn sinr(
    constants: &LinkConstants,
    path_loss_db: f64,
    tx_power_dbm: f64,
    bandwidth_hz: f64,
) -> Result<f64, ModelError> {
    link_budget(constants, path_loss_db, tx_power_dbm, bandwidth_hz).map(|b| b.sinr_db)
}

/// 経路損失の列に対する SINR
///
/// 雑音と干渉の合成は送信プロファイルごとに一度だけ計算する。
pub fn sinr_batch(
    constants: &LinkConstants,
    path_losses_db: &[f64],
    profile: &TransmitProfile,
) -> Result<Vec<f64>, ModelError> {
    let total = power_sum_dbm(
        noise_floor_dbm(constants, profile.bandwidth_hz)?,
        constants.interference_dbm,
    );
    let eirp_plus_gain = profile.tx_power_dbm + constants.rx_antenna_gain_dbi;
    Ok(map_axis(path_losses_db, |pl| eirp_plus_gain - pl - total))
}
