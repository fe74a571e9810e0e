// src/math/error.rs

use thiserror::Error;

/// 数値ドメインのエラー
///
/// 地上モデル（対数距離・UMa）は距離の下限クランプで回復するためエラーを返さない。
/// 衛星モデルとSINR計算のみがこのエラーを返す。
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    #[error("仰角 {0}° は (0, 90] の範囲外です")]
    InvalidElevation(f64),
    #[error("軌道高度 {0} km は正の有限値でなければなりません")]
    InvalidAltitude(f64),
    #[error("周波数 {0} GHz は正の有限値でなければなりません")]
    InvalidFrequency(f64),
    #[error("帯域幅 {0} Hz は正の有限値でなければなりません")]
    InvalidBandwidth(f64),
}
