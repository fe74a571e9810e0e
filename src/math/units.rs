// src/math/units.rs

/// dB値を線形比に変換する
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// 線形比をdB値に変換する
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

/// 電力（W）をdBmに変換する
pub fn watts_to_dbm(watts: f64) -> f64 {
    linear_to_db(watts) + 30.0
}

/// 独立な2つの電力（dBm）を線形領域で合成する
///
/// dB値を直接加算してはならない。両方をmWに戻して足し合わせ、再びdBmに変換する。
///
/// # 引数
/// - `a_dbm`: 電力1（dBm）
/// - `b_dbm`: 電力2（dBm）
///
/// # 戻り値
/// - 合成電力（dBm）
pub fn power_sum_dbm(a_dbm: f64, b_dbm: f64) -> f64 {
    linear_to_db(db_to_linear(a_dbm) + db_to_linear(b_dbm))
}
