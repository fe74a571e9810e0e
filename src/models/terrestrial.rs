// src/models/terrestrial.rs

use crate::config::LinkConstants;
use crate::math::map_axis;

// 3GPP TR 38.901 表 7.4.1-1 / 7.4.2-1 (UMa)
const UMA_LOS_INTERCEPT_DB: f64 = 28.0;
const UMA_LOS_DISTANCE_SLOPE: f64 = 22.0;
const UMA_NLOS_INTERCEPT_DB: f64 = 13.54;
const UMA_NLOS_DISTANCE_SLOPE: f64 = 39.08;
const UMA_FREQUENCY_SLOPE: f64 = 20.0;
const UMA_LOS_BREAKPOINT_M: f64 = 18.0;
const UMA_LOS_DECAY_M: f64 = 63.0;
const UMA_MIN_DISTANCE_M: f64 = 1.0;

/// 対数距離モデルによる地上リンクの経路損失
///
/// `L = ZETA + 10 φ log10(max(d, d_min) / D0)`
///
/// # 引数
/// - `constants`: 共有定数（ZETA, D0, 距離下限）
/// - `distance_km`: 端末と基地局の距離（km）
/// - `path_loss_exponent`: 損失指数 φ（大きいほど密な市街地）
///
/// # 戻り値
/// - 経路損失（dB）
pub fn terrestrial_pathloss(
    constants: &LinkConstants,
    distance_km: f64,
    path_loss_exponent: f64,
) -> f64 {
    let d = distance_km.max(constants.min_distance_km);
    constants.reference_loss_db
        + 10.0 * path_loss_exponent * (d / constants.reference_distance_km).log10()
}

/// 距離の掃引軸に対する対数距離モデル
pub fn terrestrial_pathloss_batch(
    constants: &LinkConstants,
    distances_km: &[f64],
    path_loss_exponent: f64,
) -> Vec<f64> {
    map_axis(distances_km, |d| {
        terrestrial_pathloss(constants, d, path_loss_exponent)
    })
}

/// UMa モデルの内訳
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UmaBreakdown {
    pub p_los: f64,       // LoS 確率
    pub pl_los_db: f64,   // LoS 経路損失（dB）
    pub pl_nlos_db: f64,  // NLoS 経路損失（dB、LoS 以上）
    pub expected_db: f64, // 確率加重した期待損失（dB）
}

/// UMa の LoS 確率
///
/// `p = min(18/d, 1)(1 - exp(-d/63)) + exp(-d/63)`、`d` は水平距離（m）
pub fn uma_los_probability(d_2d_m: f64) -> f64 {
    let decay = (-d_2d_m / UMA_LOS_DECAY_M).exp();
    (UMA_LOS_BREAKPOINT_M / d_2d_m).min(1.0) * (1.0 - decay) + decay
}

/// UMa の LoS / NLoS 損失と LoS 確率をまとめて計算する
///
/// # 引数
/// - `distance_2d_km`: 水平距離（km）
/// - `bs_height_m`: 基地局アンテナ高（m）
/// - `ut_height_m`: 端末高（m）
/// - `freq_ghz`: 搬送波周波数（GHz）
///
/// # 戻り値
/// - 内訳と期待損失
pub fn uma_breakdown(
    distance_2d_km: f64,
    bs_height_m: f64,
    ut_height_m: f64,
    freq_ghz: f64,
) -> UmaBreakdown {
    let d_2d = distance_2d_km * 1000.0;
    let d_3d = (d_2d.powi(2) + (bs_height_m - ut_height_m).powi(2)).sqrt();

    // 3D 距離は下限を掛ける前の 2D 距離から求める
    let d_2d = d_2d.max(UMA_MIN_DISTANCE_M);
    let d_3d = d_3d.max(UMA_MIN_DISTANCE_M);

    let p_los = uma_los_probability(d_2d);

    let freq_term = UMA_FREQUENCY_SLOPE * freq_ghz.log10();
    let pl_los_db = UMA_LOS_INTERCEPT_DB + UMA_LOS_DISTANCE_SLOPE * d_3d.log10() + freq_term;
    let pl_nlos_prime =
        UMA_NLOS_INTERCEPT_DB + UMA_NLOS_DISTANCE_SLOPE * d_3d.log10() + freq_term;
    let pl_nlos_db = pl_los_db.max(pl_nlos_prime);

    UmaBreakdown {
        p_los,
        pl_los_db,
        pl_nlos_db,
        expected_db: p_los * pl_los_db + (1.0 - p_los) * pl_nlos_db,
    }
}

/// 3GPP UMa の期待経路損失（dB）
///
/// LoS/NLoS を抽選せず、LoS 確率で重み付けした期待値を返す。
pub fn uma_pathloss(
    distance_2d_km: f64,
    bs_height_m: f64,
    ut_height_m: f64,
    freq_ghz: f64,
) -> f64 {
    uma_breakdown(distance_2d_km, bs_height_m, ut_height_m, freq_ghz).expected_db
}

/// 距離の掃引軸に対する UMa 期待損失
pub fn uma_pathloss_batch(
    distances_2d_km: &[f64],
    bs_height_m: f64,
    ut_height_m: f64,
    freq_ghz: f64,
) -> Vec<f64> {
    map_axis(distances_2d_km, |d| {
        uma_pathloss(d, bs_height_m, ut_height_m, freq_ghz)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_terrestrial_1km_rural() {
        let c = LinkConstants::default();
        // 90 + 35 * log10(1 / 0.1) = 125 dB
        let pl = terrestrial_pathloss(&c, 1.0, 3.5);
        assert!((pl - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_terrestrial_reference_distance_gives_zeta() {
        let c = LinkConstants::default();
        assert!((terrestrial_pathloss(&c, 0.1, 4.5) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_terrestrial_zero_distance_is_clamped() {
        let c = LinkConstants::default();
        let at_zero = terrestrial_pathloss(&c, 0.0, 3.5);
        let at_floor = terrestrial_pathloss(&c, 0.001, 3.5);

        assert!(at_zero.is_finite());
        assert_eq!(at_zero, at_floor);
        // 90 + 35 * log10(0.01) = 20 dB
        assert!((at_floor - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_terrestrial_batch_matches_scalar() {
        let c = LinkConstants::default();
        let axis = [0.1, 1.0, 10.0];
        let out = terrestrial_pathloss_batch(&c, &axis, 3.8);
        assert_eq!(out.len(), axis.len());
        for (d, pl) in axis.iter().zip(out.iter()) {
            assert_eq!(*pl, terrestrial_pathloss(&c, *d, 3.8));
        }
    }

    #[test]
    fn test_uma_los_probability_short_range_is_one() {
        assert!((uma_los_probability(1.0) - 1.0).abs() < 1e-12);
        assert!((uma_los_probability(18.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uma_1km_2ghz_reference_value() {
        let b = uma_breakdown(1.0, 25.0, 1.5, 2.0);

        let d_3d = (1000.0f64.powi(2) + 23.5f64.powi(2)).sqrt();
        let los = 28.0 + 22.0 * d_3d.log10() + 20.0 * 2f64.log10();
        let nlos = 13.54 + 39.08 * d_3d.log10() + 20.0 * 2f64.log10();
        let p = 18.0 / 1000.0 * (1.0 - (-1000.0f64 / 63.0).exp()) + (-1000.0f64 / 63.0).exp();

        assert!((b.p_los - p).abs() < 1e-12);
        assert!((b.pl_los_db - los).abs() < 1e-9);
        assert!((b.pl_nlos_db - nlos).abs() < 1e-9);
        assert!((b.expected_db - (p * los + (1.0 - p) * nlos)).abs() < 1e-9);
        assert!((b.expected_db - 136.143).abs() < 1e-3);
    }

    #[test]
    fn test_uma_zero_distance_uses_height_difference() {
        let pl = uma_pathloss(0.0, 25.0, 1.5, 2.0);
        let expected = 28.0 + 22.0 * 23.5f64.log10() + 20.0 * 2f64.log10();
        // d=0 では LoS 確率 1 なので LoS 損失そのもの
        assert!((pl - expected).abs() < 1e-9);
    }

    #[test]
    fn test_uma_equal_heights_zero_distance_is_finite() {
        let pl = uma_pathloss(0.0, 1.5, 1.5, 28.0);
        assert!(pl.is_finite());
        assert!((pl - (28.0 + 20.0 * 28f64.log10())).abs() < 1e-9);
    }

    #[test]
    fn test_uma_higher_frequency_adds_loss() {
        let low = uma_pathloss(2.0, 25.0, 1.5, 2.0);
        let high = uma_pathloss(2.0, 25.0, 1.5, 28.0);
        assert!((high - low - 20.0 * 14f64.log10()).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_terrestrial_increasing_in_distance(
            d in 0.001f64..50.0,
            factor in 1.01f64..10.0,
            phi in 0.5f64..6.0,
        ) {
            let c = LinkConstants::default();
            prop_assert!(terrestrial_pathloss(&c, d * factor, phi) > terrestrial_pathloss(&c, d, phi));
        }

        #[test]
        fn prop_terrestrial_increasing_in_exponent_beyond_reference(
            d in 0.11f64..50.0,
            phi in 0.5f64..6.0,
            delta in 0.1f64..2.0,
        ) {
            let c = LinkConstants::default();
            prop_assert!(terrestrial_pathloss(&c, d, phi + delta) > terrestrial_pathloss(&c, d, phi));
        }

        #[test]
        fn prop_uma_nlos_never_below_los(
            d in 0.0f64..20.0,
            h_bs in 10.0f64..40.0,
            h_ut in 1.0f64..3.0,
            f in 0.5f64..100.0,
        ) {
            let b = uma_breakdown(d, h_bs, h_ut, f);
            prop_assert!(b.pl_nlos_db >= b.pl_los_db);
            prop_assert!(b.expected_db >= b.pl_los_db - 1e-9);
            prop_assert!(b.expected_db <= b.pl_nlos_db + 1e-9);
        }

        #[test]
        fn prop_uma_los_probability_in_unit_interval(d in 0.0f64..100_000.0) {
            let p = uma_los_probability(d.max(1.0));
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
