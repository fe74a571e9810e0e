// src/math/sweep.rs

use crate::math::error::ModelError;

/// 等間隔の掃引軸を生成する（両端を含む）
///
/// # 引数
/// - `start`: 開始値
/// - `stop`: 終了値
/// - `points`: 点数
///
/// # 戻り値
/// - `points` 個の値。`points == 1` のときは `[start]`、`0` のときは空
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// スカラー関数を軸上の各点に適用する
///
/// 出力は入力と同じ長さで、位置が対応する。
pub fn map_axis<F>(axis: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    axis.iter().map(|&x| f(x)).collect()
}

/// 失敗しうるスカラー関数を軸上の各点に適用する
///
/// 最初のエラーで中断し、そのエラーを返す。
pub fn try_map_axis<F>(axis: &[f64], f: F) -> Result<Vec<f64>, ModelError>
where
    F: Fn(f64) -> Result<f64, ModelError>,
{
    axis.iter().map(|&x| f(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_and_length() {
        let axis = linspace(0.1, 15.0, 200);
        assert_eq!(axis.len(), 200);
        assert_eq!(axis[0], 0.1);
        assert_eq!(axis[199], 15.0);
    }

    #[test]
    fn test_linspace_uniform_step() {
        let axis = linspace(5.0, 90.0, 18);
        let step = 5.0;
        for pair in axis.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_map_axis_preserves_order() {
        let out = map_axis(&[1.0, 2.0, 3.0], |x| x * 10.0);
        assert_eq!(out, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_try_map_axis_stops_at_first_error() {
        let result = try_map_axis(&[10.0, 0.0, -1.0], |x| {
            if x > 0.0 {
                Ok(x)
            } else {
                Err(ModelError::InvalidElevation(x))
            }
        });
        assert_eq!(result, Err(ModelError::InvalidElevation(0.0)));
    }
}
