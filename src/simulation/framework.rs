// src/simulation/framework.rs

use tracing::{debug, info};

use crate::config::{
    AxisRange, LinkConstants, SatelliteScenario, ScenarioSet, TerrestrialScenario,
    TransmitProfile, UmaScenario,
};
use crate::math::{linspace, ModelError};
use crate::models::{
    satellite_pathloss_batch, sinr_batch, terrestrial_pathloss_batch, uma_pathloss_batch,
};
use crate::simulation::{LinkRecord, Result, SimulationError, SweepAxis, SweepTable};

/// 全グループの掃引結果
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub terrestrial: SweepTable,
    pub terrestrial_3gpp: SweepTable,
    pub satellite: SweepTable,
    pub stress: SweepTable,
}

impl SimulationOutput {
    /// 出力ファイル名と表の組（書き出し順）
    pub fn tables(&self) -> [(&'static str, &SweepTable); 4] {
        [
            ("terrestrial_analysis_sinr.csv", &self.terrestrial),
            ("terrestrial_3gpp_sinr.csv", &self.terrestrial_3gpp),
            ("satellite_bands_sinr.csv", &self.satellite),
            ("orbit_stress_test_sinr.csv", &self.stress),
        ]
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> SimulationError {
    SimulationError::InvalidScenario {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn with_scenario(name: &str) -> impl Fn(ModelError) -> SimulationError + '_ {
    move |source| SimulationError::Model {
        scenario: name.to_string(),
        source,
    }
}

fn validate_axis(name: &str, axis: &AxisRange) -> Result<()> {
    if axis.points == 0 {
        return Err(invalid(name, "sweep axis needs at least one point"));
    }
    if !axis.start.is_finite() || !axis.stop.is_finite() {
        return Err(invalid(name, "sweep axis bounds must be finite"));
    }
    Ok(())
}

/// 掃引前にシナリオ設定を検証する
///
/// 仰角軸は (0, 90] に収まっていなければならない（0° での大気減衰は発散する）。
pub fn validate_scenarios(set: &ScenarioSet) -> Result<()> {
    validate_axis("sweep.distance_km", &set.sweep.distance_km)?;
    validate_axis("sweep.elevation_deg", &set.sweep.elevation_deg)?;

    let elevation = &set.sweep.elevation_deg;
    let (lo, hi) = (elevation.start.min(elevation.stop), elevation.start.max(elevation.stop));
    if lo <= 0.0 || hi > 90.0 {
        return Err(invalid(
            "sweep.elevation_deg",
            format!("elevation range [{lo}, {hi}] must lie within (0, 90]"),
        ));
    }
    if set.sweep.distance_km.start.min(set.sweep.distance_km.stop) < 0.0 {
        return Err(invalid("sweep.distance_km", "distances must not be negative"));
    }

    for (name, profile) in [
        ("transmitters.base_station", &set.transmitters.base_station),
        ("transmitters.leo_satellite", &set.transmitters.leo_satellite),
    ] {
        if !positive(profile.bandwidth_hz) {
            return Err(invalid(name, "bandwidth must be positive"));
        }
        if !profile.tx_power_dbm.is_finite() {
            return Err(invalid(name, "transmit power must be finite"));
        }
    }

    for s in &set.terrestrial {
        check_name(&s.name)?;
        if !positive(s.path_loss_exponent) {
            return Err(invalid(&s.name, "path loss exponent must be positive"));
        }
    }
    for s in &set.terrestrial_3gpp {
        check_name(&s.name)?;
        if !positive(s.frequency_ghz) {
            return Err(invalid(&s.name, "frequency must be positive"));
        }
        if !s.bs_height_m.is_finite() || !s.ut_height_m.is_finite() {
            return Err(invalid(&s.name, "antenna heights must be finite"));
        }
    }
    for s in set.satellite.iter().chain(set.stress.iter()) {
        check_name(&s.name)?;
        if !positive(s.frequency_ghz) {
            return Err(invalid(&s.name, "frequency must be positive"));
        }
        if !positive(s.altitude_km) {
            return Err(invalid(&s.name, "altitude must be positive"));
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid("<unnamed>", "scenario name must not be empty"));
    }
    Ok(())
}

fn push_group(table: &mut SweepTable, label: &str, axis: &[f64], losses: &[f64], sinrs: &[f64]) {
    table.records.extend(
        axis.iter()
            .zip(losses.iter())
            .zip(sinrs.iter())
            .map(|((&x, &pl), &s)| LinkRecord {
                axis_value: x,
                path_loss_db: pl,
                sinr_db: s,
                label: label.to_string(),
            }),
    );
}

fn log_group(label: &str, sinrs: &[f64]) {
    let min = sinrs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sinrs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    debug!(
        "{}: {} points, SINR {:.2} .. {:.2} dB",
        label,
        sinrs.len(),
        min,
        max
    );
}

/// 対数距離モデルによる地上リンクの掃引
pub fn run_terrestrial(
    constants: &LinkConstants,
    scenarios: &[TerrestrialScenario],
    distances_km: &[f64],
    profile: &TransmitProfile,
) -> Result<SweepTable> {
    let mut table = SweepTable::new(SweepAxis::Distance, "Scenario");
    for s in scenarios {
        let losses = terrestrial_pathloss_batch(constants, distances_km, s.path_loss_exponent);
        let sinrs = sinr_batch(constants, &losses, profile).map_err(with_scenario(&s.name))?;
        log_group(&s.name, &sinrs);
        push_group(&mut table, &s.name, distances_km, &losses, &sinrs);
    }
    Ok(table)
}

/// 3GPP UMa モデルによる地上リンクの掃引
pub fn run_uma(
    constants: &LinkConstants,
    scenarios: &[UmaScenario],
    distances_km: &[f64],
    profile: &TransmitProfile,
) -> Result<SweepTable> {
    let mut table = SweepTable::new(SweepAxis::Distance, "Scenario");
    for s in scenarios {
        let losses =
            uma_pathloss_batch(distances_km, s.bs_height_m, s.ut_height_m, s.frequency_ghz);
        let sinrs = sinr_batch(constants, &losses, profile).map_err(with_scenario(&s.name))?;
        log_group(&s.name, &sinrs);
        push_group(&mut table, &s.name, distances_km, &losses, &sinrs);
    }
    Ok(table)
}

/// 衛星リンクの仰角掃引
///
/// # 引数
/// - `label_column`: ラベル列名（周波数帯比較は "Band"、高度比較は "Orbit"）
pub fn run_satellite(
    constants: &LinkConstants,
    scenarios: &[SatelliteScenario],
    elevations_deg: &[f64],
    profile: &TransmitProfile,
    label_column: &'static str,
) -> Result<SweepTable> {
    let mut table = SweepTable::new(SweepAxis::Elevation, label_column);
    for s in scenarios {
        let losses =
            satellite_pathloss_batch(constants, s.frequency_ghz, elevations_deg, s.altitude_km)
                .map_err(with_scenario(&s.name))?;
        let sinrs = sinr_batch(constants, &losses, profile).map_err(with_scenario(&s.name))?;
        log_group(&s.name, &sinrs);
        push_group(&mut table, &s.name, elevations_deg, &losses, &sinrs);
    }
    Ok(table)
}

/// 全グループを順に掃引する
pub fn run_all(constants: &LinkConstants, set: &ScenarioSet) -> Result<SimulationOutput> {
    validate_scenarios(set)?;

    let d = &set.sweep.distance_km;
    let e = &set.sweep.elevation_deg;
    let distances_km = linspace(d.start, d.stop, d.points);
    let elevations_deg = linspace(e.start, e.stop, e.points);
    let bs = &set.transmitters.base_station;
    let leo = &set.transmitters.leo_satellite;

    info!("Terrestrial sweep: {} scenarios", set.terrestrial.len());
    let terrestrial = run_terrestrial(constants, &set.terrestrial, &distances_km, bs)?;

    info!("3GPP UMa sweep: {} scenarios", set.terrestrial_3gpp.len());
    let terrestrial_3gpp = run_uma(constants, &set.terrestrial_3gpp, &distances_km, bs)?;

    info!("Satellite band sweep: {} scenarios", set.satellite.len());
    let satellite = run_satellite(constants, &set.satellite, &elevations_deg, leo, "Band")?;

    info!("Orbit stress sweep: {} scenarios", set.stress.len());
    let stress = run_satellite(constants, &set.stress, &elevations_deg, leo, "Orbit")?;

    Ok(SimulationOutput {
        terrestrial,
        terrestrial_3gpp,
        satellite,
        stress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sinr, terrestrial_pathloss};

    fn bs() -> TransmitProfile {
        TransmitProfile {
            tx_power_dbm: 46.0,
            bandwidth_hz: 10e6,
        }
    }

    #[test]
    fn test_run_all_default_record_counts() {
        let out = run_all(&LinkConstants::default(), &ScenarioSet::default()).unwrap();

        assert_eq!(out.terrestrial.records.len(), 3 * 200);
        assert_eq!(out.terrestrial_3gpp.records.len(), 2 * 200);
        assert_eq!(out.satellite.records.len(), 2 * 180);
        assert_eq!(out.stress.records.len(), 3 * 180);
        assert_eq!(out.satellite.label_column, "Band");
        assert_eq!(out.stress.label_column, "Orbit");
        assert_eq!(out.stress.axis, SweepAxis::Elevation);
    }

    #[test]
    fn test_records_grouped_by_scenario_in_axis_order() {
        let out = run_all(&LinkConstants::default(), &ScenarioSet::default()).unwrap();
        let records = &out.terrestrial.records;

        assert_eq!(records[0].label, "Rural (Baseline)");
        assert_eq!(records[199].label, "Rural (Baseline)");
        assert_eq!(records[200].label, "Suburban");
        assert_eq!(records[0].axis_value, 0.1);
        assert_eq!(records[199].axis_value, 15.0);
        assert!(records[..200].windows(2).all(|w| w[0].axis_value < w[1].axis_value));
    }

    #[test]
    fn test_terrestrial_records_match_models() {
        let c = LinkConstants::default();
        let scenarios = vec![TerrestrialScenario {
            name: "Rural".to_string(),
            path_loss_exponent: 3.5,
        }];
        let table = run_terrestrial(&c, &scenarios, &[1.0], &bs()).unwrap();
        let r = &table.records[0];

        assert_eq!(r.path_loss_db, terrestrial_pathloss(&c, 1.0, 3.5));
        assert!((r.sinr_db - sinr(&c, r.path_loss_db, 46.0, 10e6).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_elevation_axis_is_rejected() {
        let mut set = ScenarioSet::default();
        set.sweep.elevation_deg.start = 0.0;

        let result = run_all(&LinkConstants::default(), &set);
        assert!(matches!(result, Err(SimulationError::InvalidScenario { .. })));
    }

    #[test]
    fn test_run_satellite_surfaces_model_error_with_scenario_name() {
        let c = LinkConstants::default();
        let scenarios = vec![SatelliteScenario {
            name: "Horizon".to_string(),
            frequency_ghz: 2.0,
            altitude_km: 600.0,
        }];
        let profile = TransmitProfile {
            tx_power_dbm: 43.0,
            bandwidth_hz: 20e6,
        };
        let result = run_satellite(&c, &scenarios, &[10.0, 0.0], &profile, "Band");

        match result {
            Err(SimulationError::Model { scenario, source }) => {
                assert_eq!(scenario, "Horizon");
                assert_eq!(source, ModelError::InvalidElevation(0.0));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_scenario_values_are_rejected() {
        let mut set = ScenarioSet::default();
        set.stress[1].altitude_km = -600.0;
        assert!(matches!(
            validate_scenarios(&set),
            Err(SimulationError::InvalidScenario { ref name, .. }) if name == "LEO (600 km)"
        ));

        let mut set = ScenarioSet::default();
        set.transmitters.leo_satellite.bandwidth_hz = 0.0;
        assert!(validate_scenarios(&set).is_err());

        let mut set = ScenarioSet::default();
        set.terrestrial[0].name = "  ".to_string();
        assert!(validate_scenarios(&set).is_err());
    }

    #[test]
    fn test_higher_orbit_has_lower_sinr_at_every_elevation() {
        let out = run_all(&LinkConstants::default(), &ScenarioSet::default()).unwrap();
        let v_leo = &out.stress.records[..180];
        let m_leo = &out.stress.records[360..];

        for (low, high) in v_leo.iter().zip(m_leo.iter()) {
            assert_eq!(low.axis_value, high.axis_value);
            assert!(low.sinr_db > high.sinr_db);
        }
    }
}
