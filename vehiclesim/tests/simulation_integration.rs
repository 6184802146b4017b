//! Integration tests for the simulation core.
//!
//! These tests drive a `SimulationService` with a manual time source over the
//! bundled route and over small hand-built routes, checking the behaviour a
//! consumer sees through `PositionProvider`.
//!
//! Run with: `cargo test --test simulation_integration`

use std::sync::Arc;
use std::time::Duration;

use vehiclesim::coord::distance_km;
use vehiclesim::route::{DatasetError, RouteDataset, Waypoint};
use vehiclesim::simulation::{
    ManualTimeSource, PositionProvider, SharedPositionProvider, SimulationConfig,
    SimulationError, SimulationService, RESET_MESSAGE,
};

// ============================================================================
// Test Helpers
// ============================================================================

const STEP: Duration = Duration::from_millis(3000);

fn waypoint(lat: f64, lon: f64, second: u32) -> Waypoint {
    Waypoint {
        latitude: lat,
        longitude: lon,
        timestamp: format!("2024-01-15T08:00:{:02}Z", second),
        speed: 35.0,
        heading: 90.0,
    }
}

/// Five points one hundredth of a degree apart along the equator.
fn equator_route() -> RouteDataset {
    let waypoints = (0..5).map(|i| waypoint(0.0, i as f64 * 0.01, i)).collect();
    RouteDataset::new(waypoints).unwrap()
}

fn manual_service(route: RouteDataset) -> (Arc<ManualTimeSource>, SimulationService) {
    let time = Arc::new(ManualTimeSource::new());
    let service =
        SimulationService::with_time_source(Ok(route), SimulationConfig::default(), time.clone());
    (time, service)
}

// ============================================================================
// Bundled Route
// ============================================================================

#[test]
fn test_bundled_route_walks_every_waypoint_then_wraps() {
    let route = RouteDataset::bundled().unwrap();
    let n = route.len();
    let (time, service) = manual_service(route);

    for expected in 0..n {
        let report = service.query().unwrap();
        assert_eq!(report.current_index, expected);
        assert_eq!(report.total_points, n);
        assert_eq!(report.route.len(), expected + 1);
        assert_eq!(report.route.last(), Some(&report.current));
        assert_eq!(report.is_complete, expected == n - 1);
        time.advance(STEP);
    }

    let wrapped = service.query().unwrap();
    assert_eq!(wrapped.current_index, 0);
    assert_eq!(wrapped.total_distance, 0);
    assert!(!wrapped.is_complete);
}

#[test]
fn test_progress_and_distance_non_decreasing_until_wrap() {
    let route = RouteDataset::bundled().unwrap();
    let n = route.len();
    let (time, service) = manual_service(route);

    let mut last_progress = 0;
    let mut last_distance = 0;
    for _ in 0..n {
        let report = service.query().unwrap();
        assert!(report.progress >= last_progress);
        assert!(report.total_distance >= last_distance);
        last_progress = report.progress;
        last_distance = report.total_distance;
        time.advance(STEP);
    }
    assert_eq!(last_progress, 100);
}

#[test]
fn test_final_distance_matches_route_length() {
    let route = RouteDataset::bundled().unwrap();
    let n = route.len();
    let expected_m = (route.total_km() * 1000.0).round() as u64;
    let (time, service) = manual_service(route);

    time.advance(STEP * (n as u32 - 1));
    let report = service.query().unwrap();
    assert!(report.is_complete);
    assert_eq!(report.total_distance, expected_m);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_five_point_route_scenarios() {
    let (time, service) = manual_service(equator_route());

    // Mid-way through the second bucket
    time.advance(Duration::from_millis(3100));
    let report = service.query().unwrap();
    assert_eq!(report.current_index, 1);
    assert_eq!(report.progress, 40);
    assert_eq!(report.route.len(), 2);
    assert_eq!(report.next.longitude, 0.02);

    let leg_m = (distance_km((0.0, 0.0), (0.0, 0.01)) * 1000.0).round() as u64;
    assert_eq!(report.total_distance, leg_m);

    // 16 s is bucket 5, which wraps to the start
    time.advance(Duration::from_millis(16000 - 3100));
    let report = service.query().unwrap();
    assert_eq!(report.current_index, 0);
    assert!(!report.is_complete);
}

#[test]
fn test_last_waypoint_reports_first_as_next() {
    let (time, service) = manual_service(equator_route());
    time.advance(Duration::from_millis(12_000));

    let report = service.query().unwrap();
    assert_eq!(report.current_index, 4);
    assert!(report.is_complete);
    assert_eq!(report.progress, 100);
    assert_eq!(report.next, waypoint(0.0, 0.0, 0));
}

#[test]
fn test_single_waypoint_route_is_always_complete() {
    let route = RouteDataset::new(vec![waypoint(51.5, -0.12, 0)]).unwrap();
    let (time, service) = manual_service(route);

    for _ in 0..3 {
        let report = service.query().unwrap();
        assert_eq!(report.current_index, 0);
        assert_eq!(report.current, report.next);
        assert_eq!(report.progress, 100);
        assert_eq!(report.total_distance, 0);
        assert!(report.is_complete);
        time.advance(STEP);
    }
}

#[test]
fn test_reset_through_shared_provider() {
    let time = Arc::new(ManualTimeSource::new());
    let provider: SharedPositionProvider = Arc::new(SimulationService::with_time_source(
        Ok(equator_route()),
        SimulationConfig::default(),
        time.clone(),
    ));

    time.advance(Duration::from_millis(7000));
    assert_eq!(provider.current_position().unwrap().current_index, 2);

    let ack = provider.reset();
    assert_eq!(ack.message, RESET_MESSAGE);

    let report = provider.current_position().unwrap();
    assert_eq!(report.current_index, 0);
    assert_eq!(report.progress, 20);
    assert_eq!(report.route.len(), 1);
}

#[test]
fn test_custom_step_interval() {
    let time = Arc::new(ManualTimeSource::new());
    let config = SimulationConfig::default().with_step_interval(Duration::from_millis(500));
    let service = SimulationService::with_time_source(Ok(equator_route()), config, time.clone());

    time.advance(Duration::from_millis(1600));
    assert_eq!(service.current_index().unwrap(), 3);
}

// ============================================================================
// Dataset Failures
// ============================================================================

#[test]
fn test_missing_route_file_fails_queries_but_not_reset() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let load = RouteDataset::load_from(&missing);
    assert!(matches!(load, Err(DatasetError::Io { .. })));

    let service = SimulationService::from_load_result(load, SimulationConfig::default());
    assert!(matches!(
        service.query(),
        Err(SimulationError::DatasetUnavailable(_))
    ));
    assert_eq!(service.reset().message, RESET_MESSAGE);
    assert!(service.query().is_err());
}

#[test]
fn test_route_file_round_trip_through_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("route.json");
    let json = serde_json::to_string(equator_route().waypoints()).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded = RouteDataset::load_or_bundled(Some(&path)).unwrap();
    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded.waypoints(), equator_route().waypoints());
}

#[test]
fn test_empty_route_file_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    assert!(matches!(
        RouteDataset::load_from(&path),
        Err(DatasetError::Empty)
    ));
}
