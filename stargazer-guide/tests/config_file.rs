#![cfg(feature = "serde")]

use std::io::Write;

use stargazer_chart::SkyChart;
use stargazer_guide::config::GuideConfig;
use stargazer_guide::errors::GuideError;
use stargazer_guide::sky::{assess_with, DistanceMetric};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "chart": {{ "size": 300.0 }},
            "reference_points": [
                {{ "name": "Las Vegas", "location": {{ "latitude": 36.1699, "longitude": -115.1398 }} }}
            ],
            "distance_metric": "great_circle"
        }}"#
    )
    .unwrap();

    let config = GuideConfig::load(file.path()).unwrap();
    assert_eq!(config.chart.size, 300.0);
    assert_eq!(config.chart.star_count, 150);
    assert_eq!(config.distance_metric, DistanceMetric::GreatCircle);

    let chart = SkyChart::from_config(&config.chart);
    assert_eq!(chart.radius, 150.0);

    let sample = assess_with(
        36.1699,
        -115.1398,
        config.reference_points(),
        config.distance_metric,
    );
    assert_eq!(sample.bortle_class.value(), 9);
    assert_eq!(sample.nearest.unwrap().name, "Las Vegas");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GuideConfig::load(dir.path().join("absent.json")).unwrap_err();
    match err {
        GuideError::Config { path, .. } => assert!(path.ends_with("absent.json")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_bad_json_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ \"chart\": \"big\" }}").unwrap();
    let err = GuideConfig::load(file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(&file.path().display().to_string()));
}
