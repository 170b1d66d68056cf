use peaktrend::config::{AppConfig, ConfigManager, PeakBackend};
use peaktrend::PeaktrendError;

#[test]
fn test_save_and_load_round_trip() {
    let path = std::env::temp_dir().join(format!("peaktrend_config_{}.toml", std::process::id()));

    let mut manager = ConfigManager::new();
    manager
        .update(|c| {
            c.detection.prominence = 2.0;
            c.detection.distance = 3;
            c.detection.backend = PeakBackend::FindPeaks;
            c.sampling.sample_length = 60;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let mut loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    let config = loaded.get();
    assert_eq!(config.detection.prominence, 2.0);
    assert_eq!(config.detection.distance, 3);
    assert_eq!(config.detection.backend, PeakBackend::FindPeaks);
    assert_eq!(config.sampling.sample_length, 60);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_is_configuration_error() {
    let mut manager = ConfigManager::new();
    let result = manager.load_from_file("/nonexistent/peaktrend.toml");
    assert!(matches!(result, Err(PeaktrendError::Configuration(_))));
}

#[test]
fn test_serialized_defaults_parse_back() {
    let text = AppConfig::default().to_toml_string().unwrap();
    let parsed = AppConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed.detection.prominence, 5.0);
    assert_eq!(parsed.detection.backend, PeakBackend::Builtin);
    assert_eq!(parsed.sampling.sample_length, 120);
}
