use std::time::Duration;

use glam::Vec3;

use vitalview_core::config::{parse_hex_color, AppConfig};
use vitalview_core::error::VitalViewError;
use vitalview_core::lighting::EnvironmentPreset;

#[test]
fn test_default_config_values() {
    let config = AppConfig::default();
    assert_eq!(config.viewer.background_rgb().unwrap(), [0xf5, 0xf5, 0xf5]);
    assert_eq!(config.viewer.environment, EnvironmentPreset::Studio);
    assert_eq!(config.viewer.tumor_offset(), Vec3::new(80.0, -30.0, -20.0));
    assert_eq!(config.viewer.initial_stage().unwrap().index(), 0);
    assert_eq!(config.report.delay(), Duration::from_secs(2));
    assert_eq!(config.upload.filter().extensions().len(), 6);
}

#[test]
fn test_config_toml_roundtrip() {
    let config = AppConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("[viewer]"));
    assert!(text.contains("environment = \"studio\""));

    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.viewer.model_paths, config.viewer.model_paths);
    assert_eq!(parsed.report.mock, config.report.mock);
    assert_eq!(parsed.upload.accept, config.upload.accept);
}

#[test]
fn test_partial_config_fills_defaults() {
    let text = r##"
[viewer]
background_color = "#102030"
environment = "night"
initial_stage = 3

[report]
delay_ms = 0

[report.mock]
nodule_size_mm = 7.5
"##;
    let config: AppConfig = toml::from_str(text).unwrap();
    assert_eq!(config.viewer.background_rgb().unwrap(), [0x10, 0x20, 0x30]);
    assert_eq!(config.viewer.environment, EnvironmentPreset::Night);
    assert_eq!(config.viewer.initial_stage().unwrap().index(), 3);
    assert_eq!(config.viewer.height, 600.0);
    assert!(config.report.delay().is_zero());
    assert_eq!(config.report.mock.nodule_size_mm, 7.5);
    assert_eq!(config.report.mock.density, "Part-solid");
    assert_eq!(config.upload.accept.len(), 6);
}

#[test]
fn test_out_of_range_initial_stage() {
    let config: AppConfig = toml::from_str("[viewer]\ninitial_stage = 9\n").unwrap();
    assert!(matches!(
        config.viewer.initial_stage(),
        Err(VitalViewError::InvalidStage { index: 9, .. })
    ));
}

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_hex_color("#ff8000").unwrap(), [255, 128, 0]);
    assert_eq!(parse_hex_color("00FF7f").unwrap(), [0, 255, 127]);
    assert!(matches!(parse_hex_color("#fff"), Err(VitalViewError::InvalidColor(_))));
    assert!(matches!(parse_hex_color("#gg0000"), Err(VitalViewError::InvalidColor(_))));
}

#[test]
fn test_environment_preset_names() {
    for preset in EnvironmentPreset::ALL {
        let parsed: EnvironmentPreset = preset.to_string().parse().unwrap();
        assert_eq!(parsed, *preset);
    }
    assert_eq!("Sunset".parse::<EnvironmentPreset>().unwrap(), EnvironmentPreset::Sunset);
    assert!(matches!(
        "moon".parse::<EnvironmentPreset>(),
        Err(VitalViewError::UnknownPreset(_))
    ));
}
