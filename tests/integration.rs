// SPDX-License-Identifier: MPL-2.0
use art_space::config::{self, CarouselConfig, Config, GeneralConfig, CONFIG_LOAD_WARNING};
use art_space::i18n::fluent::I18n;
use art_space::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        carousel: CarouselConfig::default(),
    };
    config::save_to_path(&english, &config_path).expect("Failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("action-next"), "Next");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..english.general.clone()
        },
        ..english
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("action-next"), "Suivant");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("es".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_eq!(i18n.tr("action-next"), "Siguiente");
}

#[test]
fn test_missing_config_dir_uses_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
    assert_eq!(config.carousel.transition().as_millis(), 300);
    assert!(config.carousel.keyboard_navigation_enabled());
}

#[test]
fn test_corrupted_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[carousel\ntransition_ms = ")
        .expect("Failed to write corrupted config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
}

#[test]
fn test_partial_config_keeps_section_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[carousel]\ntransition_ms = 5000\n",
    )
    .expect("Failed to write partial config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general, GeneralConfig::default());
    // Out-of-range durations are clamped, not rejected.
    assert_eq!(config.carousel.transition().as_millis(), 2000);
    assert!(config.carousel.keyboard_navigation_enabled());
}
