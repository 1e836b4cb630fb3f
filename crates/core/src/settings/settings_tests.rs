use rust_decimal_macros::dec;
use tempfile::TempDir;

use crate::errors::Error;
use crate::settings::{FeePolicy, FeeRounding, Settings, SettingsService};

#[test]
fn fee_policy_floors_by_default() {
    let policy = FeePolicy {
        rate: dec!(0.001),
        rounding: FeeRounding::Floor,
    };
    // 1000 * 0.001 = 1 exactly, 500 * 0.001 = 0.5 -> 0
    assert_eq!(policy.fee(dec!(1000)), dec!(1));
    assert_eq!(policy.fee(dec!(500)), dec!(0));
    assert_eq!(policy.fee(dec!(1999)), dec!(1));
}

#[test]
fn fee_policy_rounding_variants() {
    let nearest = FeePolicy {
        rate: dec!(0.001),
        rounding: FeeRounding::Nearest,
    };
    assert_eq!(nearest.fee(dec!(1500)), dec!(2));

    let exact = FeePolicy {
        rate: dec!(0.001),
        rounding: FeeRounding::Exact,
    };
    assert_eq!(exact.fee(dec!(1500)), dec!(1.5));
}

#[test]
fn missing_settings_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let service = SettingsService::new(dir.path().join("settings.json"));
    let settings = service.load().unwrap();

    assert_eq!(settings.accounts.len(), 2);
    assert_eq!(settings.account("domestic").unwrap().fee_rate, dec!(0.001));
    assert_eq!(settings.account("foreign").unwrap().fee_rate, dec!(0.002));
    assert_eq!(
        settings.concentration_limit("Foreign Equity Sector"),
        Some(dec!(10))
    );
    assert_eq!(settings.concentration_limit("Unclassified"), None);
}

#[test]
fn in_directory_uses_the_default_file_name() {
    let dir = TempDir::new().unwrap();
    let service = SettingsService::in_directory(dir.path());

    service.save(&Settings::default()).unwrap();
    assert!(dir.path().join("settings.json").exists());
}

#[test]
fn settings_round_trip() {
    let dir = TempDir::new().unwrap();
    let service = SettingsService::new(dir.path().join("settings.json"));

    let settings = Settings::default();
    service.save(&settings).unwrap();
    let reloaded = service.load().unwrap();

    assert_eq!(reloaded.display_fx_rate, settings.display_fx_rate);
    assert_eq!(reloaded.target_window("Domestic Equity Index"), Some(60));
}

#[test]
fn malformed_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let service = SettingsService::new(&path);
    assert!(matches!(
        service.load(),
        Err(Error::InvalidConfigValue(_))
    ));
}

#[test]
fn unknown_account_is_a_config_error() {
    let settings = Settings::default();
    assert!(matches!(
        settings.account("margin"),
        Err(Error::MissingConfigKey(_))
    ));
}
