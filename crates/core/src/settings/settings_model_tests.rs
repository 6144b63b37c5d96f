//! Tests for display settings.

use super::*;

#[test]
fn test_defaults() {
    let settings = DisplaySettings::default();
    assert_eq!(settings.default_currency_symbol, "$");
    assert_eq!(settings.euro_currency_symbol, "€");
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let settings: DisplaySettings =
        serde_json::from_str(r#"{ "defaultCurrencySymbol": "£" }"#).unwrap();
    assert_eq!(settings.default_currency_symbol, "£");
    assert_eq!(settings.euro_currency_symbol, "€");
}

#[test]
fn test_apply_update() {
    let mut settings = DisplaySettings::default();
    settings
        .apply(DisplaySettingsUpdate {
            default_currency_symbol: Some(" USD ".to_string()),
            euro_currency_symbol: None,
        })
        .unwrap();
    assert_eq!(settings.default_currency_symbol, "USD");
    assert_eq!(settings.euro_currency_symbol, "€");
}

#[test]
fn test_apply_rejects_blank_symbol() {
    let mut settings = DisplaySettings::default();
    let result = settings.apply(DisplaySettingsUpdate {
        default_currency_symbol: Some("   ".to_string()),
        euro_currency_symbol: None,
    });
    assert!(result.is_err());
    assert_eq!(settings.default_currency_symbol, "$");
}
