use anyhow::{bail, Context};
use folio_core::settings::{DisplaySettings, DisplaySettingsUpdate};
use std::{path::PathBuf, time::Duration};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct Config {
    pub snapshot_path: PathBuf,
    pub session_path: PathBuf,
    /// `None` renders once and exits
    pub refresh_interval: Option<Duration>,
    pub display: DisplaySettings,
    pub output: OutputFormat,
    /// Trading212 export merged into the activity tables
    pub import_csv: Option<(PathBuf, String)>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let snapshot_path = lookup("FOLIO_SNAPSHOT_PATH")
            .unwrap_or_else(|| "portfolios.json".into())
            .into();
        let session_path = lookup("FOLIO_SESSION_PATH")
            .unwrap_or_else(|| "session.json".into())
            .into();

        let refresh_secs: u64 = lookup("FOLIO_REFRESH_SECS")
            .unwrap_or_else(|| "0".into())
            .trim()
            .parse()
            .context("Invalid FOLIO_REFRESH_SECS")?;
        let refresh_interval = (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs));

        let mut display = DisplaySettings::default();
        display.apply(DisplaySettingsUpdate {
            default_currency_symbol: lookup("FOLIO_CURRENCY_SYMBOL"),
            euro_currency_symbol: lookup("FOLIO_EURO_SYMBOL"),
        })?;

        let output = match lookup("FOLIO_OUTPUT_FORMAT").as_deref().map(str::trim) {
            None | Some("") => OutputFormat::Text,
            Some(f) if f.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(f) if f.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(other) => bail!("Invalid FOLIO_OUTPUT_FORMAT '{}': expected text or json", other),
        };

        let import_csv = match lookup("FOLIO_IMPORT_CSV") {
            Some(path) if !path.trim().is_empty() => {
                let portfolio_id = lookup("FOLIO_IMPORT_PORTFOLIO")
                    .filter(|id| !id.trim().is_empty())
                    .context("FOLIO_IMPORT_PORTFOLIO is required with FOLIO_IMPORT_CSV")?;
                Some((PathBuf::from(path), portfolio_id))
            }
            _ => None,
        };

        Ok(Self {
            snapshot_path,
            session_path,
            refresh_interval,
            display,
            output,
            import_csv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("portfolios.json"));
        assert_eq!(config.session_path, PathBuf::from("session.json"));
        assert_eq!(config.refresh_interval, None);
        assert_eq!(config.display, DisplaySettings::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.import_csv.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FOLIO_REFRESH_SECS", "30"),
            ("FOLIO_CURRENCY_SYMBOL", "£"),
            ("FOLIO_OUTPUT_FORMAT", "JSON"),
            ("FOLIO_IMPORT_CSV", "t212.csv"),
            ("FOLIO_IMPORT_PORTFOLIO", "7"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(30)));
        assert_eq!(config.display.default_currency_symbol, "£");
        assert_eq!(config.display.euro_currency_symbol, "€");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(
            config.import_csv,
            Some((PathBuf::from("t212.csv"), "7".to_string()))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("FOLIO_REFRESH_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOLIO_CURRENCY_SYMBOL", "  ")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOLIO_OUTPUT_FORMAT", "xml")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOLIO_IMPORT_CSV", "a.csv")])).is_err());
    }
}
