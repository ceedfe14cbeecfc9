use config::{Config, ConfigError, Environment, File};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::convert::TryFrom;

const CONFIG_FILE: &str = "cfg/config";

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub weather_api_key: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub debug: bool,
}

/// Reads the port as a wide integer so out-of-range values fail instead of wrapping.
fn deserialize_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let port = i64::deserialize(deserializer)?;
    u16::try_from(port).map_err(|_| D::Error::custom(format!("port {} is out of range", port)))
}

impl Settings {
    pub const DEFAULT_PORT: i64 = 3000;
    pub const DEFAULT_BASE_URL: &'static str = "https://api.forecast.io/forecast";
    // Washington DC
    pub const DEFAULT_LATITUDE: f64 = 38.9649734;
    pub const DEFAULT_LONGITUDE: f64 = -77.0207249;

    /// Defaults, then `cfg/config.*` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::defaults()?;
        settings.merge(File::with_name(CONFIG_FILE).required(false))?;
        settings.merge(Environment::new())?;

        Self::from_config(settings)
    }

    pub fn defaults() -> Result<Config, ConfigError> {
        let mut settings = Config::default();
        settings
            .set_default("port", Self::DEFAULT_PORT)?
            .set_default("base_url", Self::DEFAULT_BASE_URL)?
            .set_default("latitude", Self::DEFAULT_LATITUDE)?
            .set_default("longitude", Self::DEFAULT_LONGITUDE)?
            .set_default("debug", false)?;

        Ok(settings)
    }

    pub fn from_config(settings: Config) -> Result<Self, ConfigError> {
        settings.try_into::<Settings>()
    }
}

#[cfg(test)]
mod settings_test {
    use super::*;

    #[test]
    fn test_defaults_fill_everything_but_the_key() {
        let mut config = Settings::defaults().unwrap();
        config.set("weather_api_key", "secret").unwrap();

        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.weather_api_key, "secret");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.base_url, "https://api.forecast.io/forecast");
        assert_eq!(settings.latitude, 38.9649734);
        assert_eq!(settings.longitude, -77.0207249);
        assert!(!settings.debug);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let config = Settings::defaults().unwrap();

        assert!(Settings::from_config(config).is_err());
    }

    #[test]
    fn test_string_values_are_coerced() {
        let mut config = Settings::defaults().unwrap();
        config.set("weather_api_key", "secret").unwrap();
        config.set("port", "8080").unwrap();
        config.set("debug", "true").unwrap();

        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.port, 8080);
        assert!(settings.debug);
    }

    #[test]
    fn test_out_of_range_port_is_an_error() {
        for port in &["70000", "65536", "-1"] {
            let mut config = Settings::defaults().unwrap();
            config.set("weather_api_key", "secret").unwrap();
            config.set("port", *port).unwrap();

            let error = Settings::from_config(config).unwrap_err();

            assert!(error.to_string().contains("out of range"), "{}: {}", port, error);
        }
    }

    #[test]
    fn test_highest_port_is_accepted() {
        let mut config = Settings::defaults().unwrap();
        config.set("weather_api_key", "secret").unwrap();
        config.set("port", 65535i64).unwrap();

        assert_eq!(Settings::from_config(config).unwrap().port, 65535);
    }
}
