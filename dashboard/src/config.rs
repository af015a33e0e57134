use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,

    #[error("Batch size cannot be 0")]
    InvalidBatchSize,
}

/// Network listener configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

/// Pacing for the per-project task fan-out.
///
/// Defaults reproduce the dashboard's historical behavior: windows of 5
/// concurrent fetches with a 100ms pause between windows.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    /// Concurrent task fetches per window
    pub size: usize,
    /// Pause between windows, in milliseconds
    pub pause_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            size: 5,
            pause_ms: 100,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size == 0 {
            return Err(ValidationError::InvalidBatchSize);
        }
        Ok(())
    }
}

/// Dashboard service configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub listener: Listener,
    pub asana: asana::Config,
    pub batch: BatchConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let yaml = r#"
listener:
    host: "0.0.0.0"
    port: 8080
asana:
    token: pat-123
    workspace: "1200000000000001"
batch:
    size: 10
    pause_ms: 250
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.asana.token.as_deref(), Some("pat-123"));
        assert_eq!(config.batch.size, 10);
        assert_eq!(config.batch.pause_ms, 250);
    }

    #[test]
    fn test_defaults_for_omitted_sections() {
        let config: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.listener, Listener::default());
        assert_eq!(config.batch.size, 5);
        assert_eq!(config.batch.pause_ms, 100);
        assert_eq!(config.asana.base_url, asana::config::DEFAULT_BASE_URL);
        assert!(config.asana.credentials().is_none());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::default();
        config.listener.port = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ValidationError::InvalidPort
        ));

        let mut config = Config::default();
        config.batch.size = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ValidationError::InvalidBatchSize
        ));
    }

    #[test]
    fn test_deserialization_errors() {
        // Invalid port type
        assert!(
            serde_yaml::from_str::<Config>(
                r#"
listener: {host: "0.0.0.0", port: "not_a_number"}
"#
            )
            .is_err()
        );
    }
}
