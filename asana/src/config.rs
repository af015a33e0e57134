use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Environment variables consulted when the config file omits credentials.
pub const TOKEN_ENV: &str = "ASANA_ACCESS_TOKEN";
pub const WORKSPACE_ENV: &str = "ASANA_WORKSPACE_ID";

/// Upstream API configuration section.
///
/// Credentials are optional here so a deployment can keep the token out of
/// the config file and supply it through the environment instead.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub token: Option<String>,
    pub workspace: Option<String>,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: None,
            workspace: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Fills credentials from the process environment where the file left
    /// them unset. Empty values count as unset.
    pub fn merge_env(&mut self) {
        if self.token.is_none() {
            self.token = std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty());
        }
        if self.workspace.is_none() {
            self.workspace = std::env::var(WORKSPACE_ENV).ok().filter(|v| !v.is_empty());
        }
    }

    /// Both credentials, or `None` when either is missing.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.token, &self.workspace) {
            (Some(token), Some(workspace)) => Some(Credentials {
                token: token.clone(),
                workspace: workspace.clone(),
            }),
            _ => None,
        }
    }
}

/// A complete set of credentials: bearer token plus workspace identifier.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub token: String,
    pub workspace: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_asana() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn credentials_require_both_values() {
        let mut config = Config {
            token: Some("pat-123".into()),
            ..Config::default()
        };
        assert!(config.credentials().is_none());

        config.workspace = Some("1200000000000001".into());
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.token, "pat-123");
        assert_eq!(credentials.workspace, "1200000000000001");
    }
}
