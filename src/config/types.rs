// Configuration type definitions

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "QnA Chatbot";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 15;

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_reveal() -> bool {
    true
}

fn default_reveal_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

/// Knowledge base endpoint section
///
/// Every field except `timeout_secs` is required; they stay optional here so
/// that a missing key can be reported by name during validation.
#[derive(Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub deployment_name: Option<String>,
    #[serde(default)]
    pub subscription_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            base_url: None,
            project_name: None,
            api_version: None,
            deployment_name: None,
            subscription_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("project_name", &self.project_name)
            .field("api_version", &self.api_version)
            .field("deployment_name", &self.deployment_name)
            .field(
                "subscription_key",
                &self.subscription_key.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Display section
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Reveal new answers character by character
    #[serde(default = "default_reveal")]
    pub reveal: bool,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            reveal: true,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_title(),
            endpoint: EndpointConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Validated connection settings for the knowledge base client
#[derive(Clone, PartialEq, Eq)]
pub struct QnaSettings {
    pub base_url: String,
    pub project_name: String,
    pub api_version: String,
    pub deployment_name: String,
    pub subscription_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for QnaSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QnaSettings")
            .field("base_url", &self.base_url)
            .field("project_name", &self.project_name)
            .field("api_version", &self.api_version)
            .field("deployment_name", &self.deployment_name)
            .field("subscription_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.endpoint.base_url.is_none());
        assert_eq!(config.endpoint.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.display.reveal);
        assert_eq!(config.display.reveal_delay_ms, DEFAULT_REVEAL_DELAY_MS);
    }

    #[test]
    fn test_debug_output_redacts_subscription_key() {
        let config: Config = toml::from_str(
            r#"
[endpoint]
subscription_key = "super-secret"
"#,
        )
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    // Missing display fields fall back to defaults independently of each other
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_display_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_reveal in prop::bool::ANY,
            include_delay in prop::bool::ANY,
            delay in 1u64..1000,
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[display]\n");
                if include_reveal {
                    toml_content.push_str("reveal = false\n");
                }
                if include_delay {
                    toml_content.push_str(&format!("reveal_delay_ms = {}\n", delay));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            let expected_reveal = !(include_section && include_reveal);
            let expected_delay = if include_section && include_delay {
                delay
            } else {
                DEFAULT_REVEAL_DELAY_MS
            };
            prop_assert_eq!(config.display.reveal, expected_reveal);
            prop_assert_eq!(config.display.reveal_delay_ms, expected_delay);
        }
    }
}
