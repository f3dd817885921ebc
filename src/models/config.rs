use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration loaded from junitgen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// LLM API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama-compatible API URL
    #[serde(default = "default_llm_url")]
    pub url: String,
    /// Model name to use
    #[serde(default = "default_model")]
    pub model: String,
    /// Timeout in seconds for API requests
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Maximum tokens per generated test body
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Delay after each request, to stay under provider rate limits
    #[serde(default = "default_request_delay")]
    pub request_delay_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: default_llm_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
            max_tokens: default_max_tokens(),
            request_delay_seconds: default_request_delay(),
        }
    }
}

fn default_llm_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen2.5-coder:7b".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_request_delay() -> u64 {
    10
}

/// Output formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Indentation width for test method bodies
    #[serde(default = "default_indent_spaces")]
    pub indent_spaces: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: default_indent_spaces(),
        }
    }
}

fn default_indent_spaces() -> usize {
    8
}

impl FormatConfig {
    /// The indentation prefix for generated method bodies
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_spaces)
    }
}

/// Behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Show streaming output in terminal
    #[serde(default = "default_stream_output")]
    pub stream_output: bool,
    /// Create output directories if missing
    #[serde(default = "default_create_output_dirs")]
    pub create_output_dirs: bool,
    /// Skip the LLM entirely and emit placeholder bodies
    #[serde(default)]
    pub offline: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            stream_output: default_stream_output(),
            create_output_dirs: default_create_output_dirs(),
            offline: false,
        }
    }
}

fn default_stream_output() -> bool {
    true
}

fn default_create_output_dirs() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.clone(), e))
    }

    /// Try to load config from junitgen.toml in the given directory
    pub fn load_from_dir(dir: &PathBuf) -> Result<Self, ConfigError> {
        let config_path = dir.join("junitgen.toml");
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        url: Option<String>,
        timeout: Option<u64>,
        no_stream: bool,
        offline: bool,
    ) -> Self {
        if let Some(m) = model {
            self.llm.model = m;
        }
        if let Some(u) = url {
            self.llm.url = u;
        }
        if let Some(t) = timeout {
            self.llm.timeout_seconds = t;
        }
        if no_stream {
            self.behavior.stream_output = false;
        }
        if offline {
            self.behavior.offline = true;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.url, "http://localhost:11434");
        assert_eq!(config.llm.model, "qwen2.5-coder:7b");
        assert_eq!(config.llm.timeout_seconds, 300);
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.llm.request_delay_seconds, 10);
        assert_eq!(config.format.indent_spaces, 8);
        assert!(config.behavior.stream_output);
        assert!(config.behavior.create_output_dirs);
        assert!(!config.behavior.offline);
    }

    #[test]
    fn test_format_indent() {
        let format = FormatConfig::default();
        assert_eq!(format.indent(), "        ");
        let format = FormatConfig { indent_spaces: 4 };
        assert_eq!(format.indent(), "    ");
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(
            Some("codellama".to_string()),
            Some("http://remote:11434".to_string()),
            Some(600),
            true,
            true,
        );
        assert_eq!(config.llm.model, "codellama");
        assert_eq!(config.llm.url, "http://remote:11434");
        assert_eq!(config.llm.timeout_seconds, 600);
        assert!(!config.behavior.stream_output);
        assert!(config.behavior.offline);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[llm]
url = "http://custom:8080"
model = "codellama"
timeout_seconds = 120
request_delay_seconds = 2

[format]
indent_spaces = 4

[behavior]
stream_output = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.url, "http://custom:8080");
        assert_eq!(config.llm.model, "codellama");
        assert_eq!(config.llm.timeout_seconds, 120);
        assert_eq!(config.llm.max_tokens, 1000); // default
        assert_eq!(config.llm.request_delay_seconds, 2);
        assert_eq!(config.format.indent_spaces, 4);
        assert!(!config.behavior.stream_output);
    }
}
