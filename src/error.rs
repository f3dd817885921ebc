use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for JUnitGen
#[derive(Error, Debug)]
pub enum TestGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Input file must be a Java source file (.java): {0}")]
    NotJavaSource(PathBuf),

    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the LLM API
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream error: {0}")]
    StreamError(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(0)
        } else if err.is_connect() {
            LlmError::ConnectionRefused(err.to_string())
        } else if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, TestGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = TestGenError::InputNotFound(PathBuf::from("missing/Foo.java"));
        assert!(err.to_string().contains("missing/Foo.java"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_not_java_source_display() {
        let err = TestGenError::NotJavaSource(PathBuf::from("main.py"));
        assert!(err.to_string().contains(".java"));
        assert!(err.to_string().contains("main.py"));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Timeout(300);
        assert_eq!(err.to_string(), "Request timeout after 300 seconds");

        let err = LlmError::HttpError {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_llm_error_wraps_into_testgen_error() {
        let err: TestGenError = LlmError::RequestFailed("boom".to_string()).into();
        assert!(err.to_string().contains("LLM error"));
        assert!(err.to_string().contains("boom"));
    }
}
