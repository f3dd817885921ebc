use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::run_pipeline;
use crate::error::{Result, TestGenError};
use crate::models::Config;

/// Options for the generate command
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub model: Option<String>,
    pub url: Option<String>,
    pub timeout: Option<u64>,
    pub no_stream: bool,
    pub offline: bool,
}

/// Generate a JUnit test skeleton for one Java source file.
///
/// Validates the input path before any pipeline work, then runs the full
/// extract/plan/generate/assemble pipeline and writes the result in one
/// shot. Returns the path of the written test file.
pub async fn generate_tests(
    input_file: &Path,
    output_dir: &Path,
    options: GenerateOptions,
) -> Result<PathBuf> {
    if !input_file.exists() {
        return Err(TestGenError::InputNotFound(input_file.to_path_buf()));
    }
    if input_file.extension().and_then(|e| e.to_str()) != Some("java") {
        return Err(TestGenError::NotJavaSource(input_file.to_path_buf()));
    }

    let config = Config::load_from_dir(&std::env::current_dir()?)?.with_overrides(
        options.model,
        options.url,
        options.timeout,
        options.no_stream,
        options.offline,
    );
    info!(
        "Configuration loaded: model={}, url={}, timeout={}s",
        config.llm.model, config.llm.url, config.llm.timeout_seconds
    );

    info!("Processing Java file: {}", input_file.display());
    let source = fs::read_to_string(input_file).map_err(|e| TestGenError::ReadInput {
        path: input_file.to_path_buf(),
        source: e,
    })?;

    let output = run_pipeline(&source, &config).await?;

    if output.fallback_count > 0 {
        warn!(
            "{} of {} test bodies used the placeholder template",
            output.fallback_count, output.case_count
        );
    }

    // The file is written once, after full assembly, so a failure can
    // never leave a partial test file behind.
    if !output_dir.exists() && config.behavior.create_output_dirs {
        fs::create_dir_all(output_dir)?;
    }
    let output_path = output_dir.join(format!("{}.java", output.test_class_name));
    fs::write(&output_path, &output.text).map_err(|e| TestGenError::WriteOutput {
        path: output_path.clone(),
        source: e,
    })?;

    info!("Generated test file: {}", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_input_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = generate_tests(
            &temp.path().join("Missing.java"),
            temp.path(),
            GenerateOptions {
                offline: true,
                ..GenerateOptions::default()
            },
        )
        .await;

        assert!(matches!(result, Err(TestGenError::InputNotFound(_))));
    }

    #[tokio::test]
    async fn test_wrong_extension_is_fatal() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.py");
        fs::write(&input, "print('hi')").unwrap();

        let result = generate_tests(
            &input,
            temp.path(),
            GenerateOptions {
                offline: true,
                ..GenerateOptions::default()
            },
        )
        .await;

        assert!(matches!(result, Err(TestGenError::NotJavaSource(_))));
    }
}
