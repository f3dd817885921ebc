//! Sequential pipeline driver: extract, plan, generate per test case,
//! assemble.
//!
//! Test cases are processed one at a time on purpose: a fixed delay after
//! each live LLM call keeps the tool under provider rate limits. A failed
//! or skipped generation degrades that one test method to the placeholder
//! body; it never aborts the run.

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::{
    assemble, build_test_prompt, extract, sanitize, strategy, LlmClient, SanitizeConfig,
    SYSTEM_PROMPT_TESTGEN,
};
use crate::error::Result;
use crate::models::{Config, GenerationOutcome, TestPlan};

/// Result of one full pipeline run over one source file
#[derive(Debug)]
pub struct PipelineOutput {
    /// Name of the generated test class, used for the output filename
    pub test_class_name: String,
    /// Complete assembled test file text
    pub text: String,
    /// Number of planned test cases
    pub case_count: usize,
    /// How many cases fell back to the placeholder body
    pub fallback_count: usize,
}

/// Run the full pipeline over one Java source text
pub async fn run_pipeline(source: &str, config: &Config) -> Result<PipelineOutput> {
    let parsed = extract(source);
    info!("Found class: {}", parsed.class_name);
    info!("Found {} methods", parsed.methods.len());

    let plan = strategy::plan(&parsed);
    info!("Planned {} test cases", plan.test_cases.len());

    let client = if config.behavior.offline {
        info!("Offline mode: all test bodies will use the placeholder");
        None
    } else {
        let client = LlmClient::new(config.llm.clone())?;
        match client.health_check().await {
            Ok(true) => Some(client),
            Ok(false) => {
                warn!(
                    "LLM server at {} is not healthy, using placeholder bodies",
                    config.llm.url
                );
                None
            }
            Err(e) => {
                warn!("LLM server unreachable, using placeholder bodies: {}", e);
                None
            }
        }
    };

    let bodies = generate_bodies(client.as_ref(), config, &plan).await;
    let fallback_count = bodies.values().filter(|o| o.is_fallback()).count();

    let text = assemble(&plan, &parsed, &bodies);

    Ok(PipelineOutput {
        test_class_name: plan.test_class_name,
        case_count: plan.test_cases.len(),
        fallback_count,
        text,
    })
}

/// Generate and sanitize one body per planned test case, strictly in
/// order, sleeping after each live call
async fn generate_bodies(
    client: Option<&LlmClient>,
    config: &Config,
    plan: &TestPlan,
) -> BTreeMap<String, GenerationOutcome> {
    let sanitize_cfg = SanitizeConfig {
        indent: config.format.indent(),
    };
    let delay = Duration::from_secs(config.llm.request_delay_seconds);
    let mut bodies = BTreeMap::new();

    for case in &plan.test_cases {
        let outcome = match client {
            None if config.behavior.offline => {
                GenerationOutcome::Fallback("offline mode".to_string())
            }
            None => GenerationOutcome::Fallback("LLM unavailable".to_string()),
            Some(client) => {
                info!("Generating test: {}", case.test_name);
                let prompt = build_test_prompt(case);
                match client
                    .generate(
                        Some(SYSTEM_PROMPT_TESTGEN),
                        &prompt,
                        config.behavior.stream_output,
                    )
                    .await
                {
                    Ok(raw) => {
                        let body = sanitize(&raw, &sanitize_cfg);
                        debug!(
                            "Sanitized body for {}: {} chars",
                            case.test_name,
                            body.len()
                        );
                        GenerationOutcome::Generated(body)
                    }
                    Err(e) => {
                        warn!("LLM call failed for {}, using template: {}", case.test_name, e);
                        GenerationOutcome::Fallback(e.to_string())
                    }
                }
            }
        };

        let was_live = client.is_some() && !outcome.is_fallback();
        bodies.insert(case.test_name.clone(), outcome);

        // Rate-limit spacing between live calls
        if was_live && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    bodies
}
