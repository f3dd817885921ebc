#![allow(dead_code)]
//! JUnitGen - LLM-assisted JUnit test skeleton generator
//!
//! JUnitGen reads a Java source file, extracts its structure with
//! best-effort pattern matching, derives a deterministic test plan from
//! fixed heuristics, asks an Ollama-compatible LLM for each test body,
//! sanitizes the responses down to plausible Java statements, and
//! assembles everything into a single JUnit 5 test class.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementation (generate)
//! - **core**: Core pipeline (extract, strategy, prompts, llm, sanitize, assemble, runner)
//! - **models**: Data structures (config, parsed source, test plan)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, TestGenError};
