//! Structural extraction from Java source text.
//!
//! This is pattern matching, not parsing: each fact is pulled out by an
//! independent regex search over the raw text. It never fails; anything
//! that does not match falls back to a documented default. Known limits:
//! the method matcher uses a non-recursive brace match and stops at the
//! first `}`, so a body containing nested braces is captured incorrectly;
//! fields with initializers or multiple declarators are not matched.

use regex::Regex;
use tracing::debug;

use crate::models::{FieldInfo, MethodInfo, ParsedSource, Visibility, UNKNOWN_CLASS};

/// Extract structural facts from Java source text
pub fn extract(source: &str) -> ParsedSource {
    let parsed = ParsedSource {
        class_name: extract_class_name(source),
        package: extract_package(source),
        imports: extract_imports(source),
        methods: extract_methods(source),
        fields: extract_fields(source),
    };

    debug!(
        "Extracted class {} with {} methods, {} fields, {} imports",
        parsed.class_name,
        parsed.methods.len(),
        parsed.fields.len(),
        parsed.imports.len()
    );

    parsed
}

/// First public class declaration, or the placeholder name
fn extract_class_name(source: &str) -> String {
    let re = Regex::new(r"public\s+class\s+(\w+)").unwrap();
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_CLASS.to_string())
}

/// First package declaration, or empty string
fn extract_package(source: &str) -> String {
    let re = Regex::new(r"package\s+([\w.]+);").unwrap();
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// All import statements in source order, duplicates kept
fn extract_imports(source: &str) -> Vec<String> {
    let re = Regex::new(r"import\s+([\w.*]+);").unwrap();
    re.captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All method declarations matched by the greedy, non-recursive pattern
fn extract_methods(source: &str) -> Vec<MethodInfo> {
    let re = Regex::new(
        r"(?s)(public|private|protected)\s+(\w+)\s+(\w+)\s*\([^)]*\)\s*\{[^}]*\}",
    )
    .unwrap();

    re.captures_iter(source)
        .map(|caps| {
            let full = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let signature = full
                .split('{')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();

            MethodInfo {
                name: caps[3].to_string(),
                visibility: Visibility::parse(&caps[1]),
                return_type: caps[2].to_string(),
                signature,
            }
        })
        .collect()
}

/// All single-declarator field declarations with no initializer
fn extract_fields(source: &str) -> Vec<FieldInfo> {
    let re = Regex::new(r"(private|public|protected)\s+(\w+)\s+(\w+);").unwrap();

    re.captures_iter(source)
        .map(|caps| FieldInfo {
            name: caps[3].to_string(),
            field_type: caps[2].to_string(),
            visibility: Visibility::parse(&caps[1]),
        })
        .collect()
}
