//! Multi-pass cleanup of LLM responses into plausible Java statements.
//!
//! LLMs return code wrapped in markdown fences, intro sentences, trailing
//! explanations, and sometimes a re-echo of the test method signature the
//! body is meant to go inside. This module reduces all of that to a block
//! of indented Java lines using an ordered sequence of text-rewrite and
//! line-classification passes. The order is load-bearing: fences must go
//! before prose detection, prose before line classification.
//!
//! Every pass is a pure text-to-text function. The whole pipeline is
//! total (worst case: empty output) and idempotent on already-clean
//! input. It is a heuristic, not a parser: a multi-line expression with
//! no trailing `;` can be dropped, and prose containing a parenthesis can
//! survive. That tradeoff is accepted.

use regex::Regex;
use tracing::debug;

/// Tokens that mark a line as plausible Java even without statement
/// punctuation: language keywords, JUnit assertion names, and the class
/// names the prompt's style example uses.
const JAVA_VOCAB: [&str; 48] = [
    "import", "package", "public", "private", "protected", "static", "final", "class",
    "interface", "if", "else", "for", "while", "do", "switch", "case", "break",
    "continue", "return", "try", "catch", "finally", "throw", "throws", "new",
    "this", "super", "null", "true", "false", "void", "int", "double", "boolean",
    "String", "List", "Map", "Set", "assertEquals", "assertTrue", "assertFalse",
    "assertThrows", "assertNotNull", "assertNull", "Calculator", "Arrange", "Act", "Assert",
];

/// Sanitizer configuration, threaded in from [`crate::models::FormatConfig`]
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    /// Indentation prefix every retained non-blank line must carry
    pub indent: String,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            indent: "        ".to_string(),
        }
    }
}

/// Reduce a raw LLM response to a block of plausible Java statements.
///
/// Applies the nine passes strictly in order. Never fails; if nothing
/// survives, the result is an empty string and the assembler still emits
/// a closed method around it.
pub fn sanitize(raw: &str, cfg: &SanitizeConfig) -> String {
    let text = strip_fences(raw);
    let text = strip_prose(&text);
    let text = strip_duplicate_scaffold(&text);
    let text = strip_emphasis(&text);
    let text = normalize_labels(&text, &cfg.indent);
    let text = strip_structural_noise(&text);
    let lines = classify_lines(&text);
    let lines = enforce_indent(lines, &cfg.indent);
    let lines = trim_blank_edges(lines);

    debug!("Sanitized response down to {} lines", lines.len());
    lines.join("\n")
}

/// Pass 1: drop fence-marker lines and trailing fence markers.
///
/// A line that is only a fence (with optional language tag) is removed
/// entirely; a fence glued to the end of a code line is cut off.
fn strip_fences(text: &str) -> String {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("```") {
                return None;
            }
            if trimmed.ends_with("```") {
                return Some(line.trim_end().trim_end_matches('`').trim_end().to_string());
            }
            Some(line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pass 2: remove intro phrases anywhere, and cut the text at the first
/// trailing-explanation marker. The trailing cut is greedy by design:
/// once a marker like "Explanation:" appears, nothing after it is code.
/// The intro patterns are anchored on "code"/"implementation" so the
/// non-greedy colon scan can only ever consume an intro phrase, never a
/// code block that happens to contain a colon further down.
fn strip_prose(text: &str) -> String {
    let intro_patterns = [
        r"(?s)Here is the.*?code.*?:",
        r"(?s)Here's the.*?code.*?:",
        r"(?s)Here is the.*?implementation.*?:",
        r"(?s)Here's the.*?implementation.*?:",
        r"(?s)The following is the.*?:",
        r"(?s)Below is the.*?:",
    ];

    let mut result = text.to_string();
    for pattern in intro_patterns {
        let re = Regex::new(pattern).unwrap();
        result = re.replace_all(&result, "").to_string();
    }

    let trailing_patterns = [
        r"(?s)\n\s*Explanation:.*$",
        r"(?s)\n\s*This test.*$",
        r"(?s)\n\s*In this.*$",
        r"(?s)\n\s*Note:.*$",
        r"(?s)\n\s*The.*?method.*$",
    ];

    for pattern in trailing_patterns {
        let re = Regex::new(pattern).unwrap();
        result = re.replace(&result, "").to_string();
    }

    result
}

/// Pass 3: remove re-echoed test or setup method openers. The body is
/// inserted inside a template-provided signature, so a second one would
/// nest illegally.
fn strip_duplicate_scaffold(text: &str) -> String {
    let test_sig = Regex::new(r"@Test\s*\n\s*void\s+test\w+\(\)\s*\{").unwrap();
    let result = test_sig.replace_all(text, "").to_string();

    let setup_sig = Regex::new(r"@BeforeEach\s*\n\s*void\s+setUp\(\)\s*\{[^}]*\}").unwrap();
    setup_sig.replace_all(&result, "").to_string()
}

/// Pass 4: unwrap markdown bold and italic, keeping the inner text
fn strip_emphasis(text: &str) -> String {
    let bold = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    let result = bold.replace_all(text, "$1").to_string();

    let italic = Regex::new(r"\*(.*?)\*").unwrap();
    italic.replace_all(&result, "$1").to_string()
}

/// Pass 5: rewrite bare "Arrange:" / "Act:" / "Assert:" label lines into
/// the indented comment form the template uses
fn normalize_labels(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| match line.trim() {
            "Arrange:" => format!("{}// Arrange", indent),
            "Act:" => format!("{}// Act", indent),
            "Assert:" => format!("{}// Assert", indent),
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pass 6: drop lone opening braces and flush-left narrative lines.
///
/// A line starting in column zero that is not a comment and does not end
/// in `;`, `{`, or `}` is presumed leftover prose. Indented lines are
/// left for the classification pass.
fn strip_structural_noise(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed == "{" {
                return false;
            }
            let flush_left = line
                .chars()
                .next()
                .map(|c| !c.is_whitespace() && c != '/')
                .unwrap_or(false);
            if flush_left
                && !trimmed.ends_with(';')
                && !trimmed.ends_with('{')
                && !trimmed.ends_with('}')
            {
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pass 7: keep each non-blank line only if it looks like Java, meaning
/// a comment, statement punctuation, an assignment, a call, or a known
/// keyword. Blank lines are kept for formatting.
fn classify_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return true;
            }
            trimmed.starts_with("//")
                || trimmed.starts_with("/*")
                || trimmed.ends_with(';')
                || trimmed.ends_with('{')
                || trimmed.ends_with('}')
                || trimmed.contains('=')
                || trimmed.contains('(')
                || JAVA_VOCAB.iter().any(|kw| trimmed.contains(kw))
        })
        .map(|line| line.to_string())
        .collect()
}

/// Pass 8: re-indent retained non-blank lines to the fixed prefix
fn enforce_indent(lines: Vec<String>, indent: &str) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.trim().is_empty() || line.starts_with(indent) {
                line
            } else {
                format!("{}{}", indent, line.trim())
            }
        })
        .collect()
}

/// Pass 9: drop leading and trailing blank lines
fn trim_blank_edges(mut lines: Vec<String>) -> Vec<String> {
    while lines.first().map(|l| l.trim().is_empty()).unwrap_or(false) {
        lines.remove(0);
    }
    while lines.last().map(|l| l.trim().is_empty()).unwrap_or(false) {
        lines.pop();
    }
    lines
}
