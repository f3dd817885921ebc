use serde::{Deserialize, Serialize};

/// Placeholder class name used when no public class declaration is found
pub const UNKNOWN_CLASS: &str = "UnknownClass";

/// Member visibility in Java source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }

    /// Parse a visibility keyword. Anything unrecognized maps to private,
    /// the safest assumption for test planning.
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "public" => Visibility::Public,
            "protected" => Visibility::Protected,
            _ => Visibility::Private,
        }
    }
}

/// A method extracted from Java source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub return_type: String,
    /// Declaration text up to (not including) the body opening brace
    pub signature: String,
}

/// A field extracted from Java source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: String,
    pub visibility: Visibility,
}

/// Structural facts pulled from one Java source file.
///
/// Produced once by the extractor and read-only afterward. Extraction is
/// best-effort pattern matching, so absent parts fall back to documented
/// defaults rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSource {
    pub class_name: String,
    pub package: String,
    pub imports: Vec<String>,
    pub methods: Vec<MethodInfo>,
    pub fields: Vec<FieldInfo>,
}

impl Default for ParsedSource {
    fn default() -> Self {
        Self {
            class_name: UNKNOWN_CLASS.to_string(),
            package: String::new(),
            imports: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }
}
