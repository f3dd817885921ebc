use serde::{Deserialize, Serialize};

/// Category of a planned test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    HappyPath,
    EdgeCase,
    NullCase,
    Exception,
}

impl TestCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::HappyPath => "happy_path",
            TestCategory::EdgeCase => "edge_case",
            TestCategory::NullCase => "null_case",
            TestCategory::Exception => "exception",
        }
    }

    /// Test-name suffix for this category
    pub fn name_suffix(&self) -> &'static str {
        match self {
            TestCategory::HappyPath => "HappyPath",
            TestCategory::EdgeCase => "WithZero",
            TestCategory::NullCase => "WithNullInput",
            TestCategory::Exception => "ThrowsException",
        }
    }
}

/// A named, categorized intent for one generated test method, body not
/// yet attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseDescriptor {
    pub test_name: String,
    pub category: TestCategory,
    pub description: String,
    pub expected_behavior: String,
}

/// Setup work the generated test class will need.
///
/// Variant order is the emission order in the setUp block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupRequirement {
    ObjectInitialization,
    DatabaseSetup,
    FileSystemSetup,
}

/// Dependency category that the generated tests should mock.
///
/// Variant order is the emission order, independent of import order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockRequirement {
    Http,
    Database,
    ExternalService,
    FileSystem,
}

/// Complete test plan for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlan {
    pub test_class_name: String,
    pub test_cases: Vec<TestCaseDescriptor>,
    pub setup_requirements: Vec<SetupRequirement>,
    pub mock_requirements: Vec<MockRequirement>,
}

/// Result of one external generation attempt.
///
/// The assembler consumes this directly: a fallback never aborts the run,
/// it just swaps in the fixed placeholder body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Sanitized body text returned by the LLM
    Generated(String),
    /// Reason the LLM output was unavailable or unusable
    Fallback(String),
}

impl GenerationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback(_))
    }
}
