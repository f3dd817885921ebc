//! Rule-based test planning from extracted source structure.
//!
//! The rules are fixed and cumulative: every public method gets a happy
//! path case, and may pick up zero/null/exception cases keyed on return
//! type and naming. Non-public methods produce nothing.

use tracing::debug;

use crate::models::{
    MethodInfo, MockRequirement, ParsedSource, SetupRequirement, TestCaseDescriptor, TestCategory,
    TestPlan, Visibility,
};

/// Return types that trigger an additional zero-value edge case
const NUMERIC_TYPES: [&str; 4] = ["int", "long", "double", "float"];

/// Substring markers per mock category, checked in this declaration order
const MOCK_PATTERNS: [(MockRequirement, [&str; 3]); 4] = [
    (MockRequirement::Http, ["HttpClient", "RestTemplate", "WebClient"]),
    (MockRequirement::Database, ["Repository", "DAO", "EntityManager"]),
    (MockRequirement::ExternalService, ["Service", "Client", "API"]),
    (MockRequirement::FileSystem, ["FileWriter", "FileReader", "Path"]),
];

/// Build a test plan for parsed source
pub fn plan(parsed: &ParsedSource) -> TestPlan {
    let test_cases: Vec<TestCaseDescriptor> = parsed
        .methods
        .iter()
        .filter(|m| m.visibility == Visibility::Public)
        .flat_map(method_test_cases)
        .collect();

    debug!(
        "Planned {} test cases for class {}",
        test_cases.len(),
        parsed.class_name
    );

    TestPlan {
        test_class_name: format!("{}Test", parsed.class_name),
        test_cases,
        setup_requirements: setup_requirements(parsed),
        mock_requirements: mock_requirements(&parsed.imports),
    }
}

/// Descriptors for one public method, happy path first
fn method_test_cases(method: &MethodInfo) -> Vec<TestCaseDescriptor> {
    let mut cases = Vec::new();
    let name = &method.name;

    cases.push(TestCaseDescriptor {
        test_name: test_name(name, TestCategory::HappyPath),
        category: TestCategory::HappyPath,
        description: format!("Test {} with valid inputs", name),
        expected_behavior: "Should return expected result".to_string(),
    });

    if NUMERIC_TYPES.contains(&method.return_type.as_str()) {
        cases.push(TestCaseDescriptor {
            test_name: test_name(name, TestCategory::EdgeCase),
            category: TestCategory::EdgeCase,
            description: format!("Test {} with zero values", name),
            expected_behavior: "Should handle zero appropriately".to_string(),
        });
    }

    if method.return_type == "String" {
        cases.push(TestCaseDescriptor {
            test_name: test_name(name, TestCategory::NullCase),
            category: TestCategory::NullCase,
            description: format!("Test {} with null input", name),
            expected_behavior: "Should handle null input gracefully".to_string(),
        });
    }

    let lower = name.to_lowercase();
    if lower.contains("validate") || lower.contains("check") {
        cases.push(TestCaseDescriptor {
            test_name: test_name(name, TestCategory::Exception),
            category: TestCategory::Exception,
            description: format!("Test {} throws exception for invalid input", name),
            expected_behavior: "Should throw appropriate exception".to_string(),
        });
    }

    cases
}

/// `test` + capitalized method name + category suffix
fn test_name(method_name: &str, category: TestCategory) -> String {
    format!("test{}{}", capitalize(method_name), category.name_suffix())
}

/// Uppercase the first letter and lowercase the rest, so `validateInput`
/// becomes `Validateinput`
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Independent setup checks; all three may fire
fn setup_requirements(parsed: &ParsedSource) -> Vec<SetupRequirement> {
    let mut requirements = Vec::new();

    if !parsed.fields.is_empty() {
        requirements.push(SetupRequirement::ObjectInitialization);
    }

    let has_marker = |markers: &[&str]| {
        parsed
            .imports
            .iter()
            .any(|imp| markers.iter().any(|m| imp.contains(m)))
    };

    if has_marker(&["Database", "Connection"]) {
        requirements.push(SetupRequirement::DatabaseSetup);
    }

    if has_marker(&["File", "IO"]) {
        requirements.push(SetupRequirement::FileSystemSetup);
    }

    requirements
}

/// Mock categories whose markers appear in any import, in fixed category
/// order regardless of import order
fn mock_requirements(imports: &[String]) -> Vec<MockRequirement> {
    MOCK_PATTERNS
        .iter()
        .filter(|(_, markers)| {
            imports
                .iter()
                .any(|imp| markers.iter().any(|m| imp.contains(m)))
        })
        .map(|(requirement, _)| *requirement)
        .collect()
}
