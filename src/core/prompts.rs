//! Prompt templates for test body generation.
//!
//! The per-test prompt is pure template substitution: name, category, and
//! description are dropped into a fixed instruction block that embeds a
//! short Arrange-Act-Assert style example. Everything else about the
//! request lives in the system prompt.

use crate::models::TestCaseDescriptor;

/// System prompt for test body generation
pub const SYSTEM_PROMPT_TESTGEN: &str = r#"You are a JUnit test generation agent. Output only Java code statements.
Do NOT include @Test annotations, method signatures, or markdown fences.
Do NOT explain the code. No prose before or after the statements."#;

/// Build the generation prompt for one test case descriptor
pub fn build_test_prompt(descriptor: &TestCaseDescriptor) -> String {
    format!(
        r#"
Generate only the Java method body code for this test case:

Test: {test_name}
Type: {category}
Description: {description}

Requirements:
1. Return ONLY Java code statements (no @Test annotation, no method signature, no explanations)
2. Use proper indentation (8 spaces)
3. Include Arrange-Act-Assert comments
4. Use Calculator class methods like calculator.add(), calculator.divide(), etc.
5. Use JUnit 5 assertions: assertEquals(), assertThrows(), assertTrue()

Example format:
        // Arrange
        Calculator calculator = new Calculator();
        int a = 5;
        int b = 3;

        // Act
        int result = calculator.add(a, b);

        // Assert
        assertEquals(8, result);
"#,
        test_name = descriptor.test_name,
        category = descriptor.category.as_str(),
        description = descriptor.description,
    )
}
