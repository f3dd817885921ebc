//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small Calculator-style class exercising the main planning rules:
/// numeric return types, a boolean validator, and private helpers.
pub const CALCULATOR_SOURCE: &str = r#"package com.example.calculator;

import java.util.List;
import java.util.ArrayList;

public class Calculator {

    private List history;
    private boolean debugMode;

    public double add(double a, double b) {
        return a + b;
    }

    public double divide(double a, double b) {
        return a / b;
    }

    public boolean validateNumber(double number) {
        return !Double.isNaN(number);
    }

    private void log(String message) {
        System.out.println(message);
    }
}
"#;

/// Create a workspace with an input directory holding a Java source file
pub fn create_test_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().to_path_buf();
    (temp_dir, root)
}

/// Write a Java source file into the workspace and return its path
pub fn write_java_source(root: &PathBuf, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, content).expect("Failed to write Java source");
    path
}
