use std::fs;
use std::path::Path;

use crate::sparql::{decode_results, Solution};

/// Load a saved SPARQL JSON response by name
pub fn load_results_json(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.json", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Load and decode a saved SPARQL JSON response
pub fn load_solutions(fixture_name: &str) -> Vec<Solution> {
    decode_results(&load_results_json(fixture_name))
        .unwrap_or_else(|e| panic!("Failed to decode test fixture {}: {}", fixture_name, e))
}
