use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::year_range::YearRange;

/// A title and the years it should parse to, `None` when it has none
#[derive(Debug, Deserialize)]
pub struct TitleCase {
    pub title: String,
    pub years: Option<YearRange>,
}

/// Load a JSON list of title cases by fixture name
pub fn load_title_cases(fixture_name: &str) -> Vec<TitleCase> {
    let path = Path::new("src/tests/fixtures").join(format!("{}.json", fixture_name));
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Failed to parse test fixture {}: {}", fixture_name, e))
}
