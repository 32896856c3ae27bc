use serde::Serialize;

use crate::sparql::{run_query, QueryError, QueryRunner};

const ATTRACTION_VAR: &str = "attraction";
const ATTRACTION_LABEL_VAR: &str = "attractionLabel";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Attraction {
    pub id: String,
    pub label: String,
}

fn validate_language(language: &str) -> Result<(), QueryError> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(QueryError::InvalidLanguage(language.to_string()))
    }
}

/// Tourist attractions (Q570116) with the administrative area they are
/// located in (P131), both labelled in `language`.
pub fn attractions_query(language: &str, limit: u32) -> Result<String, QueryError> {
    validate_language(language)?;

    Ok(format!(
        r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT DISTINCT ?{ATTRACTION_VAR} ?{ATTRACTION_LABEL_VAR} ?location ?locationLabel WHERE {{
  ?{ATTRACTION_VAR} wdt:P31 wd:Q570116;
              rdfs:label ?{ATTRACTION_LABEL_VAR};
              wdt:P131 ?location.
  FILTER(LANG(?{ATTRACTION_LABEL_VAR}) = "{language}").
  ?location rdfs:label ?locationLabel.
  FILTER(LANG(?locationLabel) = "{language}").
}} LIMIT {limit}"#
    ))
}

pub fn fetch_attractions<R: QueryRunner + ?Sized>(
    runner: &R,
    language: &str,
    limit: u32,
) -> Result<Vec<Attraction>, QueryError> {
    let query = attractions_query(language, limit)?;
    let pairs = run_query(runner, &query, ATTRACTION_VAR, ATTRACTION_LABEL_VAR)?;

    Ok(pairs
        .into_iter()
        .map(|(id, label)| Attraction { id, label })
        .collect())
}
