use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

pub const WIKIDATA_ENDPOINT: &str = "https://query.wikidata.org/sparql";

const RESULTS_MEDIA_TYPE: &str = "application/sparql-results+json";

// Wikidata rejects requests without a descriptive user agent
const CLIENT_USER_AGENT: &str = concat!("wikidata-query/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("SPARQL request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("SPARQL endpoint responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode SPARQL results: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("solution has no binding for ?{var}")]
    MissingBinding { var: String },

    #[error("?{var} is bound to a {kind:?} term, expected {expected:?}")]
    UnexpectedTerm {
        var: String,
        kind: TermKind,
        expected: TermKind,
    },

    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Uri,
    #[serde(alias = "typed-literal")]
    Literal,
    Bnode,
}

/// One bound value in the SPARQL 1.1 JSON results format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RdfTerm {
    #[serde(rename = "type")]
    pub kind: TermKind,
    pub value: String,
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
}

/// One row of a SELECT result, keyed by variable name without the `?`.
pub type Solution = HashMap<String, RdfTerm>;

#[derive(Debug, Deserialize)]
struct SelectResults {
    results: ResultBindings,
}

#[derive(Debug, Deserialize)]
struct ResultBindings {
    bindings: Vec<Solution>,
}

pub fn decode_results(json: &str) -> Result<Vec<Solution>, QueryError> {
    let results: SelectResults = serde_json::from_str(json)?;
    Ok(results.results.bindings)
}

/// Runs SELECT queries. Implemented over HTTP by [`SparqlEndpoint`].
pub trait QueryRunner {
    fn select(&self, query: &str) -> Result<Vec<Solution>, QueryError>;
}

/// A remote SPARQL endpoint queried with blocking GET requests.
#[derive(Debug, Clone)]
pub struct SparqlEndpoint {
    client: Client,
    url: String,
}

impl SparqlEndpoint {
    pub fn new(url: impl Into<String>) -> Result<Self, QueryError> {
        let client = Client::builder().user_agent(CLIENT_USER_AGENT).build()?;
        Ok(SparqlEndpoint {
            client,
            url: url.into(),
        })
    }

    pub fn wikidata() -> Result<Self, QueryError> {
        SparqlEndpoint::new(WIKIDATA_ENDPOINT)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QueryRunner for SparqlEndpoint {
    fn select(&self, query: &str) -> Result<Vec<Solution>, QueryError> {
        debug!("Sending SPARQL query to {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("query", query)])
            .header(ACCEPT, RESULTS_MEDIA_TYPE)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let solutions = decode_results(&body)?;
        debug!("Received {} solutions", solutions.len());
        Ok(solutions)
    }
}

/// The last path or fragment segment of an IRI, e.g. `Q42` for
/// `http://www.wikidata.org/entity/Q42`.
pub fn local_name(iri: &str) -> &str {
    match iri.rfind(|c: char| c == '/' || c == '#') {
        Some(idx) => &iri[idx + 1..],
        None => iri,
    }
}

fn binding<'a>(
    solution: &'a Solution,
    var: &str,
    expected: TermKind,
) -> Result<&'a RdfTerm, QueryError> {
    let term = solution.get(var).ok_or_else(|| QueryError::MissingBinding {
        var: var.to_string(),
    })?;
    if term.kind != expected {
        return Err(QueryError::UnexpectedTerm {
            var: var.to_string(),
            kind: term.kind,
            expected,
        });
    }
    Ok(term)
}

/// Projects a solution to the local name of the IRI bound to `id_var` and
/// the literal bound to `label_var`.
pub fn id_label(
    solution: &Solution,
    id_var: &str,
    label_var: &str,
) -> Result<(String, String), QueryError> {
    let id = binding(solution, id_var, TermKind::Uri)?;
    let label = binding(solution, label_var, TermKind::Literal)?;

    Ok((local_name(&id.value).to_string(), label.value.clone()))
}

/// Runs `query` and returns an `(id, label)` pair per solution.
pub fn run_query<R: QueryRunner + ?Sized>(
    runner: &R,
    query: &str,
    id_var: &str,
    label_var: &str,
) -> Result<Vec<(String, String)>, QueryError> {
    runner
        .select(query)?
        .iter()
        .map(|solution| id_label(solution, id_var, label_var))
        .collect()
}
