// Export the SPARQL client and the queries built on it
pub mod attractions;
pub mod sparql;

#[cfg(test)]
pub mod tests;

pub use crate::attractions::{attractions_query, fetch_attractions, Attraction};
pub use crate::sparql::{
    decode_results, id_label, local_name, run_query, QueryError, QueryRunner, RdfTerm, Solution,
    SparqlEndpoint, TermKind, WIKIDATA_ENDPOINT,
};
