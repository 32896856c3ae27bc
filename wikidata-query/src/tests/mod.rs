use std::cell::RefCell;

use crate::sparql::{QueryError, QueryRunner, Solution};

pub mod fixtures;

/// Answers every query with canned solutions and remembers the queries it saw
pub struct StubRunner {
    solutions: Vec<Solution>,
    pub queries: RefCell<Vec<String>>,
}

impl StubRunner {
    pub fn new(solutions: Vec<Solution>) -> Self {
        StubRunner {
            solutions,
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl QueryRunner for StubRunner {
    fn select(&self, query: &str) -> Result<Vec<Solution>, QueryError> {
        self.queries.borrow_mut().push(query.to_string());
        Ok(self.solutions.clone())
    }
}
