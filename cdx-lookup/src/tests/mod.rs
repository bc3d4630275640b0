use std::cell::RefCell;

use crate::client::{IndexClient, TransportError};
use crate::query::CdxQuery;


/// Index client that replays a scripted sequence of responses and records
/// every query it receives.
pub struct ScriptedClient {
    responses: RefCell<Vec<Result<String, TransportError>>>,
    pub queries: RefCell<Vec<CdxQuery>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, TransportError>>) -> Self {
        // Popped from the back, so store in reverse.
        let mut responses = responses;
        responses.reverse();
        ScriptedClient {
            responses: RefCell::new(responses),
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl IndexClient for ScriptedClient {
    fn fetch(&self, query: &CdxQuery) -> Result<String, TransportError> {
        self.queries.borrow_mut().push(query.clone());
        self.responses
            .borrow_mut()
            .pop()
            .expect("scripted client ran out of responses")
    }
}
