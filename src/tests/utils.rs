use crate::config::RegionId;
use crate::scraper::{FetchSold, SearchResponse};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

/// Wraps listings in a successful search envelope.
pub fn success_response(listings: Vec<Value>) -> SearchResponse {
    response_with_status("Success", listings)
}

pub fn response_with_status(status: &str, listings: Vec<Value>) -> SearchResponse {
    serde_json::from_value(json!({
        "errorMessage": status,
        "payload": { "search_result": listings }
    }))
    .unwrap_or_else(|e| panic!("bad test envelope: {e}"))
}

/// Canned fetcher: regions without an entry behave like a failed request.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<RegionId, SearchResponse>,
    pub calls: RefCell<Vec<RegionId>>,
}

impl StubFetcher {
    pub fn with(mut self, region: RegionId, response: SearchResponse) -> Self {
        self.responses.insert(region, response);
        self
    }
}

impl FetchSold for StubFetcher {
    fn fetch(&self, region: RegionId) -> Option<SearchResponse> {
        self.calls.borrow_mut().push(region);
        self.responses.get(&region).cloned()
    }
}
