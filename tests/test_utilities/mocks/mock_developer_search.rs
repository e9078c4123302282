use async_trait::async_trait;
use devradar::prelude::*;
use devradar::radar::domain::SearchQuery;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type ScriptedResponse = (Duration, std::result::Result<Vec<DeveloperRecord>, String>);

/// Mock DeveloperSearch answering each call with the next scripted response
///
/// Every response waits for its own delay, so overlapping calls can finish
/// in any order. Calls past the script return an empty list immediately.
#[derive(Default, Clone)]
pub struct MockDeveloperSearch {
    responses: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    pub queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockDeveloperSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, delay_ms: u64, developers: Vec<DeveloperRecord>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((Duration::from_millis(delay_ms), Ok(developers)));
        self
    }

    pub fn with_failure(self, delay_ms: u64, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((Duration::from_millis(delay_ms), Err(message.to_string())));
        self
    }

    pub fn get_queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeveloperSearch for MockDeveloperSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DeveloperRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        let next = self.responses.lock().unwrap().pop_front();

        match next {
            Some((delay, response)) => {
                tokio::time::sleep(delay).await;
                response.map_err(|message| anyhow::anyhow!(message))
            }
            None => Ok(Vec::new()),
        }
    }
}
