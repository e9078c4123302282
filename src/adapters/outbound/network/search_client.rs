use super::server_url::{endpoint_url, parse_server_url};
use crate::ports::outbound::DeveloperSearch;
use crate::radar::domain::{DeveloperRecord, SearchQuery};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    devs: Vec<serde_json::Value>,
}

/// Records parsed from a `/search` body plus how many were malformed
#[derive(Debug)]
pub(crate) struct ParsedDevs {
    pub records: Vec<DeveloperRecord>,
    pub skipped: usize,
}

/// HttpDeveloperSearch adapter for the radar server's `/search` endpoint
///
/// One GET per call, no retries. Malformed records are skipped with a
/// warning instead of failing the whole search.
pub struct HttpDeveloperSearch {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDeveloperSearch {
    /// Creates a search client for the server at `server`
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("devradar/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_server_url(server)?,
        })
    }

    fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        endpoint_url(&self.base_url, "search", &query.to_pairs())
    }

    pub(crate) fn parse_body(body: &str) -> Result<ParsedDevs> {
        let response: SearchResponse = serde_json::from_str(body)
            .map_err(|e| anyhow::anyhow!("Unexpected search response: {}", e))?;

        let mut records = Vec::with_capacity(response.devs.len());
        let mut skipped = 0;
        for value in response.devs {
            match DeveloperRecord::from_value(value) {
                Ok(record) => records.push(record),
                Err(_) => skipped += 1,
            }
        }
        Ok(ParsedDevs { records, skipped })
    }
}

#[async_trait]
impl DeveloperSearch for HttpDeveloperSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DeveloperRecord>> {
        let url = self.search_url(query)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Radar server returned status code {}", response.status());
        }

        let body = response.text().await?;
        let parsed = Self::parse_body(&body)?;
        if parsed.skipped > 0 {
            eprintln!(
                "⚠️  Warning: Skipped {} malformed developer record(s)",
                parsed.skipped
            );
        }
        Ok(parsed.records)
    }
}
