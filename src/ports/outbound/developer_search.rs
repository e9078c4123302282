use crate::radar::domain::{DeveloperRecord, SearchQuery};
use crate::shared::Result;
use async_trait::async_trait;

/// DeveloperSearch port for the radar `/search` endpoint
///
/// # Async Support
/// Searches may overlap; implementations must be `Send + Sync` and must not
/// assume a previous call has finished.
#[async_trait]
pub trait DeveloperSearch: Send + Sync {
    /// Fetches the developers near `query`'s position matching its techs
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The server responds with a non-success status
    /// - The response body is not a `{ "devs": [...] }` document
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DeveloperRecord>>;
}
