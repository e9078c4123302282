use super::{Coordinate, SearchFilter};
use serde::Serialize;

/// Parameters of one `/search` request
///
/// `techs` is the raw filter text; it is never tokenized client-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub techs: String,
}

impl SearchQuery {
    pub fn new(position: Coordinate, filter: &SearchFilter) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            techs: filter.as_str().to_string(),
        }
    }

    /// Query pairs in the order the server documents them
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("techs", self.techs.clone()),
        ]
    }
}

/// Scope of a live-update subscription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelParams {
    pub latitude: f64,
    pub longitude: f64,
    pub techs: String,
}

impl ChannelParams {
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("techs", self.techs.clone()),
        ]
    }
}

impl From<&SearchQuery> for ChannelParams {
    fn from(query: &SearchQuery) -> Self {
        Self {
            latitude: query.latitude,
            longitude: query.longitude,
            techs: query.techs.clone(),
        }
    }
}
