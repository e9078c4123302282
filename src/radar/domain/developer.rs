use super::Coordinate;
use serde::{Deserialize, Serialize};

/// GeoJSON point as stored by the radar server
///
/// Coordinates follow GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "GeoPoint::point_type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    fn point_type() -> String {
        "Point".to_string()
    }

    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            kind: Self::point_type(),
            coordinates: [coordinate.longitude, coordinate.latitude],
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.coordinates[1],
            longitude: self.coordinates[0],
        }
    }
}

/// A developer as returned by `/search` or pushed over the live channel
///
/// Records are never modified after they arrive. `biography` is accepted
/// as an alias of `bio`; missing text fields render blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub github_username: String,
    #[serde(default, alias = "biography")]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub techs: Vec<String>,
    pub location: GeoPoint,
}

impl DeveloperRecord {
    /// Parses a single record from an already decoded JSON value
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn coordinate(&self) -> Coordinate {
        self.location.coordinate()
    }

    /// Name to show in callouts, falling back to the GitHub handle
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.github_username,
        }
    }
}

/// The ordered developers currently on screen
///
/// Replaced wholesale on each applied search, appended to by live pushes.
/// Ids are not de-duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeveloperList {
    records: Vec<DeveloperRecord>,
}

impl DeveloperList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<DeveloperRecord>) {
        self.records = records;
    }

    pub fn append(&mut self, record: DeveloperRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DeveloperRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeveloperRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[DeveloperRecord] {
        &self.records
    }
}

impl From<Vec<DeveloperRecord>> for DeveloperList {
    fn from(records: Vec<DeveloperRecord>) -> Self {
        Self { records }
    }
}
