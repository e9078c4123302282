use crate::radar::domain::{GenerationCounter, RequestGeneration};

/// What to do with a search response that is no longer the latest request
///
/// Searches may overlap, and their responses can arrive in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply only the response to the most recently issued search
    #[default]
    Discard,
    /// Apply every response as it arrives; the last to arrive wins
    Apply,
}

impl StalePolicy {
    /// Decides whether a response for `generation` should replace the list
    pub fn accepts(self, counter: &GenerationCounter, generation: RequestGeneration) -> bool {
        match self {
            StalePolicy::Discard => counter.is_latest(generation),
            StalePolicy::Apply => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StalePolicy::Discard => "discard",
            StalePolicy::Apply => "apply",
        }
    }
}

impl std::str::FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(StalePolicy::Discard),
            "apply" => Ok(StalePolicy::Apply),
            _ => Err(format!(
                "Invalid stale response policy: {}. Please specify 'discard' or 'apply'",
                s
            )),
        }
    }
}
