/// Free-text technology filter typed by the user
///
/// The raw text is what gets sent to the server; an empty filter matches
/// every developer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter(String);

impl SearchFilter {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Comma-separated tokens, trimmed, for display purposes only
    pub fn tokens(&self) -> Vec<&str> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl std::fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
