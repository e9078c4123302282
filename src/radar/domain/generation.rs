/// Sequence number stamped on every search request
///
/// Generations increase monotonically within one screen, so comparing two
/// of them tells which request was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request generations and remembers the latest one
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> RequestGeneration {
        self.latest += 1;
        RequestGeneration(self.latest)
    }

    /// Whether `generation` is the most recently issued one
    pub fn is_latest(&self, generation: RequestGeneration) -> bool {
        generation.0 == self.latest
    }
}
