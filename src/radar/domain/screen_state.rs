use crate::shared::RadarError;

/// Externally visible lifecycle of the radar screen
///
/// `Unpositioned → Positioned { has_results: false } → Positioned { has_results: true }`,
/// with `Blocked` when no position could be acquired and `Unmounted` as the
/// terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Unpositioned,
    Blocked(RadarError),
    Positioned { has_results: bool },
    Unmounted,
}

impl ScreenState {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Unpositioned => "unpositioned",
            ScreenState::Blocked(_) => "blocked",
            ScreenState::Positioned { has_results: false } => "positioned",
            ScreenState::Positioned { has_results: true } => "showing-results",
            ScreenState::Unmounted => "unmounted",
        }
    }

    /// Whether a map can be drawn in this state
    pub fn shows_map(&self) -> bool {
        matches!(self, ScreenState::Positioned { .. })
    }
}
