use crate::radar::policies::StalePolicy;

/// Behavior switches for one radar screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    /// How late search responses are treated
    pub stale_policy: StalePolicy,
    /// Open a live-update channel after each applied search
    pub live_updates: bool,
    /// Issue a first search as soon as the screen is positioned
    pub search_on_mount: bool,
}

impl ScreenOptions {
    pub fn new(stale_policy: StalePolicy, live_updates: bool, search_on_mount: bool) -> Self {
        Self {
            stale_policy,
            live_updates,
            search_on_mount,
        }
    }
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            stale_policy: StalePolicy::Discard,
            live_updates: true,
            search_on_mount: false,
        }
    }
}
