use crate::ports::outbound::{Navigator, Route};
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::cell::RefCell;

const GITHUB_BASE: &str = "https://github.com";

/// GitHub profile URL for a username
pub fn profile_url(github_username: &str) -> String {
    format!(
        "{}/{}",
        GITHUB_BASE,
        urlencoding::encode(github_username.trim())
    )
}

/// LogNavigator adapter that reports the destination instead of opening it
///
/// Writes the profile URL to stderr so it never mixes with rendered maps,
/// and remembers every route it was asked to open.
#[derive(Default)]
pub struct LogNavigator {
    visited: RefCell<Vec<Route>>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) -> Result<()> {
        match &route {
            Route::Profile { github_username } => {
                if github_username.trim().is_empty() {
                    anyhow::bail!("Developer has no GitHub username");
                }
                eprintln!(
                    "🔗 Profile: {}",
                    profile_url(github_username).underline().cyan()
                );
            }
        }
        self.visited.borrow_mut().push(route);
        Ok(())
    }
}
