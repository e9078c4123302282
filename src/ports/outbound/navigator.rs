use crate::shared::Result;

/// Screens reachable from the radar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Profile { github_username: String },
}

/// Navigator port for leaving the radar screen
pub trait Navigator {
    fn navigate(&self, route: Route) -> Result<()>;
}
