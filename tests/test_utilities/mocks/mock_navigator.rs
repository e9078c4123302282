use devradar::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Navigator recording every route it is asked to open
#[derive(Default, Clone)]
pub struct MockNavigator {
    pub routes: Arc<Mutex<Vec<Route>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: Route) -> Result<()> {
        self.routes.lock().unwrap().push(route);
        Ok(())
    }
}
