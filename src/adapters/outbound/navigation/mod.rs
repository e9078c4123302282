mod log_navigator;

pub use log_navigator::{profile_url, LogNavigator};
