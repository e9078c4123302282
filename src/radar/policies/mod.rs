pub mod stale_policy;

pub use stale_policy::StalePolicy;
