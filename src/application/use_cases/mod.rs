/// Use cases module containing application business logic orchestration
mod run_radar;

pub use run_radar::{RunRadarUseCase, SessionSummary};
