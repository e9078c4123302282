/// Application layer - the radar screen and the use case that drives it
///
/// This layer contains the application logic that coordinates the radar
/// domain with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod screen;
pub mod use_cases;
