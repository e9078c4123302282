/// Radar domain layer - pure model of the developer radar screen
///
/// Nothing in this module performs I/O; collaborators are reached only
/// through the ports in `crate::ports`.
pub mod domain;
pub mod policies;
pub mod services;
