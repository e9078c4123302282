/// Inbound ports (Driving ports) - Screen interaction interfaces
///
/// These ports define how external adapters (e.g. a terminal) feed user
/// actions into the radar screen.
pub mod command_source;

pub use command_source::{CommandSource, UserCommand};
