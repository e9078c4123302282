/// Inbound adapters - feed terminal input into the radar screen
mod stdin_commands;

pub use stdin_commands::{LineCommandSource, StdinCommandSource};
