/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod location;
pub mod navigation;
pub mod network;
pub mod renderers;
