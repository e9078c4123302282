/// Factories for creating adapter instances
mod presenter_factory;
mod renderer_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use renderer_factory::{RendererFactory, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
