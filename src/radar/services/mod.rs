pub mod marker_projector;

pub use marker_projector::{MarkerProjector, PlottedPin, Projection};
