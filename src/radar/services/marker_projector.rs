use crate::radar::domain::{Marker, ViewportRegion};

/// A marker placed into a cell of the viewport grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottedPin {
    /// Position of the marker in the marker list
    pub index: usize,
    pub row: usize,
    pub col: usize,
}

/// Result of projecting markers onto a grid
#[derive(Debug, Default, PartialEq)]
pub struct Projection {
    pub plotted: Vec<PlottedPin>,
    /// Indexes of markers outside the viewport
    pub offscreen: Vec<usize>,
}

/// MarkerProjector maps geographic markers onto a `width` x `height` grid
///
/// Row 0 is the northern edge, column 0 the western edge.
pub struct MarkerProjector;

impl MarkerProjector {
    pub fn project(
        viewport: &ViewportRegion,
        markers: &[Marker],
        width: usize,
        height: usize,
    ) -> Projection {
        let mut projection = Projection::default();
        if width == 0 || height == 0 {
            projection.offscreen = (0..markers.len()).collect();
            return projection;
        }

        for (index, marker) in markers.iter().enumerate() {
            if !viewport.contains(marker.coordinate) {
                projection.offscreen.push(index);
                continue;
            }

            let col = Self::cell(
                marker.coordinate.longitude - viewport.min_longitude(),
                viewport.longitude_delta,
                width,
            );
            let row = Self::cell(
                viewport.max_latitude() - marker.coordinate.latitude,
                viewport.latitude_delta,
                height,
            );
            projection.plotted.push(PlottedPin { index, row, col });
        }

        projection
    }

    fn cell(offset: f64, span: f64, cells: usize) -> usize {
        if span <= 0.0 {
            return cells / 2;
        }
        let scaled = (offset / span * cells as f64).floor();
        (scaled.max(0.0) as usize).min(cells - 1)
    }
}
