//! Display state derived from a [`ColormapConfig`]: the curve showing
//! how data values map to the palette, the bound markers and the
//! histogram curve.

use crate::config::{Bound, ColormapConfig};

/// Piecewise-linear curve from 0 to 1 between `vmin` and `vmax`,
/// extended on both sides of the data range by a margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeCurve {
    pub x: [f64; 4],
    pub y: [f64; 4],
}

/// A vertical marker at a colormap bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub bound: Bound,
    pub x: f64,
    /// Markers can only be dragged when autoscale is off.
    pub draggable: bool,
}

impl Marker {
    pub fn label(&self) -> &'static str { self.bound.label() }
}

/// Phase of a marker drag, see [`ColormapConfig::drag_marker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerEvent {
    /// The marker is being dragged.
    Moving,
    /// The marker was released.
    Moved,
}

/// Histogram drawn as a curve through the bin centers, counts scaled to
/// a maximum of 1.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramCurve {
    pub centers: Vec<f64>,
    pub heights: Vec<f64>,
}

impl ColormapConfig {
    /// The curve of the current bounds over the data range.
    pub fn range_curve(&self) -> RangeCurve {
        let (min, max) = self.data_range;
        let margin = (max.abs() + min.abs()) / 6.;
        let (start, end) = (self.description.vmin, self.description.vmax);
        if start < end {
            RangeCurve { x: [min - margin, start, end, max + margin],
                         y: [0., 0., 1., 1.] }
        } else {
            RangeCurve { x: [min - margin, end, start, max + margin],
                         y: [1., 1., 0., 0.] }
        }
    }

    /// The Start (`vmin`) and End (`vmax`) markers.
    pub fn markers(&self) -> [Marker; 2] {
        let draggable = !self.description.autoscale;
        [Marker { bound: Bound::Min, x: self.description.vmin, draggable },
         Marker { bound: Bound::Max, x: self.description.vmax, draggable }]
    }

    /// The histogram curve, if a histogram is set.
    pub fn histogram_curve(&self) -> Option<HistogramCurve> {
        self.histogram.as_ref().map(|h| {
            HistogramCurve { centers: h.centers(),
                             heights: h.normalized_counts() } })
    }
}
