//! Error types for the colormap configuration.

use thiserror::Error;

/// Result type alias for colormap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected arguments.
///
/// Every variant rejects the whole call: the configuration is left as it
/// was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Palette name outside of [`ColormapName::ALL`](crate::ColormapName::ALL).
    #[error("unknown colormap “{0}”")]
    UnknownColormap(String),

    /// Normalization other than `linear` or `log`.
    #[error("unknown normalization “{0}”, expected “linear” or “log”")]
    UnknownNormalization(String),

    /// Range whose minimum is above its maximum (or NaN).
    #[error("invalid range: min {min} > max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// NaN colormap bound.
    #[error("invalid colormap bound: {0}")]
    InvalidBound(f64),

    /// Counts and bin edges do not describe a histogram.
    #[error("histogram with {counts} counts needs {} bin edges, got {edges}",
            .counts + 1)]
    HistogramShape { counts: usize, edges: usize },

    /// Bounds are locked while autoscale is on.
    #[error("colormap bounds cannot be edited while autoscale is on")]
    AutoscaleEnabled,
}
