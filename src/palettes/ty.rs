use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
pub(crate) use rgb::RGBA;

use crate::error::Error;

/// Color table of a named colormap.
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
}

/// Names of the available colormaps.
///
/// Spelled in lowercase (e.g. `"reversed gray"`) when parsed or
/// serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default,
         Serialize, Deserialize)]
pub enum ColormapName {
    /// Black to white.
    #[default]
    #[serde(rename = "gray")]
    Gray,
    /// White to black.
    #[serde(rename = "reversed gray")]
    ReversedGray,
    /// Blue, cyan, green, yellow then red.
    #[serde(rename = "temperature")]
    Temperature,
    /// Black to red.
    #[serde(rename = "red")]
    Red,
    /// Black to green.
    #[serde(rename = "green")]
    Green,
    /// Black to blue.
    #[serde(rename = "blue")]
    Blue,
}

impl ColormapName {
    /// All colormaps, in the order they are offered to the user.
    pub const ALL: [ColormapName; 6] = [
        ColormapName::Gray, ColormapName::ReversedGray,
        ColormapName::Temperature, ColormapName::Red,
        ColormapName::Green, ColormapName::Blue];

    /// The lowercase identifier, e.g. `"reversed gray"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColormapName::Gray => "gray",
            ColormapName::ReversedGray => "reversed gray",
            ColormapName::Temperature => "temperature",
            ColormapName::Red => "red",
            ColormapName::Green => "green",
            ColormapName::Blue => "blue",
        }
    }

    /// The identifier with each word capitalized, e.g. `"Reversed Gray"`.
    pub fn label(self) -> String {
        self.as_str().split(' ')
            .map(|w| {
                let mut c = w.chars();
                match c.next() {
                    Some(first) => first.to_ascii_uppercase().to_string()
                        + c.as_str(),
                    None => String::new(),
                } })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ColormapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColormapName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColormapName::ALL.iter().copied()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| Error::UnknownColormap(s.to_string()))
    }
}

/// Mapping from data values to the \[0, 1\] palette parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Affine between `vmin` and `vmax`.
    #[default]
    Linear,
    /// Affine in log₁₀ between `vmin` and `vmax`.  Only positive
    /// values are mapped.
    Log,
}

impl Normalization {
    pub fn as_str(self) -> &'static str {
        match self {
            Normalization::Linear => "linear",
            Normalization::Log => "log",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Normalization::Linear),
            "log" => Ok(Normalization::Log),
            _ => Err(Error::UnknownNormalization(s.to_string())),
        }
    }
}
