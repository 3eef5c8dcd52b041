//! Colormap configuration and application.
//!
//! - [`ColormapConfig`] holds a [`ColormapDescription`], the data range
//!   and an optional [`Histogram`], keeps the bounds in sync with the
//!   data when autoscale is on, and notifies subscribers.
//! - [`Colormap`] maps data values to colors according to a description.
//!
//! The available palettes are listed by [`ColormapName`].
//!
//! # Example
//!
//! ```
//! use colormap_config::{ColormapConfig, ColormapName, ColormapUpdate};
//! let mut config = ColormapConfig::new();
//! config.subscribe(|c| println!("{} {}..{}", c.name, c.vmin, c.vmax));
//! config.set_colormap(ColormapUpdate::new().name(ColormapName::Red)
//!                     .autoscale(false).vmin(1.).vmax(2.)).unwrap();
//! config.set_data_range(5., 50.).unwrap();
//! assert_eq!(config.colormap().vmin, 1.);
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

mod config;
mod display;
mod error;
mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::{ColormapName, Normalization};
pub use config::{data_range_of, Bound, ColormapConfig, ColormapDescription,
                 ColormapUpdate, Histogram, SubscriptionId};
pub use display::{HistogramCurve, Marker, MarkerEvent, RangeCurve};
pub use error::{Error, Result};

/// Number of colors of a colormap lookup table.
pub const DEFAULT_COLORS: u32 = 256;

/// Data range of a fresh [`ColormapConfig`].
pub const DEFAULT_DATA_RANGE: (f64, f64) = (1., 10.);

/// Default lower bound of a [`ColormapDescription`].
pub const DEFAULT_VMIN: f64 = 1.;

/// Default upper bound of a [`ColormapDescription`].
pub const DEFAULT_VMAX: f64 = 10.;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (both included) together with the colors
    /// at the corresponding parameters.  It is not required that
    /// `a <= b`.
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        Range { range: self, color: PhantomData, a, b,
                last: n.saturating_sub(1), front: 0, back: n }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    last: usize, // index of `b`
    front: usize, // next position to be consumed
    back: usize, // position after the last one to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// The point at position `k` ∈ `0 ..= self.last` and its color.
    fn sample(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let t = k as f64 / self.last as f64;
            ((1. - t) * self.a + t * self.b, self.range.rgb(t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        let item = self.sample(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        self.back -= 1;
        Some(self.sample(self.back))
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = self.to_rgba();
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8, g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8, g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}


/// The color table of a named colormap, interpolated linearly in RGB.
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

// Not derived: no `Color: Copy` bound is needed.
impl<Color> Clone for Palette<Color> {
    fn clone(&self) -> Self { *self }
}

impl<Color> Copy for Palette<Color> {}

impl<Color: RGBColor> Palette<Color> {
    /// Return the palette of the colormap `name`.
    pub fn new(name: ColormapName) -> Self {
        let palette: &'static PaletteData = match name {
            ColormapName::Gray => &palettes::GRAY,
            ColormapName::ReversedGray => &palettes::REVERSED_GRAY,
            ColormapName::Temperature => &palettes::TEMPERATURE,
            ColormapName::Red => &palettes::RED,
            ColormapName::Green => &palettes::GREEN,
            ColormapName::Blue => &palettes::BLUE,
        };
        Self { palette, color: PhantomData }
    }

    /// Returns the number of control colors of the palette (at least 2).
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Returns the control colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }
}

impl<Color: RGBColor> ColorRange<Color> for Palette<Color> {
    fn rgb(&self, t: f64) -> Color {
        let rgb = &self.palette.rgb;
        let n = rgb.len() - 1;
        let tn = t.clamp(0., 1.) * n as f64;
        let i = (tn.trunc() as usize).min(n - 1);
        let s = tn - i as f64;
        let (c0, c1) = (rgb[i], rgb[i + 1]);
        Color::from_rgba(RGBA { r: c0.r + s * (c1.r - c0.r),
                                g: c0.g + s * (c1.g - c0.g),
                                b: c0.b + s * (c1.b - c0.b),
                                a: c0.a + s * (c1.a - c0.a) })
    }
}


/// A palette together with the normalization and bounds of a
/// [`ColormapDescription`].
pub struct Colormap<Color> {
    palette: Palette<Color>,
    normalization: Normalization,
    vmin: f64,
    vmax: f64,
    colors: usize,
}

impl<Color: RGBColor> Colormap<Color> {
    pub fn new(description: &ColormapDescription) -> Self {
        Self { palette: Palette::new(description.name),
               normalization: description.normalization,
               vmin: description.vmin,
               vmax: description.vmax,
               colors: description.colors as usize }
    }

    /// Map `value` to the palette parameter in \[0, 1\], values beyond
    /// the bounds being clamped.  An inverted range (`vmin > vmax`)
    /// reverses the palette.
    ///
    /// Return `None` if `value` is NaN or, for [`Normalization::Log`],
    /// if `value` or one of the bounds is not positive.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if value.is_nan() { return None }
        let (v, v0, v1) = match self.normalization {
            Normalization::Linear => (value, self.vmin, self.vmax),
            Normalization::Log => {
                if value <= 0. || self.vmin <= 0. || self.vmax <= 0. {
                    return None
                }
                (value.log10(), self.vmin.log10(), self.vmax.log10())
            }
        };
        if v0 == v1 {
            return Some(if v > v0 { 1. } else { 0. })
        }
        Some(((v - v0) / (v1 - v0)).clamp(0., 1.))
    }

    /// Return the color of `value`, see [`Colormap::normalize`].
    pub fn rgb(&self, value: f64) -> Option<Color> {
        self.normalize(value).map(|t| self.palette.rgb(t))
    }

    /// Return the lookup table of the colormap, i.e. its `colors`
    /// colors sampled uniformly over the palette.
    pub fn lut(&self) -> Vec<Color> {
        self.palette.range(0., 1., self.colors).map(|(_, c)| c).collect()
    }
}
