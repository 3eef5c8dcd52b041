//! The colormap configuration model.

use std::fmt;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::display::MarkerEvent;
use crate::error::{Error, Result};
use crate::{ColormapName, Normalization,
            DEFAULT_COLORS, DEFAULT_DATA_RANGE, DEFAULT_VMAX, DEFAULT_VMIN};

/// Description of a colormap.
///
/// Serializes to `{name, normalization, autoscale, vmin, vmax, colors}`,
/// the shape expected by plotting collaborators.  `vmin <= vmax` is not
/// required: an inverted range reverses the palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColormapDescription {
    pub name: ColormapName,
    pub normalization: Normalization,
    /// Whether `vmin` and `vmax` follow the data range.
    pub autoscale: bool,
    pub vmin: f64,
    pub vmax: f64,
    /// Number of colors of the lookup table.
    pub colors: u32,
}

impl Default for ColormapDescription {
    fn default() -> Self {
        Self { name: ColormapName::Gray,
               normalization: Normalization::Linear,
               autoscale: true,
               vmin: DEFAULT_VMIN,
               vmax: DEFAULT_VMAX,
               colors: DEFAULT_COLORS }
    }
}

/// A partial [`ColormapDescription`]: only the fields that are set are
/// changed by [`ColormapConfig::set_colormap`].
///
/// Deserializes from a dict holding a subset of the description keys;
/// other keys are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColormapUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ColormapName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<Normalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmax: Option<f64>,
    /// Accepted for compatibility with full descriptions but ignored: the
    /// lookup table always has [`DEFAULT_COLORS`] colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<u32>,
}

impl ColormapUpdate {
    /// An update changing nothing.
    pub fn new() -> Self { Self::default() }

    pub fn name(mut self, name: ColormapName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    pub fn autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale = Some(autoscale);
        self
    }

    pub fn vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }

    pub fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }

    /// Check the update can be applied as a whole.
    fn validate(&self) -> Result<()> {
        for v in [self.vmin, self.vmax].into_iter().flatten() {
            if v.is_nan() { return Err(Error::InvalidBound(v)) }
        }
        Ok(())
    }
}

impl From<ColormapDescription> for ColormapUpdate {
    fn from(d: ColormapDescription) -> Self {
        Self { name: Some(d.name),
               normalization: Some(d.normalization),
               autoscale: Some(d.autoscale),
               vmin: Some(d.vmin),
               vmax: Some(d.vmax),
               colors: Some(d.colors) }
    }
}

/// Counts per bin and the bin edges of a histogram of the data.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    counts: Vec<f64>,
    bin_edges: Vec<f64>, // Invariant: len = counts.len() + 1, first ≤ last
}

impl Histogram {
    /// Return a histogram with the given `counts` and `bin_edges`.
    ///
    /// There must be one more edge than counts, at least one count, and
    /// the first edge must not exceed the last one.
    pub fn new(counts: Vec<f64>, bin_edges: Vec<f64>) -> Result<Self> {
        if counts.is_empty() || bin_edges.len() != counts.len() + 1 {
            return Err(Error::HistogramShape { counts: counts.len(),
                                               edges: bin_edges.len() })
        }
        let (min, max) = (bin_edges[0], bin_edges[bin_edges.len() - 1]);
        if !(min <= max) {
            return Err(Error::InvalidRange { min, max })
        }
        Ok(Self { counts, bin_edges })
    }

    pub fn counts(&self) -> &[f64] { &self.counts }

    pub fn bin_edges(&self) -> &[f64] { &self.bin_edges }

    /// The first and last bin edges.
    pub fn range(&self) -> (f64, f64) {
        (self.bin_edges[0], self.bin_edges[self.bin_edges.len() - 1])
    }

    /// Middle of each bin.
    pub fn centers(&self) -> Vec<f64> {
        self.bin_edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect()
    }

    /// Counts divided by the largest count.  All zero if there is no
    /// positive count.
    pub fn normalized_counts(&self) -> Vec<f64> {
        let max = self.counts.iter().copied().fold(0., f64::max);
        if max > 0. {
            self.counts.iter().map(|c| c / max).collect()
        } else {
            vec![0.; self.counts.len()]
        }
    }
}

/// Return the smallest and largest finite values of `data` and `other`,
/// or `None` if there are none.
pub fn data_range_of(data: &[f64], other: Option<&[f64]>)
                     -> Option<(f64, f64)> {
    data.iter().chain(other.unwrap_or_default())
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

/// The colormap bound edited by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// `vmin`
    Min,
    /// `vmax`
    Max,
}

impl Bound {
    /// Label of the field and of the plot marker.
    pub fn label(self) -> &'static str {
        match self {
            Bound::Min => "Start",
            Bound::Max => "End",
        }
    }
}

/// Handle returned by [`ColormapConfig::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ColormapDescription)>;

/// A colormap description kept consistent with the data it displays.
///
/// Each effective change calls the subscribers once with a snapshot of
/// the whole description.
pub struct ColormapConfig {
    pub(crate) description: ColormapDescription,
    pub(crate) data_range: (f64, f64), // Invariant: min ≤ max
    pub(crate) histogram: Option<Histogram>,
    bounds_edited: bool,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl Default for ColormapConfig {
    fn default() -> Self {
        Self { description: ColormapDescription::default(),
               data_range: DEFAULT_DATA_RANGE,
               histogram: None,
               bounds_edited: false,
               subscribers: Vec::new(),
               next_id: 0 }
    }
}

impl fmt::Debug for ColormapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColormapConfig")
            .field("description", &self.description)
            .field("data_range", &self.data_range)
            .field("histogram", &self.histogram)
            .field("bounds_edited", &self.bounds_edited)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ColormapConfig {
    /// A `gray`, `linear`, autoscaled colormap over the data range 1..10.
    pub fn new() -> Self { Self::default() }

    /// Call `callback` with the description after each change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where F: FnMut(&ColormapDescription) + 'static {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber.  Return `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let n = self.subscribers.len();
        self.subscribers.retain(|(i, _)| *i != id);
        self.subscribers.len() != n
    }

    /// Return a copy of the colormap description.
    pub fn colormap(&self) -> ColormapDescription { self.description }

    /// Apply the fields set in `update` and notify once.
    ///
    /// Switching autoscale on resets the bounds to the data range, unless
    /// `update` also sets them.  Nothing is changed if the update is
    /// rejected.
    pub fn set_colormap(&mut self, update: ColormapUpdate) -> Result<()> {
        update.validate()?;
        if let Some(name) = update.name {
            self.description.name = name;
        }
        if let Some(normalization) = update.normalization {
            self.description.normalization = normalization;
        }
        if let Some(autoscale) = update.autoscale {
            self.toggle_autoscale(autoscale);
        }
        if let Some(vmin) = update.vmin {
            self.description.vmin = vmin;
        }
        if let Some(vmax) = update.vmax {
            self.description.vmax = vmax;
        }
        self.notify();
        Ok(())
    }

    /// Turn autoscale on or off.
    ///
    /// Turning it on resets the bounds to the data range and notifies.
    /// Turning it off keeps the bounds, which become editable, and does
    /// not notify.
    pub fn set_autoscale(&mut self, autoscale: bool) {
        if self.toggle_autoscale(autoscale) {
            self.notify();
        }
    }

    /// Return `true` if autoscale was switched on.
    fn toggle_autoscale(&mut self, autoscale: bool) -> bool {
        let switched_on = autoscale && !self.description.autoscale;
        self.description.autoscale = autoscale;
        if switched_on {
            (self.description.vmin, self.description.vmax) = self.data_range;
        }
        switched_on
    }

    /// Return the range of the data as `(min, max)`.
    pub fn data_range(&self) -> (f64, f64) { self.data_range }

    /// Set the range of the data.  If autoscale is on, the bounds follow
    /// and subscribers are notified.
    pub fn set_data_range(&mut self, min: f64, max: f64) -> Result<()> {
        if !(min <= max) {
            return Err(Error::InvalidRange { min, max })
        }
        self.data_range = (min, max);
        if self.description.autoscale {
            self.description.vmin = min;
            self.description.vmax = max;
            self.notify();
        } else {
            debug!("data range set to {min}..{max}, bounds kept");
        }
        Ok(())
    }

    /// Return a copy of the histogram, if any.
    pub fn histogram(&self) -> Option<Histogram> { self.histogram.clone() }

    /// Set the histogram of the data and the data range to its bins.
    /// The histogram is removed if one of the arguments is `None`.
    pub fn set_histogram(&mut self, counts: Option<&[f64]>,
                         bin_edges: Option<&[f64]>) -> Result<()> {
        let (Some(counts), Some(bin_edges)) = (counts, bin_edges) else {
            self.histogram = None;
            return Ok(())
        };
        let histogram = Histogram::new(counts.to_vec(), bin_edges.to_vec())?;
        if !histogram.counts.iter().any(|&c| c > 0.) {
            warn!("histogram without positive counts, drawn flat");
        }
        let (min, max) = histogram.range();
        self.set_data_range(min, max)?;
        self.histogram = Some(histogram);
        Ok(())
    }

    /// Set the data range to the finite values of `data` and, if given,
    /// of `other` (e.g. two images being compared).  Return `false`, and
    /// change nothing, if there is no finite value.
    pub fn set_data(&mut self, data: &[f64], other: Option<&[f64]>) -> bool {
        match data_range_of(data, other) {
            Some((min, max)) => {
                // `min <= max` holds for finite values.
                self.set_data_range(min, max).is_ok()
            }
            None => {
                debug!("no finite data, data range kept");
                false
            }
        }
    }

    /// Change a bound from its input field without notifying.  Call
    /// [`finish_editing`](Self::finish_editing) when the user is done.
    pub fn edit_bound(&mut self, bound: Bound, value: f64) -> Result<()> {
        self.set_bound(bound, value)?;
        trace!("{} edited to {value}", bound.label());
        self.bounds_edited = true;
        Ok(())
    }

    /// Commit the bound edits: notify if a bound was edited since the
    /// last notification.  Return whether subscribers were notified.
    pub fn finish_editing(&mut self) -> bool {
        if !self.bounds_edited { return false }
        self.notify();
        true
    }

    /// Move the marker of `bound` on the range plot to `x`.  Subscribers
    /// are notified once the marker is released.
    pub fn drag_marker(&mut self, bound: Bound, x: f64, event: MarkerEvent)
                       -> Result<()> {
        self.set_bound(bound, x)?;
        match event {
            MarkerEvent::Moving => trace!("{} marker at {x}", bound.label()),
            MarkerEvent::Moved => self.notify(),
        }
        Ok(())
    }

    fn set_bound(&mut self, bound: Bound, value: f64) -> Result<()> {
        if self.description.autoscale {
            return Err(Error::AutoscaleEnabled)
        }
        if value.is_nan() {
            return Err(Error::InvalidBound(value))
        }
        match bound {
            Bound::Min => self.description.vmin = value,
            Bound::Max => self.description.vmax = value,
        }
        Ok(())
    }

    fn notify(&mut self) {
        self.bounds_edited = false;
        let description = self.description;
        debug!("colormap changed: {description:?}");
        for (_, callback) in &mut self.subscribers {
            callback(&description);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A config recording the descriptions it notifies.
    fn recorded() -> (ColormapConfig, Rc<RefCell<Vec<ColormapDescription>>>) {
        let mut config = ColormapConfig::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        config.subscribe(move |d| log.borrow_mut().push(*d));
        (config, seen)
    }

    fn manual(config: &mut ColormapConfig, vmin: f64, vmax: f64) {
        config.set_colormap(ColormapUpdate::new().autoscale(false)
                            .vmin(vmin).vmax(vmax)).unwrap();
    }

    #[test]
    fn defaults() {
        let config = ColormapConfig::new();
        let d = config.colormap();
        assert_eq!(d.name, ColormapName::Gray);
        assert_eq!(d.normalization, Normalization::Linear);
        assert!(d.autoscale);
        assert_eq!((d.vmin, d.vmax, d.colors), (1., 10., 256));
        assert_eq!(config.data_range(), (1., 10.));
        assert_eq!(config.histogram(), None);
    }

    #[test]
    fn set_colormap_round_trip() {
        let mut config = ColormapConfig::new();
        for name in ColormapName::ALL {
            for normalization in [Normalization::Linear, Normalization::Log] {
                for autoscale in [true, false] {
                    let d = ColormapDescription {
                        name, normalization, autoscale,
                        vmin: 3.5, vmax: -2., colors: 256 };
                    config.set_colormap(d.into()).unwrap();
                    assert_eq!(config.colormap(), d);
                }
            }
        }
    }

    #[test]
    fn one_notification_per_update() {
        let (mut config, seen) = recorded();
        config.set_colormap(ColormapUpdate::new().name(ColormapName::Red)
                            .vmin(1.).vmax(2.)).unwrap();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ColormapDescription {
            name: ColormapName::Red, vmin: 1., vmax: 2.,
            ..ColormapDescription::default() });
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let (mut config, seen) = recorded();
        let update = ColormapUpdate::new().name(ColormapName::Blue)
            .vmin(f64::NAN);
        assert!(matches!(config.set_colormap(update),
                         Err(Error::InvalidBound(_))));
        assert_eq!(config.colormap(), ColormapDescription::default());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn data_range_round_trip() {
        let mut config = ColormapConfig::new();
        for (min, max) in [(0., 0.), (-3.25, 7.), (1e-300, 1e300)] {
            config.set_data_range(min, max).unwrap();
            assert_eq!(config.data_range(), (min, max));
        }
    }

    #[test]
    fn autoscale_follows_data_range() {
        let (mut config, seen) = recorded();
        config.set_data_range(2., 20.).unwrap();
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (2., 20.));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn manual_bounds_ignore_data_range() {
        let (mut config, seen) = recorded();
        manual(&mut config, 1., 2.);
        config.set_data_range(5., 50.).unwrap();
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (1., 2.));
        assert_eq!(config.data_range(), (5., 50.));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn inverted_data_range_is_rejected() {
        let (mut config, seen) = recorded();
        assert_eq!(config.set_data_range(5., 1.),
                   Err(Error::InvalidRange { min: 5., max: 1. }));
        assert!(config.set_data_range(f64::NAN, 1.).is_err());
        assert_eq!(config.data_range(), (1., 10.));
        assert_eq!(config.colormap(), ColormapDescription::default());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn histogram_sets_data_range() {
        let mut config = ColormapConfig::new();
        config.set_histogram(Some(&[1., 2., 3.]), Some(&[0., 1., 2., 3.]))
            .unwrap();
        assert_eq!(config.data_range(), (0., 3.));
        let h = config.histogram().unwrap();
        assert_eq!(h.counts(), &[1., 2., 3.]);
        assert_eq!(h.bin_edges(), &[0., 1., 2., 3.]);
        assert_eq!(h.centers(), vec![0.5, 1.5, 2.5]);
        assert_eq!(h.normalized_counts(), vec![1. / 3., 2. / 3., 1.]);
        config.set_histogram(None, None).unwrap();
        assert_eq!(config.histogram(), None);
        config.set_histogram(Some(&[1.]), Some(&[0., 1.])).unwrap();
        config.set_histogram(Some(&[1.]), None).unwrap();
        assert_eq!(config.histogram(), None);
    }

    #[test]
    fn histogram_notifies_when_autoscaled() {
        let (mut config, seen) = recorded();
        config.set_histogram(Some(&[1., 2.]), Some(&[-4., 0., 4.])).unwrap();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!((seen[0].vmin, seen[0].vmax), (-4., 4.));
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (-4., 4.));
    }

    #[test]
    fn histogram_keeps_manual_bounds() {
        let (mut config, seen) = recorded();
        manual(&mut config, 1., 2.);
        config.set_histogram(Some(&[1., 2.]), Some(&[-4., 0., 4.])).unwrap();
        assert_eq!(seen.borrow().len(), 1);
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (1., 2.));
        assert_eq!(config.data_range(), (-4., 4.));
    }

    #[test]
    fn clearing_histogram_is_silent() {
        let (mut config, seen) = recorded();
        config.set_histogram(Some(&[1.]), Some(&[0., 1.])).unwrap();
        config.set_histogram(None, None).unwrap();
        config.set_histogram(None, Some(&[0., 1.])).unwrap();
        assert_eq!(config.histogram(), None);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(config.data_range(), (0., 1.));
    }

    #[test]
    fn color_count_is_ignored() {
        let (mut config, seen) = recorded();
        let update: ColormapUpdate = serde_json::from_str(
            r#"{"name": "red", "vmin": 0.5, "colors": 512}"#).unwrap();
        config.set_colormap(update).unwrap();
        let d = config.colormap();
        assert_eq!((d.name, d.vmin, d.colors),
                   (ColormapName::Red, 0.5, DEFAULT_COLORS));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn range_of_finite_values() {
        assert_eq!(data_range_of(&[3., f64::NAN, -1., f64::INFINITY], None),
                   Some((-1., 3.)));
        assert_eq!(data_range_of(&[2.], Some(&[f64::NEG_INFINITY, 7., 5.])),
                   Some((2., 7.)));
        assert_eq!(data_range_of(&[], Some(&[4.])), Some((4., 4.)));
        assert_eq!(data_range_of(&[f64::NAN], Some(&[f64::INFINITY])), None);
        assert_eq!(data_range_of(&[], None), None);
    }

    #[test]
    fn data_drives_autoscale() {
        let (mut config, seen) = recorded();
        assert!(config.set_data(&[f64::NAN, 2., 8.],
                                Some(&[-3., f64::INFINITY])));
        assert_eq!(config.data_range(), (-3., 8.));
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (-3., 8.));
        assert_eq!(seen.borrow().len(), 1);

        assert!(!config.set_data(&[f64::NAN], Some(&[f64::NEG_INFINITY])));
        assert!(!config.set_data(&[], None));
        assert_eq!(config.data_range(), (-3., 8.));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn bad_histogram_is_rejected() {
        let mut config = ColormapConfig::new();
        assert_eq!(config.set_histogram(Some(&[1., 2.]), Some(&[0., 1.])),
                   Err(Error::HistogramShape { counts: 2, edges: 2 }));
        assert_eq!(config.set_histogram(Some(&[]), Some(&[0.])),
                   Err(Error::HistogramShape { counts: 0, edges: 1 }));
        assert_eq!(config.set_histogram(Some(&[1.]), Some(&[4., 2.])),
                   Err(Error::InvalidRange { min: 4., max: 2. }));
        assert_eq!(config.histogram(), None);
        assert_eq!(config.data_range(), (1., 10.));
    }

    #[test]
    fn empty_histogram_is_flat() {
        let mut config = ColormapConfig::new();
        config.set_histogram(Some(&[0., 0.]), Some(&[-1., 0., 1.])).unwrap();
        let h = config.histogram().unwrap();
        assert_eq!(h.normalized_counts(), vec![0., 0.]);
        assert_eq!(config.data_range(), (-1., 1.));
    }

    #[test]
    fn autoscale_toggle() {
        let (mut config, seen) = recorded();
        config.set_data_range(2., 20.).unwrap();
        config.set_autoscale(false);
        assert_eq!(seen.borrow().len(), 1);
        let d = config.colormap();
        assert!(!d.autoscale);
        assert_eq!((d.vmin, d.vmax), (2., 20.));

        config.edit_bound(Bound::Min, 4.).unwrap();
        config.finish_editing();
        config.set_data_range(0., 30.).unwrap();
        config.set_autoscale(true);
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (0., 30.));
        assert_eq!(seen.borrow().len(), 3);

        config.set_autoscale(true);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn explicit_bounds_win_over_autoscale_reset() {
        let mut config = ColormapConfig::new();
        manual(&mut config, 4., 5.);
        config.set_colormap(ColormapUpdate::new().autoscale(true).vmax(7.))
            .unwrap();
        let d = config.colormap();
        assert_eq!((d.vmin, d.vmax), (1., 7.));
    }

    #[test]
    fn edits_are_coalesced() {
        let (mut config, seen) = recorded();
        manual(&mut config, 1., 2.);
        assert!(!config.finish_editing());
        config.edit_bound(Bound::Min, 0.).unwrap();
        config.edit_bound(Bound::Min, 0.5).unwrap();
        config.edit_bound(Bound::Max, 3.).unwrap();
        assert_eq!(seen.borrow().len(), 1);
        assert!(config.finish_editing());
        assert!(!config.finish_editing());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!((seen[1].vmin, seen[1].vmax), (0.5, 3.));
    }

    #[test]
    fn bounds_are_locked_by_autoscale() {
        let (mut config, seen) = recorded();
        assert_eq!(config.edit_bound(Bound::Min, 0.),
                   Err(Error::AutoscaleEnabled));
        assert_eq!(config.drag_marker(Bound::Max, 0., MarkerEvent::Moved),
                   Err(Error::AutoscaleEnabled));
        assert!(!config.finish_editing());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn marker_notifies_on_release() {
        let (mut config, seen) = recorded();
        manual(&mut config, 1., 2.);
        config.drag_marker(Bound::Max, 5., MarkerEvent::Moving).unwrap();
        config.drag_marker(Bound::Max, 6., MarkerEvent::Moving).unwrap();
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(config.colormap().vmax, 6.);
        config.drag_marker(Bound::Max, 6.5, MarkerEvent::Moved).unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].vmax, 6.5);
    }

    #[test]
    fn unsubscribe() {
        let (mut config, seen) = recorded();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let id = config.subscribe(move |_| *c.borrow_mut() += 1);
        config.set_autoscale(false);
        config.set_autoscale(true);
        assert!(config.unsubscribe(id));
        assert!(!config.unsubscribe(id));
        config.set_colormap(ColormapUpdate::new()).unwrap();
        assert_eq!(*count.borrow(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut config = ColormapConfig::new();
        let mut d = config.colormap();
        d.vmin = -100.;
        d.name = ColormapName::Blue;
        assert_eq!(config.colormap(), ColormapDescription::default());
        config.set_colormap(ColormapUpdate::new()).unwrap();
        assert_eq!(config.colormap().vmin, 1.);
    }

    #[test]
    fn dict_shape() {
        let d = ColormapDescription { name: ColormapName::ReversedGray,
                                      normalization: Normalization::Log,
                                      autoscale: false, vmin: 1., vmax: 2.,
                                      colors: 256 };
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json, serde_json::json!({
            "name": "reversed gray", "normalization": "log",
            "autoscale": false, "vmin": 1.0, "vmax": 2.0, "colors": 256 }));
        let back: ColormapDescription = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn partial_dict_update() {
        let mut config = ColormapConfig::new();
        let update: ColormapUpdate = serde_json::from_str(
            r#"{"name": "temperature", "autoscale": false, "vmax": 3.0}"#)
            .unwrap();
        assert_eq!(serde_json::to_string(&update).unwrap(),
                   r#"{"name":"temperature","autoscale":false,"vmax":3.0}"#);
        config.set_colormap(update).unwrap();
        let d = config.colormap();
        assert_eq!((d.name, d.autoscale, d.vmin, d.vmax),
                   (ColormapName::Temperature, false, 1., 3.));
        assert!(serde_json::from_str::<ColormapUpdate>(
            r#"{"name": "jet"}"#).is_err());
        assert!(serde_json::from_str::<ColormapUpdate>(
            r#"{"normalization": "sqrt"}"#).is_err());
        assert!(serde_json::from_str::<ColormapUpdate>(
            r#"{"cmap": "gray"}"#).is_err());
    }
}
