//! Layout measurement.
//!
//! The carousel never lays anything out itself. A host supplies the rendered
//! size of the container and of one item through [`Measure`], and the
//! functions here turn those sizes into the visible count and step size.

use crate::types::{Extent, Orientation};

/// Source of layout measurements.
///
/// `None` means the box has not been rendered yet; the carousel then treats
/// the item extent as 0 and computes no offset.
pub trait Measure {
    fn container(&self) -> Option<Extent>;
    fn item(&self) -> Option<Extent>;
}

impl<M: Measure + ?Sized> Measure for std::sync::Arc<M> {
    fn container(&self) -> Option<Extent> {
        (**self).container()
    }

    fn item(&self) -> Option<Extent> {
        (**self).item()
    }
}

/// Measurements known up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedMeasure {
    pub container: Option<Extent>,
    pub item: Option<Extent>,
}

impl FixedMeasure {
    pub fn new(container: Extent, item: Extent) -> Self {
        Self {
            container: Some(container),
            item: Some(item),
        }
    }

    /// Nothing rendered yet.
    pub fn unmeasured() -> Self {
        Self::default()
    }
}

impl Measure for FixedMeasure {
    fn container(&self) -> Option<Extent> {
        self.container
    }

    fn item(&self) -> Option<Extent> {
        self.item
    }
}

/// Item extent along `orientation`, 0 when unmeasured.
pub fn measure_dim(measure: &dyn Measure, orientation: Orientation) -> u16 {
    measure
        .item()
        .map(|extent| orientation.axis_of(extent))
        .unwrap_or(0)
}

/// Container extent along `orientation`, 0 when unmeasured.
pub fn measure_container(measure: &dyn Measure, orientation: Orientation) -> u16 {
    measure
        .container()
        .map(|extent| orientation.axis_of(extent))
        .unwrap_or(0)
}

/// Number of whole items that fit: `floor(container / (dim + gap))`.
pub fn visible_count(container: u16, dim: u16, gap: u16) -> usize {
    if dim == 0 {
        return 0;
    }
    let stride = dim as u32 + gap as u32;
    (container as u32 / stride) as usize
}

/// Gap expressed as a percentage of the item extent: `100 * gap / dim`.
pub fn step_percent(gap: u16, dim: u16) -> f64 {
    if dim == 0 {
        return 0.0;
    }
    100.0 * gap as f64 / dim as f64
}
