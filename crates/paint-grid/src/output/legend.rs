//! Paint-by-number legend with first-seen label assignment.

use std::collections::HashMap;

use crate::color::Rgb;

/// One legend row: a label id and the color it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    /// Label id, starting at 1
    pub label: u32,
    /// The quantized color this label marks
    pub color: Rgb,
}

/// Ordered mapping from label id to color.
///
/// Labels are handed out by [`Legend::label_for`] in the order colors are
/// first seen: the first distinct color gets `1`, the next `2`, and so on.
/// A label is never reused or reassigned, and asking again for a color
/// already in the legend returns its existing label.
///
/// # Example
///
/// ```
/// use paint_grid::{Legend, Rgb};
///
/// let mut legend = Legend::new();
/// assert_eq!(legend.label_for(Rgb::WHITE), 1);
/// assert_eq!(legend.label_for(Rgb::BLACK), 2);
/// assert_eq!(legend.label_for(Rgb::WHITE), 1);
/// assert_eq!(legend.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    index: HashMap<Rgb, u32>,
}

impl Legend {
    /// Create an empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for `color`, assigning the next id if the color is new.
    pub fn label_for(&mut self, color: Rgb) -> u32 {
        if let Some(&label) = self.index.get(&color) {
            return label;
        }
        let label = self.entries.len() as u32 + 1;
        self.index.insert(color, label);
        self.entries.push(LegendEntry { label, color });
        label
    }

    /// Existing label for `color`, without assigning one.
    #[inline]
    pub fn label_of(&self, color: Rgb) -> Option<u32> {
        self.index.get(&color).copied()
    }

    /// Color for `label`, if assigned.
    #[inline]
    pub fn color_of(&self, label: u32) -> Option<Rgb> {
        let idx = (label as usize).checked_sub(1)?;
        self.entries.get(idx).map(|e| e.color)
    }

    /// Entries in label order.
    #[inline]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Iterate over entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = &LegendEntry> {
        self.entries.iter()
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no label has been assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Legend {
    type Item = &'a LegendEntry;
    type IntoIter = std::slice::Iter<'a, LegendEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
