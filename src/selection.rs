//! # Selection Tracking
//!
//! Text selection state lives outside the layout units, in a tracker keyed
//! by unit identity. Units are created and thrown away constantly during
//! reflow; keeping selection in a side table means a reflow never has to
//! carry selection bookkeeping through unit construction, and an unselected
//! unit costs nothing.
//!
//! Queries use sentinels instead of errors: asking about an unattached unit
//! answers −1 (or −1.0 for pixel offsets). Selection absence is a normal
//! state. An attached descriptor with no boundary values means the unit is
//! entirely inside the selection.

use std::collections::HashMap;

use crate::layout::unit::{LayoutUnit, UnitId};

/// Index sentinel meaning "not selected, or no partial boundary here".
pub const UNSET_INDEX: isize = -1;

/// Pixel-offset sentinel with the same meaning.
pub const UNSET_OFFSET: f64 = -1.0;

/// Partial-selection boundaries for one unit.
///
/// `None` in every field means the whole unit is inside the selection.
/// Populated fields mark where within the unit the selection starts or ends,
/// as a character index and a pixel offset resolved by hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionSegment {
    pub start_index: Option<usize>,
    pub end_index_offset: Option<usize>,
    pub start_offset: Option<f64>,
    pub end_offset: Option<f64>,
}

impl SelectionSegment {
    /// Descriptor for a unit entirely inside the selection.
    pub fn full() -> Self {
        Self::default()
    }
}

/// Maps selected units to their selection descriptors.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    segments: HashMap<UnitId, SelectionSegment>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a descriptor to a unit. Attachment never touches the unit's
    /// rectangle; it is the only observable mutation selection performs.
    pub fn attach(&mut self, unit: &LayoutUnit, segment: SelectionSegment) {
        self.segments.insert(unit.id(), segment);
    }

    /// Detach a unit from the selection, if it was attached.
    pub fn detach(&mut self, unit: &LayoutUnit) {
        self.segments.remove(&unit.id());
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Is the unit inside the current selection?
    pub fn is_selected(&self, unit: &LayoutUnit) -> bool {
        self.segments.contains_key(&unit.id())
    }

    /// Selection start character index within the unit, or
    /// [`UNSET_INDEX`] when the unit is unselected or fully selected.
    pub fn start_index(&self, unit: &LayoutUnit) -> isize {
        self.segment_index(unit, |segment| segment.start_index)
    }

    /// Selection end index offset within the unit, or [`UNSET_INDEX`].
    pub fn end_index_offset(&self, unit: &LayoutUnit) -> isize {
        self.segment_index(unit, |segment| segment.end_index_offset)
    }

    /// Selection start pixel offset within the unit, or [`UNSET_OFFSET`].
    pub fn start_offset(&self, unit: &LayoutUnit) -> f64 {
        self.segment_offset(unit, |segment| segment.start_offset)
    }

    /// Selection end pixel offset within the unit, or [`UNSET_OFFSET`].
    pub fn end_offset(&self, unit: &LayoutUnit) -> f64 {
        self.segment_offset(unit, |segment| segment.end_offset)
    }

    fn segment_index(
        &self,
        unit: &LayoutUnit,
        field: impl Fn(&SelectionSegment) -> Option<usize>,
    ) -> isize {
        self.segments
            .get(&unit.id())
            .and_then(field)
            .map_or(UNSET_INDEX, |value| value as isize)
    }

    fn segment_offset(
        &self,
        unit: &LayoutUnit,
        field: impl Fn(&SelectionSegment) -> Option<f64>,
    ) -> f64 {
        self.segments
            .get(&unit.id())
            .and_then(field)
            .unwrap_or(UNSET_OFFSET)
    }
}
