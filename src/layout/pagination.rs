//! # Pagination
//!
//! Decides, per layout unit, whether a fixed-height page boundary falls
//! strictly inside the unit's vertical extent and pushes the unit down to
//! the next page when it does.
//!
//! The check works in modular arithmetic against the unit's absolute
//! position instead of tracking a current-page counter. That makes the same
//! formula safe to reapply across repeated layout passes with no
//! accumulated drift, under one condition: a unit must never move upward
//! between pagination calls.

use crate::container::DocumentContext;
use crate::layout::unit::LayoutUnit;

/// Result of a pagination check on one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakOutcome {
    /// The unit straddled a page boundary and was pushed down.
    Moved,
    /// The unit was left in place.
    NotMoved,
}

impl BreakOutcome {
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Push `unit` past the next page boundary if that boundary falls inside
/// its vertical extent.
///
/// No page geometry reachable from the unit's owner means pagination is
/// disabled for it. A unit at least as tall as a page is never moved: it
/// cannot avoid straddling a boundary, so it is allowed to overflow. Both
/// are normal outcomes, not errors.
///
/// The displacement lands the top 1 unit past the boundary rather than
/// exactly on it, so floating-point remainders at the boundary cannot
/// re-trigger the check on the next pass.
pub fn break_page(unit: &mut LayoutUnit, ctx: &DocumentContext) -> BreakOutcome {
    let Some(page) = unit
        .owner()
        .and_then(|id| ctx.get_box(id))
        .and(ctx.page())
    else {
        return BreakOutcome::NotMoved;
    };
    if unit.height() >= page.height() {
        return BreakOutcome::NotMoved;
    }

    let rem_top = (unit.top() - page.margin_top()) % page.height();
    let rem_bottom = (unit.bottom() - page.margin_top()) % page.height();

    // The top sitting later in its page-relative cycle than the bottom means
    // a boundary lies strictly inside the unit.
    if rem_top > rem_bottom {
        unit.set_top(unit.top() + page.height() - rem_top + 1.0);
        BreakOutcome::Moved
    } else {
        BreakOutcome::NotMoved
    }
}
