//! # Layout Units
//!
//! The atomic pieces of inline content produced during line breaking. Words
//! of text are the most atomic element the engine positions — not characters,
//! because per-character rectangles would make measurement and painting cost
//! explode on any real document.
//!
//! A unit is a shared record (identity, rectangle, owning-box reference) plus
//! a closed content variant: a text word, an inline image, a whitespace run,
//! a line break, or the empty placeholder. The placeholder deliberately
//! reports itself as whitespace-only so trimming and line-breaking logic can
//! skip uninitialized units without special cases.
//!
//! The owning-box reference is a plain [`BoxId`] into the document context's
//! arena. A unit with no owner is detached: its spacing adjustment and glyph
//! padding are zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::{BoxId, DocumentContext};
use crate::geometry::Rect;

/// Identity of a layout unit, issued by [`DocumentContext::next_unit_id`].
///
/// Selection state is keyed by this identity rather than stored on the unit,
/// so units stay cheap to create and discard during reflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(u64);

impl UnitId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Opaque handle to a decoded image owned by the host's image registry.
/// Decoding and pixel data live outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(u64);

impl ImageHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Per-variant content of a layout unit.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitContent {
    /// Uninitialized/synthetic unit representing nothing but space.
    Placeholder,
    /// A run of non-whitespace text, with whitespace-adjacency flags
    /// recorded before trimming.
    Word {
        text: String,
        has_space_before: bool,
        has_space_after: bool,
    },
    /// An inline image.
    Image {
        handle: ImageHandle,
        has_space_after: bool,
    },
    /// A preserved run of whitespace (spaces and tabs).
    Spaces { text: String },
    /// A mandatory line break.
    LineBreak,
}

/// An atomic, rectangle-bearing piece of inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutUnit {
    id: UnitId,
    rect: Rect,
    owner: Option<BoxId>,
    content: UnitContent,
}

impl LayoutUnit {
    pub fn new(id: UnitId, owner: Option<BoxId>, content: UnitContent) -> Self {
        Self {
            id,
            rect: Rect::default(),
            owner,
            content,
        }
    }

    /// A detached placeholder unit.
    pub fn placeholder(id: UnitId) -> Self {
        Self::new(id, None, UnitContent::Placeholder)
    }

    pub fn word(
        id: UnitId,
        owner: Option<BoxId>,
        text: impl Into<String>,
        has_space_before: bool,
        has_space_after: bool,
    ) -> Self {
        Self::new(
            id,
            owner,
            UnitContent::Word {
                text: text.into(),
                has_space_before,
                has_space_after,
            },
        )
    }

    pub fn image(
        id: UnitId,
        owner: Option<BoxId>,
        handle: ImageHandle,
        has_space_after: bool,
    ) -> Self {
        Self::new(
            id,
            owner,
            UnitContent::Image {
                handle,
                has_space_after,
            },
        )
    }

    pub fn spaces(id: UnitId, owner: Option<BoxId>, text: impl Into<String>) -> Self {
        Self::new(id, owner, UnitContent::Spaces { text: text.into() })
    }

    pub fn line_break(id: UnitId, owner: Option<BoxId>) -> Self {
        Self::new(id, owner, UnitContent::LineBreak)
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    /// The box this unit belongs to, if any.
    pub fn owner(&self) -> Option<BoxId> {
        self.owner
    }

    pub fn content(&self) -> &UnitContent {
        &self.content
    }

    // ── Rectangle ───────────────────────────────────────────────

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn left(&self) -> f64 {
        self.rect.left()
    }

    pub fn top(&self) -> f64 {
        self.rect.top()
    }

    pub fn width(&self) -> f64 {
        self.rect.width
    }

    pub fn height(&self) -> f64 {
        self.rect.height
    }

    pub fn right(&self) -> f64 {
        self.rect.right()
    }

    pub fn bottom(&self) -> f64 {
        self.rect.bottom()
    }

    pub fn set_left(&mut self, left: f64) {
        self.rect.set_left(left);
    }

    pub fn set_top(&mut self, top: f64) {
        self.rect.set_top(top);
    }

    pub fn set_width(&mut self, width: f64) {
        self.rect.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.rect.height = height;
    }

    /// Set the right edge; only the width changes, the origin stays put.
    pub fn set_right(&mut self, right: f64) {
        self.rect.set_right(right);
    }

    /// Set the bottom edge; only the height changes, the origin stays put.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.rect.set_bottom(bottom);
    }

    // ── Content queries ─────────────────────────────────────────

    /// Was there whitespace before this unit's characters (before trim)?
    pub fn has_space_before(&self) -> bool {
        match &self.content {
            UnitContent::Word {
                has_space_before, ..
            } => *has_space_before,
            _ => false,
        }
    }

    /// Was there whitespace after this unit's characters (before trim)?
    pub fn has_space_after(&self) -> bool {
        match &self.content {
            UnitContent::Word { has_space_after, .. }
            | UnitContent::Image { has_space_after, .. } => *has_space_after,
            _ => false,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self.content, UnitContent::Image { .. })
    }

    /// The image this unit represents, if it is an image unit.
    pub fn image_handle(&self) -> Option<ImageHandle> {
        match &self.content {
            UnitContent::Image { handle, .. } => Some(*handle),
            _ => None,
        }
    }

    /// Is this unit composed only of spaces? Spaces include tabs and line
    /// breaks. The placeholder counts as spaces so it is safely skippable.
    pub fn is_spaces(&self) -> bool {
        match &self.content {
            UnitContent::Placeholder | UnitContent::Spaces { .. } | UnitContent::LineBreak => true,
            UnitContent::Word { text, .. } => text.chars().all(char::is_whitespace),
            UnitContent::Image { .. } => false,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self.content, UnitContent::LineBreak)
    }

    /// The unit's text. Empty for placeholders, images, and line breaks.
    pub fn text(&self) -> &str {
        match &self.content {
            UnitContent::Word { text, .. } | UnitContent::Spaces { text } => text,
            _ => "",
        }
    }

    // ── Derived geometry ────────────────────────────────────────

    /// The actual width of whitespace charged to this unit, read from the
    /// owning box. Trailing whitespace and image-ness each contribute the
    /// owner's word spacing, and the contributions add up: an image that
    /// also reports trailing space is charged twice. That additive rule is
    /// long-standing behavior downstream layout depends on; see the full
    /// width tests before changing it.
    pub fn actual_spacing(&self, ctx: &DocumentContext) -> f64 {
        let Some(owner) = self.owner.and_then(|id| ctx.get_box(id)) else {
            return 0.0;
        };
        let mut spacing = 0.0;
        if self.has_space_after() {
            spacing += owner.word_spacing;
        }
        if self.is_image() {
            spacing += owner.word_spacing;
        }
        spacing
    }

    /// Full width of the unit including trailing spacing, used when
    /// accumulating units onto a line.
    pub fn full_width(&self, ctx: &DocumentContext) -> f64 {
        self.rect.width + self.actual_spacing(ctx)
    }

    /// Padding to the left of the first glyph, from the owner's active
    /// font. Zero for detached units.
    pub fn left_glyph_padding(&self, ctx: &DocumentContext) -> f64 {
        self.owner
            .and_then(|id| ctx.get_box(id))
            .map_or(0.0, |owner| owner.font.left_padding)
    }
}

impl fmt::Display for LayoutUnit {
    /// Human-readable summary: spaces shown as hyphens, newlines escaped,
    /// followed by a character count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text();
        let shown: String = text
            .chars()
            .map(|ch| if ch == ' ' { '-' } else { ch })
            .collect::<String>()
            .replace('\n', "\\n");
        let count = text.chars().count();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{shown} ({count} char{plural})")
    }
}
