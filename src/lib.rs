//! # Galley
//!
//! The inline layout core of an HTML renderer: the part that turns parsed
//! markup into positioned, measured, selectable content units and keeps
//! those units off fixed-height page boundaries.
//!
//! Words are the atomic element here, not characters. Per-character
//! rectangles would make measurement and painting cost explode on any real
//! document, so line breaking, selection, and pagination all operate on
//! word-granular units (plus inline images, whitespace runs, and line
//! breaks).
//!
//! ## Architecture
//!
//! ```text
//! Parsed markup (Tag records)
//!       ↓
//!   [model]      — tag names, single/paired flags, attribute maps
//!       ↓
//!   [layout]     — units, line flow, pagination
//!       ↕
//!   [selection]  — external per-unit selection descriptors
//!       ↓
//!   Painting collaborator (fonts, raster, images — not this crate)
//! ```
//!
//! CSS cascade, HTML tree construction, font metrics, and the drawing
//! surface are collaborators behind narrow interfaces: the owning-box arena
//! in [`container`] carries the two numeric values this core reads from a
//! font/style (word spacing and left glyph padding), and [`events`] carries
//! the two surfaces it produces for the host (stylesheet-load overrides and
//! render-error notifications).
//!
//! Everything is single-threaded and synchronous: pure, bounded
//! computations over already-resolved data, driven by whatever thread runs
//! layout and paint.

pub mod container;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod selection;

pub use container::{BoxId, DocumentContext, FontInfo, InlineBox, PageGeometry};
pub use error::GalleyError;
pub use events::{RenderError, RenderErrorKind, StylesheetLoad, StylesheetResolution};
pub use geometry::Rect;
pub use layout::pagination::{break_page, BreakOutcome};
pub use layout::unit::{ImageHandle, LayoutUnit, UnitContent, UnitId};
pub use layout::LayoutSnapshot;
pub use model::{AttributeMap, Tag};
pub use selection::{SelectionSegment, SelectionTracker, UNSET_INDEX, UNSET_OFFSET};
