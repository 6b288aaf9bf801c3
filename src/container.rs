//! # Document Container Context
//!
//! The document-level state layout units reach through their owning box:
//! page geometry for pagination, per-box font and spacing values, and the
//! host hooks for stylesheet overrides and render-error notification.
//!
//! Boxes live in an arena owned by the context; a unit's back-reference to
//! its owning box is a plain [`BoxId`] index, never an owning pointer. Units
//! are created and discarded freely during reflow, so the association must
//! stay cheap. A unit must not outlive the context that issued its ids; the
//! design does not protect against that caller error beyond returning `None`
//! for an unknown id.

use serde::{Deserialize, Serialize};

use crate::error::GalleyError;
use crate::events::{RenderError, RenderErrorKind, StylesheetLoad};
use crate::layout::unit::UnitId;
use crate::model::AttributeMap;

/// Fixed page geometry used by pagination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    height: f64,
    margin_top: f64,
}

impl PageGeometry {
    /// Build page geometry. The height must be finite and positive for page
    /// boundaries to be meaningful.
    pub fn new(height: f64, margin_top: f64) -> Result<Self, GalleyError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(GalleyError::InvalidPageHeight(height));
        }
        Ok(Self { height, margin_top })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin_top(&self) -> f64 {
        self.margin_top
    }
}

/// The single numeric value this core reads from a font: the padding to the
/// left of the first glyph. Everything else about fonts is the metrics
/// provider's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    pub left_padding: f64,
}

/// The owning-box capability a layout unit reads through its back-reference:
/// resolved word spacing and active font info.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InlineBox {
    pub word_spacing: f64,
    pub font: FontInfo,
}

/// Arena handle for an [`InlineBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxId(usize);

/// Host callback invoked before a linked stylesheet is fetched.
pub type StylesheetHook = Box<dyn Fn(&mut StylesheetLoad)>;

/// Host callback receiving render-error notifications.
pub type RenderErrorSink = Box<dyn Fn(&RenderError)>;

/// Document-wide layout state: page geometry, the box arena, unit identity,
/// and host hooks.
///
/// `page` is optional; without it, pagination is disabled and every
/// pagination call reports "not moved".
#[derive(Default)]
pub struct DocumentContext {
    page: Option<PageGeometry>,
    boxes: Vec<InlineBox>,
    next_unit_id: u64,
    stylesheet_hook: Option<StylesheetHook>,
    error_sink: Option<RenderErrorSink>,
}

impl DocumentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(page: PageGeometry) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn page(&self) -> Option<PageGeometry> {
        self.page
    }

    pub fn set_page(&mut self, page: Option<PageGeometry>) {
        self.page = page;
    }

    /// Register an owning box and return its handle.
    pub fn push_box(&mut self, inline_box: InlineBox) -> BoxId {
        self.boxes.push(inline_box);
        BoxId(self.boxes.len() - 1)
    }

    pub fn get_box(&self, id: BoxId) -> Option<&InlineBox> {
        self.boxes.get(id.0)
    }

    /// Issue a fresh identity for a layout unit.
    pub fn next_unit_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Install the host's stylesheet-load override hook.
    pub fn on_stylesheet_load(&mut self, hook: StylesheetHook) {
        self.stylesheet_hook = Some(hook);
    }

    /// Install the host's render-error sink.
    pub fn on_render_error(&mut self, sink: RenderErrorSink) {
        self.error_sink = Some(sink);
    }

    /// Run the stylesheet-load hook for a `link` element about to be
    /// fetched. Returns the event with any overrides the host installed;
    /// without a hook the event comes back untouched.
    pub fn resolve_stylesheet(
        &self,
        src: impl Into<String>,
        attributes: AttributeMap,
    ) -> StylesheetLoad {
        let mut event = StylesheetLoad::new(src, attributes);
        if let Some(hook) = &self.stylesheet_hook {
            hook(&mut event);
        }
        event
    }

    /// Notify the host of a render problem. Fire-and-forget: without a sink
    /// the report is dropped, and reporting never aborts layout.
    pub fn report_error(
        &self,
        kind: RenderErrorKind,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) {
        if let Some(sink) = &self.error_sink {
            sink(&RenderError::new(kind, message, source));
        }
    }
}
