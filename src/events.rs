//! # Host Event Surfaces
//!
//! The two notification channels this core produces for its host:
//!
//! - **Stylesheet load override**: before a linked stylesheet is fetched, the
//!   host sees the original source reference and the link element's
//!   attributes, and may substitute a different source, literal stylesheet
//!   text, or pre-parsed stylesheet data. Any override wins over the default
//!   fetch.
//! - **Render error notification**: fire-and-forget reporting of problems
//!   detected during rendering. Reporting never feeds back into layout
//!   control flow; degraded output is preferred over total failure.

use std::error::Error;
use std::fmt;

use crate::model::AttributeMap;

/// Pre-parsed stylesheet data supplied by the host.
///
/// CSS parsing lives outside this core, so the payload is opaque here; the
/// host and the cascade collaborator agree on the concrete type.
pub trait ParsedStylesheet: fmt::Debug {}

/// Which override, if any, the host installed on a [`StylesheetLoad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetResolution {
    /// No override: fetch the original source.
    Default,
    /// Fetch the replacement source instead.
    OverrideSrc,
    /// Use the literal stylesheet text, skipping the fetch.
    OverrideText,
    /// Use the pre-parsed data, skipping fetch and parse.
    OverrideData,
}

/// A stylesheet-load event: the original source plus the host's overrides.
///
/// The three override slots mirror the read order of the loader: a
/// replacement source is consulted first, then literal text, then parsed
/// data. Setting more than one is allowed; the earliest slot wins.
#[derive(Debug)]
pub struct StylesheetLoad {
    src: String,
    attributes: AttributeMap,
    set_src: Option<String>,
    set_stylesheet: Option<String>,
    set_data: Option<Box<dyn ParsedStylesheet>>,
}

impl StylesheetLoad {
    pub fn new(src: impl Into<String>, attributes: AttributeMap) -> Self {
        Self {
            src: src.into(),
            attributes,
            set_src: None,
            set_stylesheet: None,
            set_data: None,
        }
    }

    /// The source of the stylesheet as found in the markup (path or URL).
    pub fn src(&self) -> &str {
        &self.src
    }

    /// All attributes defined on the link element.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Provide a new source (path or URL) to load the stylesheet from.
    pub fn set_src(&mut self, src: impl Into<String>) {
        self.set_src = Some(src.into());
    }

    /// Provide the stylesheet text to use instead of fetching.
    pub fn set_stylesheet(&mut self, stylesheet: impl Into<String>) {
        self.set_stylesheet = Some(stylesheet.into());
    }

    /// Provide pre-parsed stylesheet data to use instead of fetch + parse.
    pub fn set_data(&mut self, data: Box<dyn ParsedStylesheet>) {
        self.set_data = Some(data);
    }

    pub fn replacement_src(&self) -> Option<&str> {
        self.set_src.as_deref()
    }

    pub fn replacement_stylesheet(&self) -> Option<&str> {
        self.set_stylesheet.as_deref()
    }

    pub fn replacement_data(&self) -> Option<&dyn ParsedStylesheet> {
        self.set_data.as_deref()
    }

    /// How the loader should resolve this stylesheet after the host ran.
    pub fn resolution(&self) -> StylesheetResolution {
        if self.set_src.is_some() {
            StylesheetResolution::OverrideSrc
        } else if self.set_stylesheet.is_some() {
            StylesheetResolution::OverrideText
        } else if self.set_data.is_some() {
            StylesheetResolution::OverrideData
        } else {
            StylesheetResolution::Default
        }
    }
}

/// Category of a reported render problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    General,
    HtmlParsing,
    CssParsing,
    Image,
    Layout,
    Paint,
}

/// A render problem surfaced to the host.
///
/// Carries a category, a human-readable message, and optionally the
/// underlying failure. This is a notification value, not a control-flow
/// error: layout of sibling content continues after it is reported.
#[derive(Debug)]
pub struct RenderError {
    pub kind: RenderErrorKind,
    pub message: String,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl RenderError {
    pub fn new(
        kind: RenderErrorKind,
        message: impl Into<String>,
        source: Option<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
