//! # Geometry
//!
//! The rectangle every layout unit owns. Coordinates are f64 points with the
//! origin at the top-left corner: positive x extends right, positive y
//! extends down.
//!
//! `set_right` and `set_bottom` deliberately resize against a fixed origin
//! instead of moving it. Line-breaking code extends a word's box to a line
//! edge by setting its right edge; the word must not drift left when that
//! happens, so the contract is explicit methods rather than field writes.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in layout space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (same as `x`).
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (same as `y`).
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge, derived: `x + width`.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge, derived: `y + height`.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the left edge, keeping width.
    pub fn set_left(&mut self, left: f64) {
        self.x = left;
    }

    /// Move the top edge, keeping height.
    pub fn set_top(&mut self, top: f64) {
        self.y = top;
    }

    /// Set the right edge by recomputing width. The origin stays fixed.
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    /// Set the bottom edge by recomputing height. The origin stays fixed.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }
}
