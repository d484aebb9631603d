//! Sheet geometry for 2-up booklet imposition
//!
//! Pure placement math: given the sheet dimensions and a source page's
//! dimensions, compute where the page lands in its half-sheet slot. No PDF
//! types appear here.

use crate::types::PagePair;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Dimensions of one output sheet
///
/// A sheet is landscape relative to a portrait base page: twice the base
/// width, same height. A gutter at the horizontal center is reserved for
/// the spine fold or cut margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Sheet width in points (twice the base page width)
    pub width: f32,
    /// Sheet height in points
    pub height: f32,
    /// Width of the center gutter in points
    pub gutter: f32,
}

impl SheetGeometry {
    pub fn for_base_page(base_width: f32, base_height: f32, gutter: f32) -> Self {
        Self {
            width: base_width * 2.0,
            height: base_height,
            gutter,
        }
    }

    /// Width of the base page the sheet was sized for
    pub fn base_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Width available to one page within its half of the sheet
    pub fn slot_width(&self) -> f32 {
        (self.width - self.gutter) / 2.0
    }
}

/// Which half of the sheet a page lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSide {
    Left,
    Right,
}

/// Final placement of a source page on an output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Source page index (None = blank slot)
    pub source_page: Option<usize>,
    /// Position and size of the drawn page in points
    pub rect: Rect,
    /// Uniform scale factor applied to the source page
    pub scale: f32,
}

/// Assign a pair's pages to sheet halves for duplex printing.
///
/// Even-indexed sheets put the higher page index on the left and the lower
/// on the right; odd-indexed sheets reverse this, compensating for the
/// physical flip when the sheet is printed on its reverse side. Returns
/// `(left, right)` source indices.
pub fn assign_sides(sheet_index: usize, pair: PagePair) -> (usize, usize) {
    if sheet_index % 2 == 0 {
        (pair.back, pair.front)
    } else {
        (pair.front, pair.back)
    }
}

/// Scale factor fitting a source page into a slot, preserving aspect ratio
pub fn fit_scale(src_width: f32, src_height: f32, slot_width: f32, slot_height: f32) -> f32 {
    (slot_width / src_width).min(slot_height / src_height)
}

/// Place a source page in its half-sheet slot.
///
/// The page is scaled to fit the slot, centered vertically, and pushed
/// flush against the sheet's outer edge so the gutter separates the two
/// pages at the center. The returned placement carries no source index;
/// the caller fills it in.
pub fn place_page(
    sheet: &SheetGeometry,
    side: SlotSide,
    src_width: f32,
    src_height: f32,
) -> PagePlacement {
    let scale = fit_scale(src_width, src_height, sheet.slot_width(), sheet.height);
    let drawn_width = src_width * scale;
    let drawn_height = src_height * scale;

    let x = match side {
        SlotSide::Left => 0.0,
        SlotSide::Right => sheet.width - drawn_width,
    };
    let y = (sheet.height - drawn_height) / 2.0;

    PagePlacement {
        source_page: None,
        rect: Rect::new(x, y, drawn_width, drawn_height),
        scale,
    }
}
