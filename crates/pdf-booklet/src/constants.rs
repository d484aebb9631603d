//! Shared constants for booklet conversion

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// ISO A4 portrait width in points
pub const A4_WIDTH_PT: f32 = 595.28;

/// ISO A4 portrait height in points
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Fallback page dimensions when the source's first page cannot be measured
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (A4_WIDTH_PT, A4_HEIGHT_PT);

// =============================================================================
// Sheet Layout
// =============================================================================

/// Default width of the spine gutter reserved at the sheet center (points)
pub const DEFAULT_GUTTER_PT: f32 = 36.0;

// =============================================================================
// Guide Line
// =============================================================================

/// Width of the center guide line (points)
pub const GUIDE_LINE_WIDTH_PT: f32 = 1.0;

/// Guide line gray level (0 = black, 1 = white)
pub const GUIDE_LINE_GRAY: f32 = 0.5;

/// Guide line fill opacity
pub const GUIDE_LINE_OPACITY: f32 = 0.5;
