//! Shared application-wide constants.
//! Centralizes tweakable values used across the coordinate math, rendering and interactions.

// View transform
/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f32 = 0.05;
/// Largest allowed zoom factor.
pub const ZOOM_MAX: f32 = 30.0;
/// Multiplicative zoom change applied per wheel notch.
pub const ZOOM_STEP: f32 = 1.15;

// Vertices
/// Visual vertex radius in screen pixels (constant under zoom).
pub const VERTEX_RADIUS: f32 = 10.0;
/// Extra screen-pixel slack around a vertex that still counts as a hit.
pub const HIT_MARGIN: f32 = 6.0;
/// Extra screen-pixel radius of the selection / pending glow ring.
pub const GLOW_WIDTH: f32 = 6.0;
/// Outline width of a vertex circle in screen pixels.
pub const VERTEX_STROKE_WIDTH: f32 = 2.0;

// Edges
/// Edge stroke width in screen pixels.
pub const EDGE_WIDTH: f32 = 2.0;
/// Dash length of the pending-edge preview, in screen pixels.
pub const PREVIEW_DASH: f32 = 8.0;
/// Gap length of the pending-edge preview, in screen pixels.
pub const PREVIEW_GAP: f32 = 6.0;

// Grid/drawing
/// Grid spacing (world units) the adaptive step search starts from.
pub const GRID_BASE_SPACING: f32 = 50.0;
/// Factor the grid step is multiplied or divided by while adapting.
pub const GRID_STEP_FACTOR: f32 = 5.0;
/// Lower bound of the on-screen grid spacing band, in screen pixels.
pub const GRID_MIN_SCREEN_SPACING: f32 = 25.0;
/// Upper bound of the on-screen grid spacing band, in screen pixels.
pub const GRID_MAX_SCREEN_SPACING: f32 = 250.0;
/// Smallest grid step in world units.
pub const GRID_MIN_STEP: f32 = 1.0;
/// Grid line width in screen pixels.
pub const GRID_LINE_WIDTH: f32 = 1.0;
/// Axis line width in screen pixels.
pub const AXIS_WIDTH: f32 = 2.0;
/// Arrowhead length in screen pixels.
pub const ARROW_SIZE: f32 = 12.0;
/// Radius of the origin marker in screen pixels.
pub const ORIGIN_DOT_RADIUS: f32 = 4.0;
/// Distance labels keep from the viewport border, in screen pixels.
pub const LABEL_MARGIN: f32 = 14.0;

// Text
/// Font size for vertex id labels, in screen pixels.
pub const VERTEX_ID_FONT: f32 = 13.0;
/// Font size for vertex coordinate labels, in screen pixels.
pub const VERTEX_COORD_FONT: f32 = 11.0;
/// Font size for edge labels, in screen pixels.
pub const EDGE_LABEL_FONT: f32 = 11.0;
/// Font size for grid axis-value labels, in screen pixels.
pub const GRID_LABEL_FONT: f32 = 10.0;

// Status bar
/// Seconds a status message stays visible before it is cleared.
pub const STATUS_CLEAR_SECS: f64 = 3.0;

// Ids
/// First id handed out by both the vertex and the edge counter.
pub const FIRST_ID: u32 = 1;
