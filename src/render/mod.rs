//! Canvas rendering: grid, axes, edges, edge preview and vertices.
//!
//! Everything is painted in world coordinates on a [`Surface`] that applies the view
//! transform. Sizes that must look the same at every zoom level (radii, stroke widths,
//! font sizes, arrowheads) are given in screen pixels in [`crate::constants`] and divided
//! by the zoom here, so they come back out at their nominal size after the surface scales
//! them up again.
//!
//! # Layers
//!
//! Drawn back to front: background, grid, axes, edges, pending-edge preview, vertices.

mod surface;
mod theme;

pub use surface::{EguiSurface, Surface};
pub use theme::{ColorRole, Palette, ThemeColors};

use crate::constants::*;
use crate::coords::CoordinateFrame;
use crate::editor::Editor;
use crate::graph::Graph;
use crate::types::VertexId;
use crate::view::ViewTransform;
use eframe::egui;

/// Toggles that change what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw grid lines and their axis-value labels
    pub show_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

/// Everything one frame of the canvas depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Vertices and edges to draw
    pub graph: &'a Graph,
    /// Active coordinate system and math origin
    pub frame: &'a CoordinateFrame,
    /// Pan and zoom
    pub view: ViewTransform,
    /// Canvas size in screen pixels
    pub viewport: egui::Vec2,
    /// Vertex drawn with the selection glow
    pub selected: Option<VertexId>,
    /// Vertex drawn with the pending-edge glow
    pub pending: Option<VertexId>,
    /// Vertex being dragged, also drawn with the selection glow
    pub dragging: Option<VertexId>,
    /// Dashed line from the pending source to the pointer
    pub preview: Option<(egui::Pos2, egui::Pos2)>,
}

impl<'a> Scene<'a> {
    /// Snapshot of the editor state the renderer needs.
    pub fn of(editor: &'a Editor) -> Self {
        Self {
            graph: editor.graph(),
            frame: editor.frame(),
            view: *editor.view(),
            viewport: editor.viewport(),
            selected: editor.selected(),
            pending: editor.pending(),
            dragging: editor.dragging(),
            preview: editor.preview_segment(),
        }
    }
}

/// Grid spacing in world units for a zoom level.
///
/// Starts at [`GRID_BASE_SPACING`] and scales by [`GRID_STEP_FACTOR`] until the on-screen
/// spacing lies within [`GRID_MIN_SCREEN_SPACING`]..=[`GRID_MAX_SCREEN_SPACING`], never
/// going below [`GRID_MIN_STEP`].
pub fn grid_step(zoom: f32) -> f32 {
    let mut step = GRID_BASE_SPACING;
    if !(zoom > 0.0 && zoom.is_finite()) {
        return step;
    }
    while step * zoom < GRID_MIN_SCREEN_SPACING {
        step *= GRID_STEP_FACTOR;
    }
    while step * zoom > GRID_MAX_SCREEN_SPACING && step / GRID_STEP_FACTOR >= GRID_MIN_STEP {
        step /= GRID_STEP_FACTOR;
    }
    step
}

/// Draws a complete frame of `scene` onto `surface`.
///
/// # Arguments
///
/// * `surface` - Target, expected to apply `scene.view`
/// * `scene` - State to draw
/// * `colors` - Theme lookup
/// * `options` - Layer toggles
pub fn render(
    surface: &mut dyn Surface,
    scene: &Scene<'_>,
    colors: &dyn ThemeColors,
    options: RenderOptions,
) {
    let mut pass = Pass {
        surface,
        colors,
        scene,
        zoom: scene.view.zoom(),
        bounds: scene.view.visible_world_bounds(scene.viewport),
    };

    pass.surface.fill(colors.color(ColorRole::Background));
    if options.show_grid {
        pass.draw_grid();
    }
    pass.draw_axes();
    pass.draw_edges();
    pass.draw_preview();
    pass.draw_vertices();
}

/// Per-frame drawing context.
struct Pass<'s, 'a> {
    surface: &'s mut dyn Surface,
    colors: &'s dyn ThemeColors,
    scene: &'s Scene<'a>,
    zoom: f32,
    /// Visible world rectangle
    bounds: egui::Rect,
}

impl Pass<'_, '_> {
    /// Converts a screen-pixel size to world units at the current zoom.
    fn px(&self, screen_len: f32) -> f32 {
        screen_len / self.zoom
    }

    fn color(&self, role: ColorRole) -> egui::Color32 {
        self.colors.color(role)
    }

    /// Where axis-value labels sit: on the axis, pushed inside the viewport when the axis
    /// itself is off-screen.
    fn label_anchor(&self, origin: egui::Pos2) -> egui::Pos2 {
        let margin = self.px(LABEL_MARGIN);
        let clamp = |v: f32, lo: f32, hi: f32| {
            if lo > hi {
                (lo + hi) * 0.5
            } else {
                v.clamp(lo, hi)
            }
        };
        egui::pos2(
            clamp(origin.x, self.bounds.min.x + margin, self.bounds.max.x - margin * 3.0),
            clamp(origin.y, self.bounds.min.y + margin, self.bounds.max.y - margin),
        )
    }

    fn draw_grid(&mut self) {
        let step = grid_step(self.zoom);
        let origin = self.scene.frame.origin();
        let frame = *self.scene.frame;
        let width = self.px(GRID_LINE_WIDTH);
        let line_color = self.color(ColorRole::GridLine);
        let label_color = self.color(ColorRole::GridLabel);
        let font = self.px(GRID_LABEL_FONT);
        let pad = self.px(3.0);
        let anchor = self.label_anchor(origin);

        // Multiples of the step counted from the active origin
        let first_x = ((self.bounds.min.x - origin.x) / step).ceil() as i64;
        let last_x = ((self.bounds.max.x - origin.x) / step).floor() as i64;
        for k in first_x..=last_x {
            let x = origin.x + k as f32 * step;
            self.surface.line(
                egui::pos2(x, self.bounds.min.y),
                egui::pos2(x, self.bounds.max.y),
                width,
                line_color,
            );
            if k != 0 {
                let value = frame.world_to_user_exact(egui::pos2(x, origin.y)).x.round();
                self.surface.text(
                    egui::pos2(x + pad, anchor.y + pad),
                    egui::Align2::LEFT_TOP,
                    &format!("{value}"),
                    font,
                    label_color,
                );
            }
        }

        let first_y = ((self.bounds.min.y - origin.y) / step).ceil() as i64;
        let last_y = ((self.bounds.max.y - origin.y) / step).floor() as i64;
        for k in first_y..=last_y {
            let y = origin.y + k as f32 * step;
            self.surface.line(
                egui::pos2(self.bounds.min.x, y),
                egui::pos2(self.bounds.max.x, y),
                width,
                line_color,
            );
            if k != 0 {
                // Math mode shows the flipped value
                let value = frame.world_to_user_exact(egui::pos2(origin.x, y)).y.round();
                self.surface.text(
                    egui::pos2(anchor.x + pad, y + pad),
                    egui::Align2::LEFT_TOP,
                    &format!("{value}"),
                    font,
                    label_color,
                );
            }
        }
    }

    fn draw_axes(&mut self) {
        let origin = self.scene.frame.origin();
        let width = self.px(AXIS_WIDTH);
        let arrow = self.px(ARROW_SIZE);
        let inset = self.px(2.0);
        let b = self.bounds;
        let font = self.px(GRID_LABEL_FONT);
        let name_font = self.px(GRID_LABEL_FONT + 2.0);

        if (b.min.y..=b.max.y).contains(&origin.y) {
            let color = self.color(ColorRole::AxisX);
            let tip = egui::pos2(b.max.x - inset, origin.y);
            self.surface
                .line(egui::pos2(b.min.x, origin.y), tip, width, color);
            self.surface.polygon(
                &[
                    tip,
                    egui::pos2(tip.x - arrow, tip.y - arrow * 0.5),
                    egui::pos2(tip.x - arrow, tip.y + arrow * 0.5),
                ],
                color,
            );
            self.surface.text(
                egui::pos2(tip.x - arrow, tip.y - arrow * 0.6),
                egui::Align2::RIGHT_BOTTOM,
                "x",
                name_font,
                color,
            );
        }

        if (b.min.x..=b.max.x).contains(&origin.x) {
            let color = self.color(ColorRole::AxisY);
            // Points toward increasing user Y
            let (tip, back) = if self.scene.frame.y_up() {
                let tip = egui::pos2(origin.x, b.min.y + inset);
                (tip, tip.y + arrow)
            } else {
                let tip = egui::pos2(origin.x, b.max.y - inset);
                (tip, tip.y - arrow)
            };
            let tail = if self.scene.frame.y_up() { b.max.y } else { b.min.y };
            self.surface
                .line(egui::pos2(origin.x, tail), tip, width, color);
            self.surface.polygon(
                &[
                    tip,
                    egui::pos2(tip.x + arrow * 0.5, back),
                    egui::pos2(tip.x - arrow * 0.5, back),
                ],
                color,
            );
            self.surface.text(
                egui::pos2(tip.x + arrow * 0.6, back),
                egui::Align2::LEFT_CENTER,
                "y",
                name_font,
                color,
            );
        }

        if b.contains(origin) {
            let color = self.color(ColorRole::Origin);
            let dot = self.px(ORIGIN_DOT_RADIUS);
            let pad = self.px(4.0);
            self.surface.circle(origin, dot, color, egui::Stroke::NONE);
            self.surface.text(
                origin + egui::vec2(pad, pad),
                egui::Align2::LEFT_TOP,
                "(0,0)",
                font,
                color,
            );
        }
    }

    fn draw_edges(&mut self) {
        let graph = self.scene.graph;
        let width = self.px(EDGE_WIDTH);
        let stroke = self.color(ColorRole::EdgeStroke);
        let label = self.color(ColorRole::EdgeLabel);
        let font = self.px(EDGE_LABEL_FONT);
        let lift = self.px(4.0);

        for edge in graph.edges() {
            let (Some(a), Some(b)) = (graph.vertex(edge.v1), graph.vertex(edge.v2)) else {
                continue;
            };
            let (a, b) = (a.pos(), b.pos());
            self.surface.line(a, b, width, stroke);
            let mid = a + (b - a) * 0.5;
            self.surface.text(
                egui::pos2(mid.x, mid.y - lift),
                egui::Align2::CENTER_BOTTOM,
                &format!("E{}", edge.id),
                font,
                label,
            );
        }
    }

    fn draw_preview(&mut self) {
        let Some((from, to)) = self.scene.preview else {
            return;
        };
        self.surface.dashed_line(
            from,
            to,
            self.px(EDGE_WIDTH),
            self.px(PREVIEW_DASH),
            self.px(PREVIEW_GAP),
            self.color(ColorRole::Preview),
        );
    }

    fn draw_vertices(&mut self) {
        let scene = self.scene;
        let radius = self.px(VERTEX_RADIUS);
        let glow = self.px(VERTEX_RADIUS + GLOW_WIDTH);
        let outline = egui::Stroke::new(
            self.px(VERTEX_STROKE_WIDTH),
            self.color(ColorRole::VertexStroke),
        );
        let fill = self.color(ColorRole::VertexFill);
        let text = self.color(ColorRole::VertexLabel);
        let gap = self.px(VERTEX_RADIUS + 3.0);
        let id_font = self.px(VERTEX_ID_FONT);
        let coord_font = self.px(VERTEX_COORD_FONT);
        let pending_glow = self.color(ColorRole::PendingGlow);
        let selected_glow = self.color(ColorRole::SelectedGlow);

        for vertex in scene.graph.vertices() {
            let center = vertex.pos();
            if scene.pending == Some(vertex.id) {
                self.surface
                    .circle(center, glow, pending_glow, egui::Stroke::NONE);
            } else if scene.selected == Some(vertex.id) || scene.dragging == Some(vertex.id) {
                self.surface
                    .circle(center, glow, selected_glow, egui::Stroke::NONE);
            }
            self.surface.circle(center, radius, fill, outline);

            self.surface.text(
                egui::pos2(center.x, center.y - gap),
                egui::Align2::CENTER_BOTTOM,
                &format!("V{}", vertex.id),
                id_font,
                text,
            );
            self.surface.text(
                egui::pos2(center.x, center.y + gap),
                egui::Align2::CENTER_TOP,
                &scene.frame.world_to_user(center).to_string(),
                coord_font,
                text,
            );
        }
    }
}
