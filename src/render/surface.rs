//! The drawing surface the renderer paints on.
//!
//! Every coordinate and size handed to a [`Surface`] is in world units. Implementations
//! apply the composed pan+zoom transform, which is why the renderer divides nominal
//! screen-pixel sizes by the zoom before drawing.

use crate::view::ViewTransform;
use eframe::egui;

/// Primitive drawing operations in world units.
pub trait Surface {
    /// Floods the whole surface with `color`.
    fn fill(&mut self, color: egui::Color32);

    /// Straight line of `width` world units.
    fn line(&mut self, from: egui::Pos2, to: egui::Pos2, width: f32, color: egui::Color32);

    /// Dashed line; `dash` and `gap` are world lengths.
    fn dashed_line(
        &mut self,
        from: egui::Pos2,
        to: egui::Pos2,
        width: f32,
        dash: f32,
        gap: f32,
        color: egui::Color32,
    );

    /// Filled circle with an optional outline (`egui::Stroke::NONE` for none).
    fn circle(&mut self, center: egui::Pos2, radius: f32, fill: egui::Color32, stroke: egui::Stroke);

    /// Filled convex polygon.
    fn polygon(&mut self, points: &[egui::Pos2], fill: egui::Color32);

    /// Single line of text anchored at `pos`, `size` is the font height in world units.
    fn text(
        &mut self,
        pos: egui::Pos2,
        anchor: egui::Align2,
        text: &str,
        size: f32,
        color: egui::Color32,
    );
}

/// A [`Surface`] backed by an egui painter clipped to the canvas rect.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    /// Screen rectangle of the canvas inside the window
    canvas_rect: egui::Rect,
    view: ViewTransform,
}

impl<'a> EguiSurface<'a> {
    /// Wraps `painter`, drawing through `view` relative to the corner of `canvas_rect`.
    pub fn new(painter: &'a egui::Painter, canvas_rect: egui::Rect, view: ViewTransform) -> Self {
        Self {
            painter,
            canvas_rect,
            view,
        }
    }

    fn to_screen(&self, world: egui::Pos2) -> egui::Pos2 {
        self.canvas_rect.min + self.view.world_to_screen(world).to_vec2()
    }

    fn scaled(&self, world_len: f32) -> f32 {
        world_len * self.view.zoom()
    }
}

impl Surface for EguiSurface<'_> {
    fn fill(&mut self, color: egui::Color32) {
        self.painter.rect_filled(self.canvas_rect, 0.0, color);
    }

    fn line(&mut self, from: egui::Pos2, to: egui::Pos2, width: f32, color: egui::Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(self.scaled(width), color),
        );
    }

    fn dashed_line(
        &mut self,
        from: egui::Pos2,
        to: egui::Pos2,
        width: f32,
        dash: f32,
        gap: f32,
        color: egui::Color32,
    ) {
        let shapes = egui::Shape::dashed_line(
            &[self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(self.scaled(width), color),
            self.scaled(dash),
            self.scaled(gap),
        );
        self.painter.extend(shapes);
    }

    fn circle(&mut self, center: egui::Pos2, radius: f32, fill: egui::Color32, stroke: egui::Stroke) {
        let stroke = egui::Stroke::new(self.scaled(stroke.width), stroke.color);
        self.painter
            .circle(self.to_screen(center), self.scaled(radius), fill, stroke);
    }

    fn polygon(&mut self, points: &[egui::Pos2], fill: egui::Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
    }

    fn text(
        &mut self,
        pos: egui::Pos2,
        anchor: egui::Align2,
        text: &str,
        size: f32,
        color: egui::Color32,
    ) {
        self.painter.text(
            self.to_screen(pos),
            anchor,
            text,
            egui::FontId::proportional(self.scaled(size)),
            color,
        );
    }
}
