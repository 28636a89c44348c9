//! View transform state: zoom factor and pan offset.
//!
//! World pixels map to canvas-local screen pixels through `screen = world * zoom + pan`.
//! Zoom is always kept inside [`ZOOM_MIN`], [`ZOOM_MAX`].

use crate::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use eframe::egui;

/// Pan and zoom applied on top of world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Current zoom level (1.0 = normal, 2.0 = 2x zoom, 0.5 = 50% zoom)
    zoom: f32,
    /// Screen-space translation added after scaling
    pan: egui::Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Builds a transform, clamping `zoom` into the valid range.
    pub fn new(zoom: f32, pan: egui::Vec2) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            pan,
        }
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current pan offset in screen pixels.
    pub fn pan(&self) -> egui::Vec2 {
        self.pan
    }

    /// Zoom as a whole percentage, for the status bar.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Converts canvas-local screen coordinates to world coordinates.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels, relative to the canvas corner)
    ///
    /// # Returns
    ///
    /// The corresponding position in world space
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        ((screen_pos.to_vec2() - self.pan) / self.zoom).to_pos2()
    }

    /// Converts world coordinates to canvas-local screen coordinates.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        (world_pos.to_vec2() * self.zoom + self.pan).to_pos2()
    }

    /// The world-space rectangle covered by a viewport of `viewport_size` screen pixels.
    pub fn visible_world_bounds(&self, viewport_size: egui::Vec2) -> egui::Rect {
        let top_left = self.screen_to_world(egui::Pos2::ZERO);
        let bottom_right = self.screen_to_world(viewport_size.to_pos2());
        egui::Rect::from_two_pos(top_left, bottom_right)
    }

    /// Moves the pan offset so the canvas follows a drag that started at `start_screen`
    /// with the offset `start_pan`.
    pub fn pan_from(&mut self, start_pan: egui::Vec2, start_screen: egui::Pos2, current: egui::Pos2) {
        self.pan = start_pan + (current - start_screen);
    }

    /// Multiplies the zoom by `factor` while keeping the world point under `anchor` fixed
    /// on screen.
    ///
    /// Requests outside the valid range are clamped silently.
    ///
    /// # Returns
    ///
    /// `true` if the zoom actually changed
    pub fn zoom_about(&mut self, anchor: egui::Pos2, factor: f32) -> bool {
        let old_zoom = self.zoom;
        let new_zoom = clamp_zoom(old_zoom * factor);
        if (new_zoom - old_zoom).abs() <= f32::EPSILON * old_zoom {
            return false;
        }
        let ratio = new_zoom / old_zoom;
        let anchor = anchor.to_vec2();
        self.pan = anchor - (anchor - self.pan) * ratio;
        self.zoom = new_zoom;
        true
    }

    /// Applies one wheel notch at `anchor`: positive `direction` zooms in, negative zooms out.
    ///
    /// The magnitude of `direction` is ignored, every event is exactly one step.
    pub fn wheel(&mut self, anchor: egui::Pos2, direction: f32) -> bool {
        if direction > 0.0 {
            self.zoom_about(anchor, ZOOM_STEP)
        } else if direction < 0.0 {
            self.zoom_about(anchor, 1.0 / ZOOM_STEP)
        } else {
            false
        }
    }

    /// Back to 100% zoom with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        zoom.clamp(ZOOM_MIN, ZOOM_MAX)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: egui::Pos2, b: egui::Pos2) {
        assert!(
            (a - b).length() < 1e-2,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_screen_world_round_trip() {
        let view = ViewTransform::new(2.5, egui::vec2(40.0, -12.0));
        let world = egui::pos2(13.0, 77.0);
        assert_close(view.screen_to_world(view.world_to_screen(world)), world);
        // sx = wx * zoom + pan
        assert_close(view.world_to_screen(world), egui::pos2(72.5, 180.5));
    }

    #[test]
    fn test_zoom_never_leaves_bounds() {
        let mut view = ViewTransform::default();
        let cursor = egui::pos2(300.0, 200.0);
        for _ in 0..200 {
            view.wheel(cursor, 1000.0);
        }
        assert_eq!(view.zoom(), ZOOM_MAX);
        for _ in 0..400 {
            view.wheel(cursor, -0.001);
        }
        assert_eq!(view.zoom(), ZOOM_MIN);
        assert!(!view.zoom_about(cursor, 0.5));
        assert_eq!(ViewTransform::new(f32::NAN, egui::Vec2::ZERO).zoom(), 1.0);
    }

    #[test]
    fn test_wheel_keeps_world_point_under_cursor() {
        let mut view = ViewTransform::new(1.3, egui::vec2(25.0, 60.0));
        let cursor = egui::pos2(412.0, 233.0);
        for direction in [1.0, 1.0, -1.0, 1.0, -1.0, -1.0, -1.0] {
            let before = view.screen_to_world(cursor);
            view.wheel(cursor, direction);
            assert_close(view.world_to_screen(before), cursor);
        }
    }

    #[test]
    fn test_wheel_uses_fixed_step() {
        let mut view = ViewTransform::default();
        view.wheel(egui::Pos2::ZERO, 3.0);
        assert!((view.zoom() - ZOOM_STEP).abs() < 1e-6);
        view.wheel(egui::Pos2::ZERO, -120.0);
        assert!((view.zoom() - 1.0).abs() < 1e-6);
        assert!(!view.wheel(egui::Pos2::ZERO, 0.0));
    }

    #[test]
    fn test_pan_from_tracks_delta() {
        let mut view = ViewTransform::new(2.0, egui::vec2(10.0, 10.0));
        let start_pan = view.pan();
        view.pan_from(start_pan, egui::pos2(100.0, 100.0), egui::pos2(130.0, 90.0));
        assert_eq!(view.pan(), egui::vec2(40.0, 0.0));
        // zoom is untouched by panning
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn test_visible_bounds_follow_transform() {
        let view = ViewTransform::new(2.0, egui::vec2(100.0, 50.0));
        let bounds = view.visible_world_bounds(egui::vec2(800.0, 600.0));
        assert_close(bounds.min, egui::pos2(-50.0, -25.0));
        assert_close(bounds.max, egui::pos2(350.0, 275.0));
        assert_eq!(view.zoom_percent(), 200);
    }
}
