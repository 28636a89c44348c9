//! Canvas glue: feeds egui input into the editor and paints the scene.
//!
//! The editor works in canvas-local screen pixels, so every position coming from egui is
//! shifted by the canvas corner before it is handed over.

use super::state::GraphApp;
use crate::editor::Gesture;
use crate::render::{self, EguiSurface, Palette, RenderOptions, Scene};
use eframe::egui;

impl GraphApp {
    /// Draws the main canvas and handles all user interactions with it.
    ///
    /// Pointer presses, releases and moves are forwarded from the raw event stream so
    /// middle-button pans and vertex drags see every step. Clicks come from the canvas
    /// response, which already tells a click apart from a drag.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context for the canvas area
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        self.canvas_rect = rect;
        self.editor.layout(rect.size());

        let to_local = |p: egui::Pos2| (p - rect.min).to_pos2();
        let (events, hover) = ui.input(|i| (i.events.clone(), i.pointer.hover_pos()));
        let hover_inside = hover.filter(|p| rect.contains(*p));

        for event in &events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let gesturing = self.editor.gesture() != Gesture::Idle;
                    if rect.contains(*pos) || gesturing {
                        self.editor.pointer_move(to_local(*pos));
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if rect.contains(*pos) => {
                    self.editor.pointer_down(to_local(*pos), *button);
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: false,
                    ..
                } => {
                    self.editor.pointer_up(to_local(*pos), *button);
                }
                egui::Event::MouseWheel { delta, .. } => {
                    if let Some(pos) = hover_inside {
                        // egui reports wheel-up as positive, which zooms in
                        self.editor.wheel(to_local(pos), delta.y);
                    }
                }
                _ => {}
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.editor.click(to_local(pos));
            }
        }

        // Shortcuts only apply while no text field has keyboard focus
        if !ui.ctx().wants_keyboard_input() {
            for event in &events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    // Ctrl/Cmd combinations belong to the platform, not to the canvas
                    if modifiers.is_none() {
                        self.editor.key_pressed(*key);
                    }
                }
            }
        }

        if hover_inside.is_none() && self.pointer_inside {
            self.editor.pointer_left();
        }
        self.pointer_inside = hover_inside.is_some();

        if self.pointer_inside || self.editor.gesture() != Gesture::Idle {
            let cursor = self.editor.cursor(hover_inside.map(to_local));
            ui.ctx().set_cursor_icon(cursor);
        }

        let palette = Palette::for_theme(self.settings.theme);
        let mut surface = EguiSurface::new(&painter, rect, *self.editor.view());
        render::render(
            &mut surface,
            &Scene::of(&self.editor),
            &palette,
            RenderOptions {
                show_grid: self.settings.show_grid,
            },
        );
    }
}
