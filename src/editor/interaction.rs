//! Pointer, wheel and keyboard handling.
//!
//! All positions passed in are canvas-local screen pixels. Handlers convert them to world
//! units through the current view transform before touching the graph.

use super::{Editor, Gesture, Mode};
use crate::error::{Feedback, GraphError};
use crate::hit_test::vertex_at;
use crate::types::{EditMode, VertexId};
use eframe::egui;

impl Editor {
    /// The vertex under a screen position, using the zoom-invariant hit radius.
    pub fn vertex_at_screen(&self, screen_pos: egui::Pos2) -> Option<VertexId> {
        let world = self.view.screen_to_world(screen_pos);
        vertex_at(&self.graph, world, self.view.zoom())
    }

    /// A pointer button went down over the canvas.
    ///
    /// The middle button starts a pan in every mode. The primary button starts a vertex
    /// drag in select mode when it lands on a vertex. Nothing else happens on press;
    /// clicks are handled by [`Self::click`].
    pub fn pointer_down(&mut self, screen_pos: egui::Pos2, button: egui::PointerButton) {
        self.pointer_world = Some(self.view.screen_to_world(screen_pos));
        if self.gesture != Gesture::Idle {
            return;
        }
        match button {
            egui::PointerButton::Middle => {
                self.gesture = Gesture::Panning {
                    start_screen: screen_pos,
                    start_pan: self.view.pan(),
                };
            }
            egui::PointerButton::Primary if self.mode == Mode::Select => {
                let world = self.view.screen_to_world(screen_pos);
                if let Some(id) = vertex_at(&self.graph, world, self.view.zoom()) {
                    if let Some(vertex) = self.graph.vertex(id) {
                        self.gesture = Gesture::Dragging {
                            vertex: id,
                            grab_offset: vertex.pos() - world,
                            moved: false,
                        };
                    }
                }
            }
            _ => {}
        }
    }

    /// The pointer moved over the canvas.
    ///
    /// # Returns
    ///
    /// `true` if graph or view state changed and the canvas needs a redraw beyond the
    /// preview line.
    pub fn pointer_move(&mut self, screen_pos: egui::Pos2) -> bool {
        let changed = match self.gesture {
            Gesture::Panning {
                start_screen,
                start_pan,
            } => {
                self.view.pan_from(start_pan, start_screen, screen_pos);
                true
            }
            Gesture::Dragging {
                vertex,
                grab_offset,
                ..
            } => {
                let target = self.view.screen_to_world(screen_pos) + grab_offset;
                let moved = self.graph.move_vertex(vertex, target.x, target.y);
                if moved {
                    self.gesture = Gesture::Dragging {
                        vertex,
                        grab_offset,
                        moved: true,
                    };
                    self.notifier.emit(super::ChangeEvent::VertexMoved(vertex));
                } else {
                    self.gesture = Gesture::Idle;
                }
                moved
            }
            Gesture::Idle => false,
        };
        self.pointer_world = Some(self.view.screen_to_world(screen_pos));
        changed
    }

    /// A pointer button was released.
    pub fn pointer_up(&mut self, screen_pos: egui::Pos2, button: egui::PointerButton) {
        self.pointer_world = Some(self.view.screen_to_world(screen_pos));
        match (self.gesture, button) {
            (Gesture::Panning { .. }, egui::PointerButton::Middle) => {
                self.gesture = Gesture::Idle;
            }
            (Gesture::Dragging { vertex, moved, .. }, egui::PointerButton::Primary) => {
                self.gesture = Gesture::Idle;
                // a press and release in place is a click, reported by `click`
                if let Some(user) = self.user_coords(vertex).filter(|_| moved) {
                    self.report(Feedback::ok(format!("Moved V{vertex} to {user}")));
                }
            }
            _ => {}
        }
    }

    /// The pointer left the canvas. The preview line disappears; gestures continue.
    pub fn pointer_left(&mut self) {
        self.pointer_world = None;
    }

    /// A primary click (press and release without dragging) on the canvas.
    ///
    /// Ignored while a pan is in progress.
    pub fn click(&mut self, screen_pos: egui::Pos2) -> Option<Feedback> {
        if matches!(self.gesture, Gesture::Panning { .. }) {
            return None;
        }
        let world = self.view.screen_to_world(screen_pos);
        self.pointer_world = Some(world);
        let hit = vertex_at(&self.graph, world, self.view.zoom());
        let feedback = match self.mode {
            Mode::Select => match hit {
                Some(id) => self.select_vertex(id),
                None => {
                    self.set_selected(None);
                    return None;
                }
            },
            Mode::Vertex => self.add_vertex(world.x, world.y),
            Mode::Edge { pending } => self.edge_click(pending, hit),
        };
        Some(feedback)
    }

    /// Two-click edge protocol.
    fn edge_click(&mut self, pending: Option<VertexId>, hit: Option<VertexId>) -> Feedback {
        let Some(target) = hit else {
            return self.report(GraphError::NoVertexHere.into());
        };
        match pending {
            None => {
                self.set_pending(Some(target));
                self.report(Feedback::ok(format!(
                    "Edge from V{target}: click another vertex"
                )))
            }
            Some(source) if source == target => {
                self.set_pending(None);
                self.report(Feedback::ok("Edge creation cancelled"))
            }
            Some(source) => {
                // pending is cleared whether or not the edge is created
                self.set_pending(None);
                match self.graph.add_edge(source, target) {
                    Ok(id) => {
                        self.notifier.emit(super::ChangeEvent::EdgeAdded(id));
                        self.report(Feedback::ok(format!(
                            "Created E{id}: V{source} - V{target}"
                        )))
                    }
                    Err(err) => self.report(err.into()),
                }
            }
        }
    }

    /// A wheel event at `screen_pos`; only the sign of `delta_y` matters.
    ///
    /// A pan in progress is re-based on the zoomed view so the next move continues from
    /// here instead of undoing the zoom's pan correction.
    pub fn wheel(&mut self, screen_pos: egui::Pos2, delta_y: f32) -> bool {
        let changed = self.view.wheel(screen_pos, delta_y);
        if changed {
            self.pointer_world = Some(self.view.screen_to_world(screen_pos));
            if let Gesture::Panning { .. } = self.gesture {
                self.gesture = Gesture::Panning {
                    start_screen: screen_pos,
                    start_pan: self.view.pan(),
                };
            }
        }
        changed
    }

    /// Keyboard shortcut handling.
    ///
    /// # Returns
    ///
    /// `true` if the key was consumed.
    pub fn key_pressed(&mut self, key: egui::Key) -> bool {
        match key {
            egui::Key::Escape => {
                let had_state = self.pending().is_some() || self.selected.is_some();
                self.set_pending(None);
                self.set_selected(None);
                if had_state {
                    self.report(Feedback::ok("Cancelled"));
                }
            }
            egui::Key::Delete | egui::Key::Backspace => match self.selected {
                Some(id) => {
                    self.delete_vertex(id);
                }
                None => return false,
            },
            egui::Key::S => {
                self.set_mode(EditMode::Select);
            }
            egui::Key::V => {
                self.set_mode(EditMode::Vertex);
            }
            egui::Key::E => {
                self.set_mode(EditMode::Edge);
            }
            egui::Key::Num0 => {
                self.reset_view();
            }
            _ => return false,
        }
        true
    }

    /// Cursor to show for the current gesture, mode and hover target.
    pub fn cursor(&self, hover_screen: Option<egui::Pos2>) -> egui::CursorIcon {
        match self.gesture {
            Gesture::Dragging { .. } => return egui::CursorIcon::Grabbing,
            Gesture::Panning { .. } => return egui::CursorIcon::Move,
            Gesture::Idle => {}
        }
        let over_vertex = hover_screen
            .and_then(|p| self.vertex_at_screen(p))
            .is_some();
        match (self.mode, over_vertex) {
            (Mode::Select, true) => egui::CursorIcon::Grab,
            (Mode::Vertex, _) => egui::CursorIcon::Crosshair,
            (Mode::Edge { .. }, true) => egui::CursorIcon::PointingHand,
            _ => egui::CursorIcon::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ChangeEvent;
    use super::*;
    use crate::view::ViewTransform;

    fn editor() -> Editor {
        let mut editor = Editor::default();
        editor.layout(egui::vec2(800.0, 600.0));
        editor.tick(0.0);
        editor
    }

    fn status_text(editor: &Editor) -> String {
        editor
            .status()
            .current()
            .map(|f| f.message.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_vertex_mode_click_inserts_at_world_point() {
        let mut editor = editor();
        editor.view = ViewTransform::new(2.0, egui::vec2(100.0, 0.0));
        editor.set_mode(EditMode::Vertex);
        let fb = editor.click(egui::pos2(300.0, 80.0)).expect("feedback");
        assert!(fb.success);
        assert_eq!(editor.graph().vertex(1).map(|v| v.pos()), Some(egui::pos2(100.0, 40.0)));
        // clicking on an existing vertex still inserts
        editor.click(egui::pos2(300.0, 80.0));
        assert_eq!(editor.graph().vertex_count(), 2);
    }

    #[test]
    fn test_edge_mode_self_click_cancels() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.set_mode(EditMode::Edge);
        editor.click(egui::pos2(100.0, 100.0));
        assert_eq!(editor.pending(), Some(1));
        let fb = editor.click(egui::pos2(102.0, 99.0)).expect("feedback");
        assert_eq!(fb.message, "Edge creation cancelled");
        assert_eq!(editor.pending(), None);
        assert_eq!(editor.graph().edge_count(), 0);
    }

    #[test]
    fn test_edge_mode_duplicate_rejected_and_pending_cleared() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.add_vertex(300.0, 100.0);
        editor.set_mode(EditMode::Edge);
        let v1 = egui::pos2(100.0, 100.0);
        let v2 = egui::pos2(300.0, 100.0);

        editor.click(v1);
        let created = editor.click(v2).expect("feedback");
        assert!(created.success);
        assert_eq!(editor.pending(), None);

        editor.click(v1);
        let dup = editor.click(v2).expect("feedback");
        assert!(!dup.success);
        assert_eq!(dup.message, GraphError::DuplicateEdge(1, 2).to_string());
        assert_eq!(editor.pending(), None);
        assert_eq!(editor.graph().edge_count(), 1);

        // reverse order is the same unordered pair
        editor.click(v2);
        assert!(!editor.click(v1).expect("feedback").success);
        assert_eq!(editor.graph().edge_count(), 1);
    }

    #[test]
    fn test_edge_mode_empty_click_changes_nothing() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.set_mode(EditMode::Edge);
        editor.click(egui::pos2(100.0, 100.0));
        let fb = editor.click(egui::pos2(500.0, 500.0)).expect("feedback");
        assert_eq!(fb.message, "Click an existing vertex.");
        assert_eq!(editor.pending(), Some(1));
        assert_eq!(status_text(&editor), "Click an existing vertex.");
    }

    #[test]
    fn test_preview_follows_pointer_only_with_pending_source() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.set_mode(EditMode::Edge);
        editor.pointer_move(egui::pos2(200.0, 200.0));
        assert_eq!(editor.preview_segment(), None);
        editor.click(egui::pos2(100.0, 100.0));
        editor.pointer_move(egui::pos2(250.0, 180.0));
        assert_eq!(
            editor.preview_segment(),
            Some((egui::pos2(100.0, 100.0), egui::pos2(250.0, 180.0)))
        );
        editor.pointer_left();
        assert_eq!(editor.preview_segment(), None);
        assert_eq!(editor.pending(), Some(1));
    }

    #[test]
    fn test_select_mode_drag_moves_vertex() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        let events = editor.subscribe();
        editor.pointer_down(egui::pos2(104.0, 100.0), egui::PointerButton::Primary);
        assert_eq!(editor.dragging(), Some(1));
        assert_eq!(editor.cursor(None), egui::CursorIcon::Grabbing);
        assert!(editor.pointer_move(egui::pos2(204.0, 150.0)));
        assert_eq!(editor.graph().vertex(1).map(|v| v.pos()), Some(egui::pos2(200.0, 150.0)));
        editor.pointer_up(egui::pos2(204.0, 150.0), egui::PointerButton::Primary);
        assert_eq!(editor.dragging(), None);
        assert_eq!(status_text(&editor), "Moved V1 to (200, 150)");
        assert_eq!(events.try_recv(), Ok(ChangeEvent::VertexMoved(1)));
    }

    #[test]
    fn test_select_mode_click_selects_and_empty_click_clears() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        let fb = editor.click(egui::pos2(100.0, 100.0)).expect("feedback");
        assert_eq!(fb.message, "V1 at (100, 100)");
        assert_eq!(editor.selected(), Some(1));
        assert!(editor.click(egui::pos2(600.0, 400.0)).is_none());
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_drag_does_not_start_outside_select_mode() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.set_mode(EditMode::Edge);
        editor.pointer_down(egui::pos2(100.0, 100.0), egui::PointerButton::Primary);
        assert_eq!(editor.dragging(), None);
        assert!(!editor.pointer_move(egui::pos2(150.0, 150.0)));
        assert_eq!(editor.graph().vertex(1).map(|v| v.pos()), Some(egui::pos2(100.0, 100.0)));
    }

    #[test]
    fn test_middle_drag_pans_and_suppresses_clicks() {
        let mut editor = editor();
        editor.set_mode(EditMode::Vertex);
        editor.pointer_down(egui::pos2(10.0, 10.0), egui::PointerButton::Middle);
        editor.pointer_move(egui::pos2(60.0, 30.0));
        assert_eq!(editor.view().pan(), egui::vec2(50.0, 20.0));
        assert!(editor.click(egui::pos2(60.0, 30.0)).is_none());
        assert_eq!(editor.graph().vertex_count(), 0);
        editor.pointer_up(egui::pos2(60.0, 30.0), egui::PointerButton::Middle);
        assert_eq!(editor.gesture(), Gesture::Idle);
        // panning never touches zoom
        assert_eq!(editor.zoom_percent(), 100);
    }

    #[test]
    fn test_wheel_zoom_anchored_and_clamped() {
        let mut editor = editor();
        let cursor = egui::pos2(321.0, 123.0);
        let before = editor.view().screen_to_world(cursor);
        for _ in 0..100 {
            editor.wheel(cursor, 1.0);
        }
        let after = editor.view().world_to_screen(before);
        assert!((after - cursor).length() < 0.05);
        assert_eq!(editor.zoom_percent(), 3000);
    }

    #[test]
    fn test_wheel_during_pan_keeps_anchor() {
        let mut editor = editor();
        editor.pointer_down(egui::pos2(100.0, 100.0), egui::PointerButton::Middle);
        editor.pointer_move(egui::pos2(150.0, 150.0));
        let cursor = egui::pos2(150.0, 150.0);
        let anchored = editor.view().screen_to_world(cursor);

        assert!(editor.wheel(cursor, 1.0));
        // the pointer has not moved, so the view must not either
        editor.pointer_move(cursor);
        let after = editor.view().world_to_screen(anchored);
        assert!((after - cursor).length() < 1e-3, "anchor drifted to {after:?}");

        // later moves pan from the zoomed view
        editor.pointer_move(egui::pos2(170.0, 140.0));
        let moved = editor.view().world_to_screen(anchored);
        assert!((moved - egui::pos2(170.0, 140.0)).length() < 1e-3);
        assert!(matches!(editor.gesture(), Gesture::Panning { .. }));
    }

    #[test]
    fn test_mode_switch_ends_drag() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        editor.pointer_down(egui::pos2(100.0, 100.0), egui::PointerButton::Primary);
        assert_eq!(editor.dragging(), Some(1));

        assert!(editor.key_pressed(egui::Key::E));
        assert_eq!(editor.mode(), EditMode::Edge);
        assert_eq!(editor.dragging(), None);
        assert!(!editor.pointer_move(egui::pos2(300.0, 300.0)));
        assert_eq!(editor.graph().vertex(1).map(|v| v.pos()), Some(egui::pos2(100.0, 100.0)));
    }

    #[test]
    fn test_mode_switch_keeps_pan() {
        let mut editor = editor();
        editor.pointer_down(egui::pos2(10.0, 10.0), egui::PointerButton::Middle);
        editor.set_mode(EditMode::Vertex);
        assert!(editor.pointer_move(egui::pos2(40.0, 10.0)));
        assert_eq!(editor.view().pan(), egui::vec2(30.0, 0.0));
    }

    #[test]
    fn test_hit_radius_scales_with_zoom_through_screen_clicks() {
        let mut editor = editor();
        editor.add_vertex(0.0, 0.0);
        for zoom in [0.1_f32, 1.0, 10.0] {
            editor.view = ViewTransform::new(zoom, egui::vec2(400.0, 300.0));
            let center = egui::pos2(400.0, 300.0);
            assert_eq!(editor.vertex_at_screen(center + egui::vec2(15.5, 0.0)), Some(1));
            assert_eq!(editor.vertex_at_screen(center + egui::vec2(16.5, 0.0)), None);
        }
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        assert!(editor.key_pressed(egui::Key::E));
        assert_eq!(editor.mode(), EditMode::Edge);
        editor.click(egui::pos2(100.0, 100.0));
        assert!(editor.key_pressed(egui::Key::Escape));
        assert_eq!(editor.pending(), None);

        editor.key_pressed(egui::Key::S);
        editor.click(egui::pos2(100.0, 100.0));
        assert!(editor.key_pressed(egui::Key::Delete));
        assert_eq!(editor.graph().vertex_count(), 0);
        assert!(!editor.key_pressed(egui::Key::Delete));
        assert!(!editor.key_pressed(egui::Key::Q));
    }

    #[test]
    fn test_cursor_reflects_mode_and_hover() {
        let mut editor = editor();
        editor.add_vertex(100.0, 100.0);
        let on = Some(egui::pos2(100.0, 100.0));
        let off = Some(egui::pos2(500.0, 500.0));
        assert_eq!(editor.cursor(on), egui::CursorIcon::Grab);
        assert_eq!(editor.cursor(off), egui::CursorIcon::Default);
        editor.set_mode(EditMode::Vertex);
        assert_eq!(editor.cursor(on), egui::CursorIcon::Crosshair);
        editor.set_mode(EditMode::Edge);
        assert_eq!(editor.cursor(on), egui::CursorIcon::PointingHand);
        editor.pointer_down(egui::pos2(5.0, 5.0), egui::PointerButton::Middle);
        assert_eq!(editor.cursor(on), egui::CursorIcon::Move);
    }
}
