//! The editor: single owner of graph, view and interaction state.
//!
//! Every input handler and command mutates the [`Editor`] synchronously and leaves it
//! consistent before returning, so whatever is rendered afterwards reflects the complete
//! effect of the event that triggered it.
//!
//! # Module Organization
//!
//! - `events` - change notifications for list views
//! - `status` - status bar message and its auto-clear deadline
//! - `interaction` - pointer, wheel and keyboard handling

mod events;
mod interaction;
mod status;

pub use events::{ChangeEvent, ChangeNotifier};
pub use status::StatusLine;

use crate::coords::{CoordinateFrame, UserCoords};
use crate::error::{Feedback, GraphError};
use crate::graph::Graph;
use crate::types::{CoordSystem, Edge, EdgeId, EditMode, VertexId};
use crate::view::ViewTransform;
use eframe::egui;
use std::sync::mpsc::Receiver;

/// Edit mode together with the state that only exists in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Select and drag vertices
    Select,
    /// Click to insert vertices
    Vertex,
    /// Two-click edge creation
    Edge {
        /// First vertex of the edge being created
        pending: Option<VertexId>,
    },
}

impl Mode {
    fn from_edit_mode(mode: EditMode) -> Self {
        match mode {
            EditMode::Select => Mode::Select,
            EditMode::Vertex => Mode::Vertex,
            EditMode::Edge => Mode::Edge { pending: None },
        }
    }

    /// The toolbar-level mode.
    pub fn edit_mode(&self) -> EditMode {
        match self {
            Mode::Select => EditMode::Select,
            Mode::Vertex => EditMode::Vertex,
            Mode::Edge { .. } => EditMode::Edge,
        }
    }
}

/// The pointer gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No button held over the canvas
    Idle,
    /// A vertex follows the pointer
    Dragging {
        /// Vertex being moved
        vertex: VertexId,
        /// Offset from the pointer to the vertex center, in world units
        grab_offset: egui::Vec2,
        /// Whether the vertex has left its press position
        moved: bool,
    },
    /// The view follows the pointer (middle button)
    Panning {
        /// Screen position where the pan started
        start_screen: egui::Pos2,
        /// Pan offset when the pan started
        start_pan: egui::Vec2,
    },
}

/// A vertex as shown in list views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRow {
    /// Vertex identifier
    pub id: VertexId,
    /// Stored world position
    pub world: egui::Pos2,
    /// Coordinates in the active coordinate system
    pub user: UserCoords,
}

/// Owns all session state and exposes the command and query surface.
#[derive(Debug)]
pub struct Editor {
    graph: Graph,
    frame: CoordinateFrame,
    view: ViewTransform,
    /// Canvas size in screen pixels from the latest layout
    viewport: egui::Vec2,
    mode: Mode,
    selected: Option<VertexId>,
    gesture: Gesture,
    /// Last pointer position over the canvas, in world units
    pointer_world: Option<egui::Pos2>,
    status: StatusLine,
    notifier: ChangeNotifier,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(CoordSystem::default())
    }
}

impl Editor {
    /// Creates an empty editor displaying `system` coordinates.
    pub fn new(system: CoordSystem) -> Self {
        Self {
            graph: Graph::new(),
            frame: CoordinateFrame::new(system),
            view: ViewTransform::default(),
            viewport: egui::Vec2::ZERO,
            mode: Mode::Select,
            selected: None,
            gesture: Gesture::Idle,
            pointer_world: None,
            status: StatusLine::default(),
            notifier: ChangeNotifier::default(),
        }
    }

    /// Records the canvas size. The first non-empty size fixes the math origin.
    pub fn layout(&mut self, canvas_size: egui::Vec2) {
        self.viewport = canvas_size;
        if self.frame.on_layout(canvas_size) {
            log::info!("math origin fixed at {:?}", self.frame.math_origin());
        }
    }

    /// Advances the status clock to `now` seconds.
    pub fn tick(&mut self, now: f64) {
        self.status.tick(now);
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// The graph being edited.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Active coordinate frame.
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    /// Current view transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Canvas size from the latest layout.
    pub fn viewport(&self) -> egui::Vec2 {
        self.viewport
    }

    /// World rectangle currently on screen.
    pub fn visible_world_bounds(&self) -> egui::Rect {
        self.view.visible_world_bounds(self.viewport)
    }

    /// Current edit mode.
    pub fn mode(&self) -> EditMode {
        self.mode.edit_mode()
    }

    /// Displayed coordinate system.
    pub fn coord_system(&self) -> CoordSystem {
        self.frame.system()
    }

    /// Selected vertex, if any.
    pub fn selected(&self) -> Option<VertexId> {
        self.selected
    }

    /// Pending edge source, if any (edge mode only).
    pub fn pending(&self) -> Option<VertexId> {
        match self.mode {
            Mode::Edge { pending } => pending,
            _ => None,
        }
    }

    /// Gesture in progress.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Vertex being dragged, if any.
    pub fn dragging(&self) -> Option<VertexId> {
        match self.gesture {
            Gesture::Dragging { vertex, .. } => Some(vertex),
            _ => None,
        }
    }

    /// Last known pointer position in world units.
    pub fn pointer_world(&self) -> Option<egui::Pos2> {
        self.pointer_world
    }

    /// Zoom as a whole percentage.
    pub fn zoom_percent(&self) -> u32 {
        self.view.zoom_percent()
    }

    /// Status message currently on display.
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Coordinates the user sees for a vertex.
    pub fn user_coords(&self, id: VertexId) -> Option<UserCoords> {
        self.graph
            .vertex(id)
            .map(|v| self.frame.world_to_user(v.pos()))
    }

    /// Every vertex with its displayed coordinates, in insertion order.
    pub fn vertex_rows(&self) -> Vec<VertexRow> {
        self.graph
            .vertices()
            .map(|v| VertexRow {
                id: v.id,
                world: v.pos(),
                user: self.frame.world_to_user(v.pos()),
            })
            .collect()
    }

    /// Every edge, in insertion order.
    pub fn edge_rows(&self) -> Vec<Edge> {
        self.graph.edges().copied().collect()
    }

    /// Endpoints of the dashed pending-edge preview, when one should be drawn.
    pub fn preview_segment(&self) -> Option<(egui::Pos2, egui::Pos2)> {
        let source = self.graph.vertex(self.pending()?)?;
        Some((source.pos(), self.pointer_world?))
    }

    /// Switches the edit mode, dropping selection, any pending edge source and a drag in
    /// progress. A middle-button pan carries on.
    pub fn set_mode(&mut self, mode: EditMode) -> Feedback {
        if self.mode.edit_mode() == mode {
            return Feedback::ok(format!("{} mode", mode));
        }
        self.set_pending(None);
        self.set_selected(None);
        if let Gesture::Dragging { .. } = self.gesture {
            self.gesture = Gesture::Idle;
        }
        self.mode = Mode::from_edit_mode(mode);
        self.notifier.emit(ChangeEvent::ModeChanged(mode));
        self.report(Feedback::ok(format!("{} mode", mode)))
    }

    /// Switches the displayed coordinate system. Stored positions do not change.
    pub fn set_coord_system(&mut self, system: CoordSystem) -> Feedback {
        if self.frame.system() != system {
            self.frame.set_system(system);
            self.notifier.emit(ChangeEvent::CoordSystemChanged(system));
        }
        self.report(Feedback::ok(format!("Coordinates: {}", system)))
    }

    /// Inserts a vertex at a world position.
    pub fn add_vertex(&mut self, world_x: f32, world_y: f32) -> Feedback {
        if !world_x.is_finite() || !world_y.is_finite() {
            return self.report(GraphError::InvalidCoordinates.into());
        }
        let id = self.graph.add_vertex(world_x, world_y);
        self.notifier.emit(ChangeEvent::VertexAdded(id));
        let user = self.frame.world_to_user(egui::pos2(world_x, world_y));
        self.report(Feedback::ok(format!("Added V{id} at {user}")))
    }

    /// Inserts a vertex at coordinates typed in the active coordinate system.
    pub fn add_vertex_at_user(&mut self, user_x: f32, user_y: f32) -> Feedback {
        if !user_x.is_finite() || !user_y.is_finite() {
            return self.report(GraphError::InvalidCoordinates.into());
        }
        let world = self.frame.user_to_world(user_x, user_y);
        self.add_vertex(world.x, world.y)
    }

    /// Deletes a vertex and its edges, clearing any reference the interaction state held.
    pub fn delete_vertex(&mut self, id: VertexId) -> Feedback {
        let Some((_, dropped)) = self.graph.delete_vertex(id) else {
            return self.report(GraphError::UnknownVertex(id).into());
        };
        self.forget_vertex(id);
        for edge in &dropped {
            self.notifier.emit(ChangeEvent::EdgeRemoved(*edge));
        }
        self.notifier.emit(ChangeEvent::VertexRemoved(id));
        let message = match dropped.len() {
            0 => format!("Deleted V{id}"),
            1 => format!("Deleted V{id} and 1 edge"),
            n => format!("Deleted V{id} and {n} edges"),
        };
        self.report(Feedback::ok(message))
    }

    /// Deletes an edge.
    pub fn delete_edge(&mut self, id: EdgeId) -> Feedback {
        match self.graph.delete_edge(id) {
            Some(_) => {
                self.notifier.emit(ChangeEvent::EdgeRemoved(id));
                self.report(Feedback::ok(format!("Deleted E{id}")))
            }
            None => self.report(GraphError::UnknownEdge(id).into()),
        }
    }

    /// Selects a vertex and reports its displayed coordinates.
    pub fn select_vertex(&mut self, id: VertexId) -> Feedback {
        let Some(user) = self.user_coords(id) else {
            return self.report(GraphError::UnknownVertex(id).into());
        };
        self.set_selected(Some(id));
        self.report(Feedback::ok(format!("V{id} at {user}")))
    }

    /// Removes every vertex and edge and restarts id numbering.
    ///
    /// The coordinate origin and the view transform are kept.
    pub fn clear_all(&mut self) -> Feedback {
        self.graph.clear();
        self.set_pending(None);
        self.set_selected(None);
        self.gesture = Gesture::Idle;
        self.notifier.emit(ChangeEvent::Cleared);
        self.report(Feedback::ok("Cleared all vertices and edges"))
    }

    /// Restores 100% zoom and no pan.
    pub fn reset_view(&mut self) -> Feedback {
        self.view.reset();
        if let Gesture::Panning { .. } = self.gesture {
            self.gesture = Gesture::Idle;
        }
        self.report(Feedback::ok("View reset"))
    }

    /// Shows `feedback` in the status line and hands it back.
    fn report(&mut self, feedback: Feedback) -> Feedback {
        if feedback.success {
            log::debug!("{}", feedback.message);
        } else {
            log::info!("rejected: {}", feedback.message);
        }
        self.status.show(feedback.clone());
        feedback
    }

    fn set_selected(&mut self, selected: Option<VertexId>) {
        if self.selected != selected {
            self.selected = selected;
            self.notifier.emit(ChangeEvent::SelectionChanged(selected));
        }
    }

    fn set_pending(&mut self, source: Option<VertexId>) {
        if let Mode::Edge { pending } = &mut self.mode {
            if *pending != source {
                *pending = source;
                self.notifier.emit(ChangeEvent::PendingChanged(source));
            }
        }
    }

    /// Drops every interaction reference to a vertex that no longer exists.
    fn forget_vertex(&mut self, id: VertexId) {
        if self.selected == Some(id) {
            self.set_selected(None);
        }
        if self.pending() == Some(id) {
            self.set_pending(None);
        }
        if self.dragging() == Some(id) {
            self.gesture = Gesture::Idle;
        }
    }
}
