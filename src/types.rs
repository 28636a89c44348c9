//! Core data types shared across the graph canvas.
//!
//! This module defines the value types the rest of the crate passes around: vertex and
//! edge records, their identifiers, and the small enums describing the editor's mode,
//! the active coordinate convention and the color theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for vertices. Monotonic and never reused within a session.
pub type VertexId = u32;

/// Unique identifier for edges. Monotonic and never reused within a session.
pub type EdgeId = u32;

/// A graph vertex positioned in world pixels.
///
/// World pixels are independent of the coordinate system shown to the user, so switching
/// between CG and math conventions never touches this record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,
    /// Horizontal world position
    pub x: f32,
    /// Vertical world position (grows downward, like the screen)
    pub y: f32,
}

impl Vertex {
    /// World position as an egui point.
    pub fn pos(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

/// An undirected edge between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,
    /// First endpoint
    pub v1: VertexId,
    /// Second endpoint
    pub v2: VertexId,
}

impl Edge {
    /// Returns `true` if the edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.v1 == a && self.v2 == b) || (self.v1 == b && self.v2 == a)
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }
}

/// Editing mode selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Select and drag existing vertices
    #[default]
    Select,
    /// Every click inserts a vertex
    Vertex,
    /// Two clicks on vertices create an edge
    Edge,
}

impl EditMode {
    /// All modes in toolbar order.
    pub const ALL: [EditMode; 3] = [EditMode::Select, EditMode::Vertex, EditMode::Edge];

    /// Short label used by the toolbar and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Select => "Select",
            EditMode::Vertex => "Add vertex",
            EditMode::Edge => "Add edge",
        }
    }
}

/// Coordinate convention used for everything displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordSystem {
    /// Screen / computer-graphics convention: origin top-left, Y grows downward
    #[default]
    Cg,
    /// Cartesian convention: origin at the canvas center, Y grows upward
    Math,
}

impl CoordSystem {
    /// Returns the other convention.
    pub fn toggled(self) -> Self {
        match self {
            CoordSystem::Cg => CoordSystem::Math,
            CoordSystem::Math => CoordSystem::Cg,
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            CoordSystem::Cg => "CG (screen)",
            CoordSystem::Math => "Math (Cartesian)",
        }
    }
}

/// Color theme of the canvas and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Light background, dark ink
    #[default]
    Light,
    /// Dark background, light ink
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns `true` for the dark theme.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
