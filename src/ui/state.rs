//! Application state management structures.
//!
//! Only user preferences are persisted between sessions. The graph, the view transform and
//! all interaction state live in the [`Editor`] and start fresh on every launch.

use crate::editor::{ChangeEvent, Editor, VertexRow};
use crate::types::*;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

/// User preferences stored through eframe's persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Light or dark visuals
    pub theme: Theme,
    /// Coordinate convention shown in labels and lists
    pub coord_system: CoordSystem,
    /// Whether the grid should be displayed on the canvas
    pub show_grid: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            coord_system: CoordSystem::default(),
            show_grid: true,
        }
    }
}

impl Settings {
    /// Serializes the settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string produced by [`Settings::to_json`]
    ///
    /// # Returns
    ///
    /// The settings, or an error if deserialization fails. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Inputs of the "add vertex at coordinates" form.
#[derive(Debug, Default)]
pub struct CoordinateForm {
    /// Text typed into the X field
    pub x: String,
    /// Text typed into the Y field
    pub y: String,
}

impl CoordinateForm {
    /// Parses both fields, accepting surrounding whitespace.
    ///
    /// Unparsable text yields NaN so the editor rejects it with its own message.
    pub fn values(&self) -> (f32, f32) {
        let parse = |s: &str| s.trim().parse::<f32>().unwrap_or(f32::NAN);
        (parse(&self.x), parse(&self.y))
    }
}

/// Rows shown in the sidebar, rebuilt only when the editor reports a change.
#[derive(Debug, Default)]
pub struct SidebarCache {
    /// Vertex rows with their displayed coordinates
    pub vertices: Vec<VertexRow>,
    /// Edge rows
    pub edges: Vec<Edge>,
}

/// Main application state.
///
/// Owns the editor plus the glue state needed to present it with egui.
pub struct GraphApp {
    /// Persisted preferences
    pub settings: Settings,
    /// Graph, view and interaction state
    pub editor: Editor,
    /// Change notifications from the editor
    pub(crate) events: Receiver<ChangeEvent>,
    /// Cached sidebar rows
    pub sidebar: SidebarCache,
    /// Whether the cache has to be rebuilt before the next sidebar draw
    pub(crate) sidebar_dirty: bool,
    /// Add-vertex-at-coordinates form
    pub form: CoordinateForm,
    /// Screen rectangle the canvas occupied in the last frame
    pub canvas_rect: egui::Rect,
    /// Whether the pointer was over the canvas in the last frame
    pub(crate) pointer_inside: bool,
}

impl Default for GraphApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl GraphApp {
    /// Creates the app with restored preferences and an empty graph.
    pub fn with_settings(settings: Settings) -> Self {
        let mut editor = Editor::new(settings.coord_system);
        let events = editor.subscribe();
        Self {
            settings,
            editor,
            events,
            sidebar: SidebarCache::default(),
            sidebar_dirty: true,
            form: CoordinateForm::default(),
            canvas_rect: egui::Rect::NOTHING,
            pointer_inside: false,
        }
    }

    /// Builds the app from eframe's creation context, restoring settings from storage.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| storage.get_string("app_state"))
            .and_then(|json| match Settings::from_json(&json) {
                Ok(settings) => Some(settings),
                Err(err) => {
                    log::warn!("ignoring stored settings: {err}");
                    None
                }
            })
            .unwrap_or_default();
        log::info!("starting with {:?}", settings);
        Self::with_settings(settings)
    }

    /// Drains pending change events and rebuilds the sidebar rows if any affect them.
    pub fn refresh_sidebar(&mut self) {
        for event in self.events.try_iter() {
            if event.affects_lists() {
                self.sidebar_dirty = true;
            }
        }
        if self.sidebar_dirty {
            self.sidebar.vertices = self.editor.vertex_rows();
            self.sidebar.edges = self.editor.edge_rows();
            self.sidebar_dirty = false;
        }
    }
}
