//! Theme palettes keyed by semantic color role.

use crate::types::Theme;
use eframe::egui::Color32;

/// What a color is used for on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Canvas flood fill
    Background,
    /// Grid lines
    GridLine,
    /// Axis-value labels along the grid
    GridLabel,
    /// X axis line and arrow
    AxisX,
    /// Y axis line and arrow
    AxisY,
    /// Origin marker and its label
    Origin,
    /// Edge lines
    EdgeStroke,
    /// Edge id labels
    EdgeLabel,
    /// Vertex circle fill
    VertexFill,
    /// Vertex circle outline
    VertexStroke,
    /// Vertex id and coordinate labels
    VertexLabel,
    /// Glow ring of the selected vertex
    SelectedGlow,
    /// Glow ring of the pending edge source
    PendingGlow,
    /// Dashed pending-edge preview
    Preview,
}

/// Color lookup the renderer queries each frame.
pub trait ThemeColors {
    /// The color for `role`.
    fn color(&self, role: ColorRole) -> Color32;
}

/// A fixed set of colors for every [`ColorRole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    background: Color32,
    grid_line: Color32,
    grid_label: Color32,
    axis_x: Color32,
    axis_y: Color32,
    origin: Color32,
    edge_stroke: Color32,
    edge_label: Color32,
    vertex_fill: Color32,
    vertex_stroke: Color32,
    vertex_label: Color32,
    selected_glow: Color32,
    pending_glow: Color32,
    preview: Color32,
}

impl Palette {
    /// Palette for light backgrounds.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 252),
            grid_line: Color32::from_rgb(226, 229, 236),
            grid_label: Color32::from_rgb(120, 126, 140),
            axis_x: Color32::from_rgb(200, 60, 60),
            axis_y: Color32::from_rgb(50, 140, 70),
            origin: Color32::from_rgb(40, 40, 48),
            edge_stroke: Color32::from_rgb(90, 96, 110),
            edge_label: Color32::from_rgb(70, 76, 90),
            vertex_fill: Color32::from_rgb(66, 133, 244),
            vertex_stroke: Color32::from_rgb(25, 70, 160),
            vertex_label: Color32::from_rgb(30, 32, 40),
            selected_glow: Color32::from_rgba_unmultiplied(255, 190, 0, 150),
            pending_glow: Color32::from_rgba_unmultiplied(0, 200, 120, 150),
            preview: Color32::from_rgb(0, 160, 100),
        }
    }

    /// Palette for dark backgrounds.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 32),
            grid_line: Color32::from_rgb(44, 48, 58),
            grid_label: Color32::from_rgb(140, 146, 160),
            axis_x: Color32::from_rgb(240, 100, 100),
            axis_y: Color32::from_rgb(100, 210, 120),
            origin: Color32::from_rgb(230, 230, 236),
            edge_stroke: Color32::from_rgb(170, 176, 190),
            edge_label: Color32::from_rgb(190, 196, 210),
            vertex_fill: Color32::from_rgb(100, 160, 255),
            vertex_stroke: Color32::from_rgb(200, 220, 255),
            vertex_label: Color32::from_rgb(235, 236, 240),
            selected_glow: Color32::from_rgba_unmultiplied(255, 200, 40, 140),
            pending_glow: Color32::from_rgba_unmultiplied(40, 230, 150, 140),
            preview: Color32::from_rgb(60, 220, 150),
        }
    }

    /// The palette matching a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

impl ThemeColors for Palette {
    fn color(&self, role: ColorRole) -> Color32 {
        match role {
            ColorRole::Background => self.background,
            ColorRole::GridLine => self.grid_line,
            ColorRole::GridLabel => self.grid_label,
            ColorRole::AxisX => self.axis_x,
            ColorRole::AxisY => self.axis_y,
            ColorRole::Origin => self.origin,
            ColorRole::EdgeStroke => self.edge_stroke,
            ColorRole::EdgeLabel => self.edge_label,
            ColorRole::VertexFill => self.vertex_fill,
            ColorRole::VertexStroke => self.vertex_stroke,
            ColorRole::VertexLabel => self.vertex_label,
            ColorRole::SelectedGlow => self.selected_glow,
            ColorRole::PendingGlow => self.pending_glow,
            ColorRole::Preview => self.preview,
        }
    }
}
