//! User interface for the graph editor.
//!
//! This module contains the eframe application: toolbar, vertex and edge lists, status
//! bar and the canvas glue that feeds egui input into the [`crate::editor::Editor`].
//!
//! # Module Organization
//!
//! - `state` - Persisted settings and the main GraphApp
//! - `canvas` - Pointer, wheel and keyboard forwarding plus painting

mod canvas;
mod state;

pub use state::{CoordinateForm, GraphApp, Settings};

use crate::types::*;
use eframe::egui;

/// Something the user asked for in the side panel, applied after the lists are drawn.
enum PanelAction {
    Select(VertexId),
    DeleteVertex(VertexId),
    DeleteEdge(EdgeId),
}

impl eframe::App for GraphApp {
    /// Persist user preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.settings.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                log::error!("Failed to serialize settings: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar, the status bar, the graph panel and the canvas, and keeps
    /// the status message clock running.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.settings.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.editor.tick(ctx.input(|i| i.time));
        if let Some(remaining) = self.editor.status().remaining() {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
        }

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.draw_status_bar(ui);
        });

        egui::SidePanel::right("graph_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.draw_graph_panel(ui);
            });

        // Canvas takes remaining space
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl GraphApp {
    /// Mode buttons, coordinate system and theme toggles, view and graph commands.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let current = self.editor.mode();
            for (mode, key) in EditMode::ALL.into_iter().zip(["S", "V", "E"]) {
                if ui
                    .selectable_label(current == mode, mode.label())
                    .on_hover_text(format!("Shortcut: {key}"))
                    .clicked()
                {
                    self.editor.set_mode(mode);
                }
            }

            ui.separator();

            let system = self.editor.coord_system();
            if ui
                .button(format!("Coordinates: {}", system.label()))
                .on_hover_text("Switch between screen and Cartesian coordinates")
                .clicked()
            {
                let next = system.toggled();
                self.editor.set_coord_system(next);
                self.settings.coord_system = next;
            }

            let theme_label = if self.settings.theme.is_dark() {
                "☀ Light"
            } else {
                "🌙 Dark"
            };
            if ui.button(theme_label).clicked() {
                self.settings.theme = self.settings.theme.toggled();
            }

            ui.checkbox(&mut self.settings.show_grid, "Grid");

            ui.separator();

            if ui
                .button("Reset view")
                .on_hover_text("Shortcut: 0")
                .clicked()
            {
                self.editor.reset_view();
            }
            if ui.button("Clear all").clicked() {
                self.editor.clear_all();
            }
        });
    }

    /// Vertex list, edge list and the add-at-coordinates form.
    fn draw_graph_panel(&mut self, ui: &mut egui::Ui) {
        self.refresh_sidebar();
        let mut action = None;
        let selected = self.editor.selected();

        ui.heading(format!("Vertices ({})", self.sidebar.vertices.len()));
        egui::ScrollArea::vertical()
            .id_salt("vertex_list")
            .max_height(ui.available_height() * 0.4)
            .show(ui, |ui| {
                if self.sidebar.vertices.is_empty() {
                    ui.weak("No vertices yet");
                }
                for row in &self.sidebar.vertices {
                    ui.horizontal(|ui| {
                        let text = format!("V{} {}", row.id, row.user);
                        if ui.selectable_label(selected == Some(row.id), text).clicked() {
                            action = Some(PanelAction::Select(row.id));
                        }
                        if ui.small_button("🗑").on_hover_text("Delete vertex").clicked() {
                            action = Some(PanelAction::DeleteVertex(row.id));
                        }
                    });
                }
            });

        ui.separator();
        ui.heading(format!("Edges ({})", self.sidebar.edges.len()));
        egui::ScrollArea::vertical()
            .id_salt("edge_list")
            .max_height(ui.available_height() * 0.5)
            .show(ui, |ui| {
                if self.sidebar.edges.is_empty() {
                    ui.weak("No edges yet");
                }
                for edge in &self.sidebar.edges {
                    ui.horizontal(|ui| {
                        ui.label(format!("E{}: V{} – V{}", edge.id, edge.v1, edge.v2));
                        if ui.small_button("🗑").on_hover_text("Delete edge").clicked() {
                            action = Some(PanelAction::DeleteEdge(edge.id));
                        }
                    });
                }
            });

        ui.separator();
        ui.label(format!(
            "Add vertex at ({})",
            self.editor.coord_system().label()
        ));
        ui.horizontal(|ui| {
            ui.label("x");
            ui.add(egui::TextEdit::singleline(&mut self.form.x).desired_width(60.0));
            ui.label("y");
            ui.add(egui::TextEdit::singleline(&mut self.form.y).desired_width(60.0));
            if ui.button("Add").clicked() {
                let (x, y) = self.form.values();
                if self.editor.add_vertex_at_user(x, y).success {
                    self.form = CoordinateForm::default();
                }
            }
        });

        match action {
            Some(PanelAction::Select(id)) => {
                self.editor.select_vertex(id);
            }
            Some(PanelAction::DeleteVertex(id)) => {
                self.editor.delete_vertex(id);
            }
            Some(PanelAction::DeleteEdge(id)) => {
                self.editor.delete_edge(id);
            }
            None => {}
        }
    }

    /// Feedback message on the left, mode, coordinate system, pointer and zoom on the right.
    fn draw_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(feedback) = self.editor.status().current() {
                let color = if feedback.success {
                    ui.visuals().text_color()
                } else {
                    ui.visuals().warn_fg_color
                };
                ui.colored_label(color, &feedback.message);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", self.editor.zoom_percent()));
                ui.separator();
                if let Some(world) = self.editor.pointer_world() {
                    ui.monospace(self.editor.frame().world_to_user(world).to_string());
                    ui.separator();
                }
                ui.label(self.editor.coord_system().label());
                ui.separator();
                ui.label(self.editor.mode().label());
            });
        });
    }
}
