//! # Coordinate Graph
//!
//! An interactive canvas for drawing undirected graphs while switching how coordinates are
//! displayed. Vertices are stored in world pixels; labels, lists and typed input use one of
//! two conventions:
//! - **CG (screen)**: origin at the top-left corner, Y grows downward
//! - **Math (Cartesian)**: origin at the canvas center, Y grows upward
//!
//! ## Features
//! - Select, add-vertex and add-edge modes with a two-click edge protocol
//! - Vertex dragging, middle-button panning and cursor-anchored wheel zoom
//! - Adaptive grid with axis-value labels and direction arrows for the active system
//! - Vertex and edge lists with deletion and an add-at-coordinates form
//! - Light and dark themes, persisted together with the other preferences

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod coords;
pub mod editor;
pub mod error;
pub mod graph;
pub mod hit_test;
pub mod render;
pub mod types;
mod ui;
pub mod view;

// Re-export public types and functions
pub use editor::Editor;
pub use error::{Feedback, GraphError};
pub use types::*;
pub use ui::{GraphApp, Settings};

/// Runs the graph editor in a native window.
///
/// Settings saved by a previous session are restored through eframe's persistence.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     coord_graph::run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Coordinate Graph",
        options,
        Box::new(|cc| Ok(Box::new(GraphApp::new(cc)))),
    )
}

/// Browser entry point: mounts the app on `<canvas id="graph_canvas">`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    if let Err(err) = eframe::WebLogger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("logger setup failed: {err}").into());
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("graph_canvas"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("no <canvas id=\"graph_canvas\"> element on the page");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GraphApp::new(cc)))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start the app: {err:?}");
        }
    });
}
