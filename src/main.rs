#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging, filtered through RUST_LOG
    env_logger::init();

    // Run the graph editor
    coord_graph::run_app()
}

// The browser build starts through the library's wasm entry point
#[cfg(target_arch = "wasm32")]
fn main() {}
