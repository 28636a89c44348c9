//! Zoom-invariant hit-testing of vertices.

use crate::constants::{HIT_MARGIN, VERTEX_RADIUS};
use crate::graph::Graph;
use crate::types::VertexId;
use eframe::egui;

/// World-space hit radius at `zoom`.
///
/// The threshold grows as the view zooms out so that the clickable area stays the same
/// number of screen pixels.
pub fn hit_radius(zoom: f32) -> f32 {
    (VERTEX_RADIUS + HIT_MARGIN) / zoom
}

/// Finds the vertex at the given world position, if any.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `world_pos` - Position in world space to check
/// * `zoom` - Current zoom factor of the view
///
/// # Returns
///
/// The first vertex in insertion order whose center lies within [`hit_radius`] of
/// `world_pos` (boundary inclusive), or `None` if no vertex is there.
pub fn vertex_at(graph: &Graph, world_pos: egui::Pos2, zoom: f32) -> Option<VertexId> {
    let radius_sq = hit_radius(zoom).powi(2);
    graph
        .vertices()
        .find(|v| v.pos().distance_sq(world_pos) <= radius_sq)
        .map(|v| v.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_radius_is_screen_constant() {
        for zoom in [0.1_f32, 1.0, 10.0] {
            assert!((hit_radius(zoom) * zoom - (VERTEX_RADIUS + HIT_MARGIN)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hit_iff_within_radius_at_every_zoom() {
        let mut graph = Graph::new();
        let v = graph.add_vertex(100.0, 200.0);
        for zoom in [0.1_f32, 1.0, 10.0] {
            let r = hit_radius(zoom);
            let center = egui::pos2(100.0, 200.0);
            assert_eq!(vertex_at(&graph, center, zoom), Some(v));
            assert_eq!(vertex_at(&graph, center + egui::vec2(r * 0.99, 0.0), zoom), Some(v));
            let diagonal = egui::vec2(1.0, 1.0).normalized() * r * 0.99;
            assert_eq!(vertex_at(&graph, center - diagonal, zoom), Some(v));
            assert_eq!(vertex_at(&graph, center + egui::vec2(0.0, r * 1.01), zoom), None);
        }
    }

    #[test]
    fn test_first_inserted_wins_on_overlap() {
        let mut graph = Graph::new();
        let first = graph.add_vertex(0.0, 0.0);
        let _second = graph.add_vertex(4.0, 0.0);
        assert_eq!(vertex_at(&graph, egui::pos2(3.0, 0.0), 1.0), Some(first));
    }

    #[test]
    fn test_empty_graph_has_no_hits() {
        assert_eq!(vertex_at(&Graph::new(), egui::Pos2::ZERO, 1.0), None);
    }
}
