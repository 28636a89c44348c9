//! Graph store: vertices, edges and their id counters.
//!
//! Ids come from two monotonic counters and are never handed out twice until
//! [`Graph::clear`] resets them. Because ids only grow, iterating the id-ordered maps
//! yields insertion order, which is what list views and hit-testing rely on.

use crate::constants::FIRST_ID;
use crate::error::GraphError;
use crate::types::{Edge, EdgeId, Vertex, VertexId};
use std::collections::BTreeMap;

/// Owns every vertex and edge of the current session.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All vertices, keyed (and therefore ordered) by id
    vertices: BTreeMap<VertexId, Vertex>,
    /// All edges, keyed by id
    edges: BTreeMap<EdgeId, Edge>,
    next_vertex_id: VertexId,
    next_edge_id: EdgeId,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_vertex_id: FIRST_ID,
            next_edge_id: FIRST_ID,
        }
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex at a world position.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal world position
    /// * `y` - Vertical world position
    ///
    /// # Returns
    ///
    /// The ID of the newly added vertex.
    pub fn add_vertex(&mut self, x: f32, y: f32) -> VertexId {
        let id = self.next_vertex_id;
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex { id, x, y });
        log::debug!("added vertex V{id} at ({x:.1}, {y:.1})");
        id
    }

    /// Removes a vertex and every edge that references it.
    ///
    /// # Returns
    ///
    /// The removed vertex and the ids of the edges removed with it, or `None` if no
    /// vertex had that id (nothing changes in that case).
    pub fn delete_vertex(&mut self, id: VertexId) -> Option<(Vertex, Vec<EdgeId>)> {
        let vertex = self.vertices.remove(&id)?;
        let dropped: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.touches(id))
            .map(|e| e.id)
            .collect();
        for edge_id in &dropped {
            self.edges.remove(edge_id);
        }
        log::debug!("deleted vertex V{id} and {} incident edge(s)", dropped.len());
        Some((vertex, dropped))
    }

    /// Moves a vertex to a new world position.
    ///
    /// # Returns
    ///
    /// `true` if the vertex exists and was moved.
    pub fn move_vertex(&mut self, id: VertexId, x: f32, y: f32) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.x = x;
                vertex.y = y;
                true
            }
            None => false,
        }
    }

    /// Connects two distinct, existing, not yet connected vertices.
    ///
    /// # Returns
    ///
    /// The new edge id, or the reason the edge was refused. Refusals never consume an id.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId, GraphError> {
        if v1 == v2 {
            return Err(GraphError::SelfLoop(v1));
        }
        for v in [v1, v2] {
            if !self.vertices.contains_key(&v) {
                return Err(GraphError::UnknownVertex(v));
            }
        }
        if self.edge_between(v1, v2).is_some() {
            return Err(GraphError::DuplicateEdge(v1, v2));
        }
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.insert(id, Edge { id, v1, v2 });
        log::debug!("added edge E{id} between V{v1} and V{v2}");
        Ok(id)
    }

    /// Removes an edge by id.
    ///
    /// # Returns
    ///
    /// The removed edge, or `None` if it did not exist.
    pub fn delete_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let removed = self.edges.remove(&id);
        if removed.is_some() {
            log::debug!("deleted edge E{id}");
        }
        removed
    }

    /// Empties the graph and restarts both id counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Looks up a vertex.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Looks up an edge.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// The edge joining `a` and `b` in either direction, if any.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edges.values().find(|e| e.connects(a, b))
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        let b = graph.add_vertex(10.0, 0.0);
        assert_eq!((a, b), (1, 2));
        graph.delete_vertex(b);
        let c = graph.add_vertex(20.0, 0.0);
        assert_eq!(c, 3);
        let order: Vec<VertexId> = graph.vertices().map(|v| v.id).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn test_reverse_and_self_edges_rejected() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        let b = graph.add_vertex(50.0, 0.0);
        assert_eq!(graph.add_edge(a, b), Ok(1));
        assert_eq!(graph.add_edge(b, a), Err(GraphError::DuplicateEdge(b, a)));
        assert_eq!(graph.add_edge(a, a), Err(GraphError::SelfLoop(a)));
        assert_eq!(graph.add_edge(a, 42), Err(GraphError::UnknownVertex(42)));
        assert_eq!(graph.edge_count(), 1);
        // rejected attempts do not burn ids
        let c = graph.add_vertex(0.0, 50.0);
        assert_eq!(graph.add_edge(a, c), Ok(2));
    }

    #[test]
    fn test_delete_vertex_cascades_only_incident_edges() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        let b = graph.add_vertex(1.0, 0.0);
        let c = graph.add_vertex(2.0, 0.0);
        let d = graph.add_vertex(3.0, 0.0);
        let ab = graph.add_edge(a, b).unwrap();
        let bc = graph.add_edge(b, c).unwrap();
        let cd = graph.add_edge(c, d).unwrap();

        let (removed, dropped) = graph.delete_vertex(b).expect("b exists");
        assert_eq!(removed.id, b);
        assert_eq!(dropped, vec![ab, bc]);
        assert!(graph.edge(cd).is_some());
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.edges().all(|e| !e.touches(b)));
    }

    #[test]
    fn test_delete_missing_ids_is_noop() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        assert!(graph.delete_vertex(99).is_none());
        assert!(graph.delete_edge(99).is_none());
        assert_eq!(graph.vertex(a).map(|v| v.id), Some(a));
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        let b = graph.add_vertex(1.0, 1.0);
        graph.add_edge(a, b).unwrap();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        let a = graph.add_vertex(5.0, 5.0);
        let b = graph.add_vertex(6.0, 6.0);
        assert_eq!(a, FIRST_ID);
        assert_eq!(graph.add_edge(a, b), Ok(FIRST_ID));
    }

    #[test]
    fn test_move_vertex() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(0.0, 0.0);
        assert!(graph.move_vertex(a, 7.0, -3.0));
        assert_eq!(graph.vertex(a).map(|v| v.pos()), Some(egui::pos2(7.0, -3.0)));
        assert!(!graph.move_vertex(5, 1.0, 1.0));
    }
}
