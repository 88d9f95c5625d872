//! Host-side mutable graph
//!
//! The widget hands the controller a mutable graph to materialize nodes and
//! edges into during a refresh. This struct models that structure.

/// Mutable graph owned by the host widget
#[derive(Debug, Default)]
pub struct MutableGraph {
    nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl MutableGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        MutableGraph::default()
    }

    /// Whether the graph has been sized yet
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Set the node count
    pub fn resize(&mut self, nodes: usize) {
        self.nodes = nodes;
    }

    /// Add an edge between two node indices
    pub fn add_edge(&mut self, src: usize, dst: usize) {
        self.edges.push((src, dst));
    }

    /// Get the node count
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Get the edge count
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all edges in insertion order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}
