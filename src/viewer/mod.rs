//! Graph interaction controller
//!
//! This module adapts one [`FunctionGraph`] to the host widget's event
//! protocol. The controller holds no state beyond its model: every decision
//! is made from the event payload and the model's caches, and no error ever
//! crosses the event boundary back into the host's dispatch loop.

pub mod event;
pub mod graph;

pub use event::{GraphEvent, GraphItem, HintQuery, Reply, Selection};
pub use graph::MutableGraph;

use crate::graph::FunctionGraph;

/// Protocol adapter between the host graph widget and one function graph
///
/// One controller per visualized function, alive for the session.
pub struct ViewerController {
    model: FunctionGraph,
}

impl ViewerController {
    /// Create a controller for the given graph model
    pub fn new(model: FunctionGraph) -> Self {
        ViewerController { model }
    }

    /// Get the underlying graph model
    pub fn model(&self) -> &FunctionGraph {
        &self.model
    }

    /// Answer one host event
    ///
    /// Protocol misuse (out-of-range indices, text queried before
    /// generation) degrades to a safe reply with a diagnostic log line.
    pub fn on_event(&mut self, event: GraphEvent<'_>) -> Reply {
        match event {
            GraphEvent::CalculatingLayout => {
                log::debug!("layout calculation left to the host");
                Reply::NotHandled
            }
            GraphEvent::Refresh(graph) => self.refresh(graph),
            GraphEvent::GenerateText => {
                self.model.generate_text();
                Reply::Handled
            }
            GraphEvent::NodeText { node } => self.node_text(node),
            GraphEvent::NodeSize { node } => {
                log::debug!("node {} size left to the host", node);
                Reply::NotHandled
            }
            GraphEvent::Hint(query) => Reply::Hint(self.hint(query)),
            GraphEvent::Clicked(item) => {
                log::debug!("clicked on {}", item.describe());
                Reply::Proceed
            }
            GraphEvent::DoubleClicked(selection) => {
                match selection {
                    Some(Selection::Node { node }) => log::debug!("dblclicked on node {}", node),
                    Some(Selection::EdgePoint { src, dst, point }) => {
                        log::debug!("dblclicked on edge ({}, {}) layout point #{}", src, dst, point)
                    }
                    None => log::debug!("dblclicked on background"),
                }
                Reply::Proceed
            }
            GraphEvent::CurrentChanged { node } => {
                log::debug!("current node becomes {}", node);
                Reply::Proceed
            }
            GraphEvent::GotFocus => {
                log::debug!("viewer got focus");
                Reply::Proceed
            }
            GraphEvent::LostFocus => {
                log::debug!("viewer lost focus");
                Reply::Proceed
            }
            GraphEvent::CreatingGroup { nodes } => {
                log::debug!("creating group of {:?}", nodes);
                Reply::Proceed
            }
            GraphEvent::DeletingGroup { group } => {
                log::debug!("deleting group {}", group);
                Reply::Proceed
            }
            GraphEvent::GroupVisibility { group, expand } => {
                log::debug!(
                    "{} group {}",
                    if expand { "expanding" } else { "collapsing" },
                    group
                );
                Reply::Proceed
            }
        }
    }

    /// Materialize the model into the host graph
    ///
    /// Sizes the graph on first refresh and inserts every edge exactly once.
    /// A second refresh finds the edges already present and skips insertion,
    /// so a duplicated event cannot double the edge set.
    fn refresh(&mut self, graph: &mut MutableGraph) -> Reply {
        if graph.is_empty() {
            graph.resize(self.model.block_count());
        }
        if graph.edge_count() == 0 {
            match self.model.edges() {
                Ok(edges) => {
                    for &(src, dst) in edges {
                        graph.add_edge(src, dst);
                    }
                }
                Err(e) => {
                    log::warn!("refusing to populate graph: {}", e);
                    return Reply::NotHandled;
                }
            }
        } else {
            log::debug!("graph already populated, skipping edge insertion");
        }
        Reply::Handled
    }

    fn node_text(&self, node: usize) -> Reply {
        match self.model.text_of(node) {
            Ok(text) => Reply::NodeText {
                text: text.to_string(),
                bg_color: None,
            },
            Err(e) => {
                log::warn!("falling back to empty text for node {}: {}", node, e);
                Reply::NodeText {
                    text: String::new(),
                    bg_color: None,
                }
            }
        }
    }

    fn hint(&self, query: HintQuery) -> Option<String> {
        if let Some(node) = query.node {
            match self.model.block(node) {
                Ok(block) => Some(format!(
                    "{}: block {} ({} instructions)",
                    self.model.name(),
                    node,
                    block.instruction_count()
                )),
                Err(e) => {
                    log::warn!("no hint for node {}: {}", node, e);
                    None
                }
            }
        } else if let Some((src, dst)) = query.edge {
            Some(format!("edge ({}, {})", src, dst))
        } else {
            None
        }
    }
}
