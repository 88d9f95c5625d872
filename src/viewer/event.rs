//! Typed graph-widget protocol
//!
//! The host widget drives the controller with a stream of events. The
//! original C-style dispatch (integer code plus untyped argument list) is
//! re-expressed as strongly typed payloads matched exhaustively.

use crate::viewer::MutableGraph;
use serde::Serialize;

/// Where a click landed, as reported by the host widget
///
/// Purely descriptive; serialized for telemetry and echoed in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphItem {
    /// Click on the background
    Background,
    /// Click on a node
    Node { node: usize },
    /// Click on an edge
    Edge { src: usize, dst: usize },
    /// Click on a toolbutton
    Tool { button: usize },
    /// Click on loose text at widget coordinates
    Text { x: i32, y: i32 },
    /// Click on an edge layout point
    EdgePoint { src: usize, dst: usize, point: usize },
}

impl GraphItem {
    /// Tag naming the kind of item hit
    pub fn kind(&self) -> &'static str {
        match self {
            GraphItem::Background => "background",
            GraphItem::Node { .. } => "node",
            GraphItem::Edge { .. } => "edge",
            GraphItem::Tool { .. } => "tool",
            GraphItem::Text { .. } => "text",
            GraphItem::EdgePoint { .. } => "edge_point",
        }
    }

    /// One-line description for logging
    pub fn describe(&self) -> String {
        match self {
            GraphItem::Background => "background".to_string(),
            GraphItem::Node { node } => format!("node {}", node),
            GraphItem::Edge { src, dst } => format!("edge ({}, {})", src, dst),
            GraphItem::Tool { button } => format!("toolbutton {}", button),
            GraphItem::Text { x, y } => format!("text (x,y)=({},{})", x, y),
            GraphItem::EdgePoint { src, dst, point } => {
                format!("edge layout point ({}, {}) #{}", src, dst, point)
            }
        }
    }
}

/// Current selection reported with a double click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// A node is selected
    Node { node: usize },
    /// An edge layout point is selected
    EdgePoint { src: usize, dst: usize, point: usize },
}

/// Mouse-hover hint query: at most one of node or edge is identified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintQuery {
    /// Hovered node index, if any
    pub node: Option<usize>,
    /// Hovered edge as (source, destination) indices, if any
    pub edge: Option<(usize, usize)>,
}

impl HintQuery {
    /// Query for a hovered node
    pub fn node(node: usize) -> Self {
        HintQuery {
            node: Some(node),
            edge: None,
        }
    }

    /// Query for a hovered edge
    pub fn edge(src: usize, dst: usize) -> Self {
        HintQuery {
            node: None,
            edge: Some((src, dst)),
        }
    }

    /// Query with nothing identified under the mouse
    pub fn none() -> Self {
        HintQuery::default()
    }
}

/// Host-issued protocol events
///
/// One variant per notification the graph widget can send. The controller
/// answers each with a [`Reply`]; no event may fail.
#[derive(Debug)]
pub enum GraphEvent<'g> {
    /// Host offers the plugin a chance to lay the graph out itself
    CalculatingLayout,
    /// Refresh nodes and edges of the host graph
    Refresh(&'g mut MutableGraph),
    /// Generate text for all nodes in one batch
    GenerateText,
    /// Retrieve text for one node
    NodeText { node: usize },
    /// Calculate the size of one node
    NodeSize { node: usize },
    /// Retrieve a hover hint
    Hint(HintQuery),
    /// The graph has been clicked
    Clicked(GraphItem),
    /// A double click on the current selection (`None` = background)
    DoubleClicked(Option<Selection>),
    /// A new node became the current node
    CurrentChanged { node: usize },
    /// The viewer got focus
    GotFocus,
    /// The viewer lost focus
    LostFocus,
    /// A group is being created from the given nodes
    CreatingGroup { nodes: Vec<usize> },
    /// A group is being deleted
    DeletingGroup { group: usize },
    /// A group is being collapsed or expanded
    GroupVisibility { group: usize, expand: bool },
}

/// Controller reply, one per event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Event recognized but left to the host's default behavior
    NotHandled,
    /// Event fully handled
    Handled,
    /// Notification acknowledged; the host may proceed
    Proceed,
    /// Node text plus optional background color override
    NodeText { text: String, bg_color: Option<u32> },
    /// Hover hint; `None` lets the host fall back to its default hint
    Hint(Option<String>),
}
