//! Function graph model
//!
//! This module owns the mapping from a lifted function to its basic blocks,
//! the block-index correspondence, the lazily computed edge set, and the
//! batch-generated display text queried by the viewer controller.

pub mod block;

pub use block::BasicBlock;

use crate::error::{Error, Result};
use crate::lift::{BlockId, FunctionHandle, LiftedFunction};
use once_cell::unsync::OnceCell;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Queryable control-flow graph of one lifted function
///
/// Built once per visualization session. Block indices are dense, assigned by
/// the lifter's discovery order, and stable for the session's lifetime.
pub struct FunctionGraph {
    /// Handle the function was lifted from
    handle: FunctionHandle,
    /// Symbol name recovered by the lifter, if any
    symbol: Option<String>,
    /// Node arena; node indices coincide with block indices
    graph: DiGraph<BasicBlock, ()>,
    /// Reverse lookup from lifter block reference to node index
    block_index: HashMap<BlockId, NodeIndex>,
    /// Edge set, resolved from successors on first use
    edges: OnceCell<Vec<(usize, usize)>>,
    /// Display text per block, filled in one batch by `generate_text`
    node_text: Vec<String>,
    /// Display name, resolved on first use
    name: OnceCell<String>,
}

impl FunctionGraph {
    /// Build the graph model from a lifted function
    ///
    /// Performs the single pass that establishes the block-index map. Fails
    /// with a lift error for an empty decomposition or a duplicate block
    /// reference.
    pub fn new(function: LiftedFunction) -> Result<Self> {
        if function.blocks.is_empty() {
            return Err(Error::lift(format!(
                "function {:#x} has no basic blocks",
                function.handle.0
            )));
        }

        let mut graph = DiGraph::with_capacity(function.blocks.len(), 0);
        let mut block_index = HashMap::with_capacity(function.blocks.len());
        for (index, lifted) in function.blocks.into_iter().enumerate() {
            let id = lifted.id;
            let node = graph.add_node(BasicBlock::from_lifted(lifted, index));
            if block_index.insert(id, node).is_some() {
                return Err(Error::lift(format!(
                    "duplicate block reference {:#x} in function {:#x}",
                    id.0, function.handle.0
                )));
            }
        }

        log::debug!(
            "built graph model for {:#x}: {} blocks",
            function.handle.0,
            graph.node_count()
        );

        Ok(FunctionGraph {
            handle: function.handle,
            symbol: function.symbol,
            graph,
            block_index,
            edges: OnceCell::new(),
            node_text: Vec::new(),
            name: OnceCell::new(),
        })
    }

    /// Get the handle this graph was built from
    pub fn handle(&self) -> FunctionHandle {
        self.handle
    }

    /// Get the number of basic blocks
    pub fn block_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Resolve a lifter block reference to its dense index
    ///
    /// `None` is the expected answer for references that do not belong to
    /// this function; callers validate host-supplied ids through it.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.block_index.get(&id).map(|node| node.index())
    }

    /// Get the block at a dense index
    pub fn block(&self, index: usize) -> Result<&BasicBlock> {
        self.graph
            .node_weight(NodeIndex::new(index))
            .ok_or(Error::OutOfRange {
                index,
                count: self.block_count(),
            })
    }

    /// Get the entry block (first in discovery order)
    pub fn entry(&self) -> Option<&BasicBlock> {
        self.graph.node_indices().next().map(|node| &self.graph[node])
    }

    /// Iterate over all blocks in index order
    pub fn blocks(&self) -> impl Iterator<Item = &BasicBlock> {
        self.graph.node_indices().map(move |node| &self.graph[node])
    }

    /// Get the edge set as (source, destination) index pairs
    ///
    /// Computed on first call by resolving every block's successors through
    /// the index map, then cached for the session. A successor that does not
    /// resolve indicates an inconsistent lift and fails the whole edge set.
    pub fn edges(&self) -> Result<&[(usize, usize)]> {
        self.edges
            .get_or_try_init(|| {
                let mut edges = Vec::new();
                for node in self.graph.node_indices() {
                    let src = node.index();
                    for &succ in self.graph[node].successors() {
                        let dst = self
                            .index_of(succ)
                            .ok_or(Error::InconsistentLift { block: succ.0 })?;
                        edges.push((src, dst));
                    }
                }
                log::debug!("resolved {} edges for {:#x}", edges.len(), self.handle.0);
                Ok(edges)
            })
            .map(Vec::as_slice)
    }

    /// Generate display text for every block in one batch
    ///
    /// Idempotent: repeated calls regenerate all entries identically.
    pub fn generate_text(&mut self) {
        self.node_text.clear();
        self.node_text
            .extend(self.graph.node_indices().map(|node| self.graph[node].render()));
        log::debug!(
            "generated text for {} blocks of {:#x}",
            self.node_text.len(),
            self.handle.0
        );
    }

    /// Get the display text of one block
    ///
    /// Fails with an out-of-range error if the index is invalid or
    /// `generate_text` was never called.
    pub fn text_of(&self, index: usize) -> Result<&str> {
        self.node_text
            .get(index)
            .map(String::as_str)
            .ok_or(Error::OutOfRange {
                index,
                count: self.node_text.len(),
            })
    }

    /// Get the display name of the function
    ///
    /// The recovered symbol if the lifter provided one, a synthetic
    /// `sub_<address>` name otherwise. Resolved once and cached.
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| match &self.symbol {
            Some(symbol) => symbol.clone(),
            None => format!("sub_{:x}", self.handle.0),
        })
    }

    /// Export the graph to DOT for offline visualization
    pub fn to_dot(&self) -> Result<String> {
        let mut dot = String::new();
        dot.push_str("digraph CFG {\n");
        dot.push_str("  rankdir=TB;\n");
        dot.push_str("  node [shape=box];\n\n");

        for node in self.graph.node_indices() {
            let block = &self.graph[node];
            dot.push_str(&format!("  {} [label=\"{}\"];\n", node.index(), block.label));
        }

        dot.push('\n');

        for &(src, dst) in self.edges()? {
            dot.push_str(&format!("  {} -> {};\n", src, dst));
        }

        dot.push_str("}\n");
        Ok(dot)
    }
}
