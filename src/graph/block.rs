//! Basic block module
//!
//! This module contains the BasicBlock struct owned by the function graph.

use crate::lift::{BlockId, Instruction, LiftedBlock};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Basic block in the function graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicBlock {
    /// Lifter-assigned block reference
    pub id: BlockId,
    /// Canonical label (set by the namer pass; positional fallback otherwise)
    pub label: String,
    /// IR instructions in this block
    pub instructions: Vec<Instruction>,
    /// References to successor blocks
    pub successors: Vec<BlockId>,
}

impl BasicBlock {
    /// Build a model block from a lifted block at the given discovery index
    pub fn from_lifted(block: LiftedBlock, index: usize) -> Self {
        BasicBlock {
            id: block.id,
            label: block.label.unwrap_or_else(|| format!("bb{}", index)),
            instructions: block.instructions,
            successors: block.successors,
        }
    }

    /// Get the number of instructions in this block
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Get the successor block references
    pub fn successors(&self) -> &[BlockId] {
        &self.successors
    }

    /// Render the display text for this block
    ///
    /// Always non-empty: a block with no instructions still renders its
    /// label line.
    pub fn render(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}:", self.label);
        for instruction in &self.instructions {
            let _ = writeln!(text, "  {}", instruction);
        }
        text
    }
}
