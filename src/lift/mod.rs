//! Lifting-engine boundary
//!
//! This module defines the types exchanged with the external disassembly and
//! lifting engine: opaque function/block references, the IR a lifted function
//! is made of, and the `Lifter` trait the engine implements.

pub mod namer;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Address of a function under analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionHandle(pub u64);

/// Opaque block reference assigned by the lifting engine
///
/// Only used for identity; the graph model maps these to dense indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u64);

/// Single IR instruction as exposed by the lifter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Name of the produced value, if any. Values created unnamed by the
    /// lifter carry an empty name until the namer pass assigns one.
    pub result: Option<String>,
    /// Opcode mnemonic
    pub opcode: String,
    /// Printed operands
    pub operands: Vec<String>,
}

impl Instruction {
    /// Instruction that produces no value
    pub fn void(opcode: impl Into<String>, operands: Vec<String>) -> Self {
        Instruction {
            result: None,
            opcode: opcode.into(),
            operands,
        }
    }

    /// Instruction that produces an unnamed temporary (named by the namer pass)
    pub fn valued(opcode: impl Into<String>, operands: Vec<String>) -> Self {
        Instruction {
            result: Some(String::new()),
            opcode: opcode.into(),
            operands,
        }
    }

    /// Instruction that produces an already-named value
    pub fn named(
        result: impl Into<String>,
        opcode: impl Into<String>,
        operands: Vec<String>,
    ) -> Self {
        Instruction {
            result: Some(result.into()),
            opcode: opcode.into(),
            operands,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(name) if !name.is_empty() => write!(f, "{} = {}", name, self.opcode)?,
            Some(_) => write!(f, "%? = {}", self.opcode)?,
            None => write!(f, "{}", self.opcode)?,
        }
        if !self.operands.is_empty() {
            write!(f, " {}", self.operands.join(", "))?;
        }
        Ok(())
    }
}

/// Basic block as delivered by the lifting engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiftedBlock {
    /// Lifter-assigned reference
    pub id: BlockId,
    /// Label, if the lifter named the block (namer pass fills the rest)
    pub label: Option<String>,
    /// Instructions in discovery order
    pub instructions: Vec<Instruction>,
    /// References to successor blocks
    pub successors: Vec<BlockId>,
}

impl LiftedBlock {
    /// Create a block with no successors
    pub fn new(id: BlockId, instructions: Vec<Instruction>) -> Self {
        LiftedBlock {
            id,
            label: None,
            instructions,
            successors: Vec::new(),
        }
    }

    /// Set the successor references
    pub fn with_successors(mut self, successors: Vec<BlockId>) -> Self {
        self.successors = successors;
        self
    }
}

/// A function decomposed into basic blocks, in the lifter's discovery order
///
/// The order of `blocks` is authoritative: the graph model assigns dense
/// indices by position and never reorders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiftedFunction {
    /// Handle the function was lifted from
    pub handle: FunctionHandle,
    /// Symbol name, if the engine recovered one
    pub symbol: Option<String>,
    /// Basic blocks in discovery order
    pub blocks: Vec<LiftedBlock>,
}

impl LiftedFunction {
    /// Create a lifted function from its blocks
    pub fn new(handle: FunctionHandle, blocks: Vec<LiftedBlock>) -> Self {
        LiftedFunction {
            handle,
            symbol: None,
            blocks,
        }
    }

    /// Attach the recovered symbol name
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Boundary with the external disassembly/lifting engine
pub trait Lifter {
    /// Decompose a function into an ordered sequence of basic blocks
    fn decompose(&self, function: FunctionHandle) -> Result<LiftedFunction>;
}

/// Table-backed lifter serving pre-lifted function bodies
///
/// Stands in for a real engine in tests and embedding scenarios where the
/// lift happens out of process.
#[derive(Debug, Default)]
pub struct StaticLifter {
    functions: HashMap<FunctionHandle, LiftedFunction>,
}

impl StaticLifter {
    /// Create an empty lifter
    pub fn new() -> Self {
        StaticLifter::default()
    }

    /// Register a lifted function body
    pub fn insert(&mut self, function: LiftedFunction) {
        self.functions.insert(function.handle, function);
    }
}

impl Lifter for StaticLifter {
    fn decompose(&self, function: FunctionHandle) -> Result<LiftedFunction> {
        self.functions.get(&function).cloned().ok_or_else(|| {
            Error::lift(format!("no lifted body for function {:#x}", function.0))
        })
    }
}
