//! Visualization session context
//!
//! A session bundles the lifting engine with the canonicalization passes run
//! on every freshly lifted function. Sessions are independent of each other;
//! nothing here is global, so multiple functions can be viewed side by side.

use crate::error::Result;
use crate::graph::FunctionGraph;
use crate::lift::namer::{FunctionPass, InstructionNamer};
use crate::lift::{FunctionHandle, Lifter};
use crate::viewer::ViewerController;

/// Context for visualizing functions through one lifting engine
pub struct Session<L: Lifter> {
    lifter: L,
    passes: Vec<Box<dyn FunctionPass>>,
}

impl<L: Lifter> Session<L> {
    /// Create a session with the default pass list (instruction namer)
    pub fn new(lifter: L) -> Self {
        Session {
            lifter,
            passes: vec![Box::new(InstructionNamer)],
        }
    }

    /// Append a canonicalization pass run after the default ones
    pub fn with_pass(mut self, pass: Box<dyn FunctionPass>) -> Self {
        self.passes.push(pass);
        self
    }

    /// Get the lifting engine
    pub fn lifter(&self) -> &L {
        &self.lifter
    }

    /// Lift a function, canonicalize it, and wrap it in a viewer controller
    ///
    /// Fails with a lift error if the function cannot be decomposed; in that
    /// case no session state is created and the host simply shows no graph.
    pub fn visualize(&self, function: FunctionHandle) -> Result<ViewerController> {
        let mut lifted = self.lifter.decompose(function)?;
        for pass in &self.passes {
            log::debug!("running {} on {:#x}", pass.name(), function.0);
            pass.run(&mut lifted);
        }
        let model = FunctionGraph::new(lifted)?;
        Ok(ViewerController::new(model))
    }
}
