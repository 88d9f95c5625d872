//! Canonicalization passes
//!
//! Passes run once over a freshly lifted function before it is handed to the
//! graph model. The only pass shipped here is the instruction namer, which
//! makes block text stable and cheap to print.

use crate::lift::LiftedFunction;

/// A transformation run over a lifted function before display
pub trait FunctionPass {
    /// Pass name for diagnostics
    fn name(&self) -> &'static str;

    /// Run the pass, mutating the function in place
    fn run(&self, function: &mut LiftedFunction);
}

/// Assigns stable names to unlabeled blocks and unnamed instruction results
///
/// Blocks get `bbN` labels by discovery order; unnamed temporaries get `%N`
/// names from a single function-wide counter. Running the pass twice is a
/// no-op: it only touches empty names.
#[derive(Debug, Default)]
pub struct InstructionNamer;

impl FunctionPass for InstructionNamer {
    fn name(&self) -> &'static str {
        "instruction-namer"
    }

    fn run(&self, function: &mut LiftedFunction) {
        let mut next_value = 0usize;
        for (index, block) in function.blocks.iter_mut().enumerate() {
            if block.label.is_none() {
                block.label = Some(format!("bb{}", index));
            }
            for instruction in &mut block.instructions {
                match &mut instruction.result {
                    Some(name) if name.is_empty() => {
                        *name = format!("%{}", next_value);
                        next_value += 1;
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lift::{BlockId, FunctionHandle, Instruction, LiftedBlock};

    fn two_block_function() -> LiftedFunction {
        let entry = LiftedBlock::new(
            BlockId(0x10),
            vec![
                Instruction::valued("add", vec!["%a".into(), "1".into()]),
                Instruction::void("br", vec!["label %exit".into()]),
            ],
        );
        let exit = LiftedBlock {
            id: BlockId(0x20),
            label: Some("exit".to_string()),
            instructions: vec![Instruction::valued("load", vec!["%p".into()])],
            successors: vec![],
        };
        LiftedFunction::new(FunctionHandle(0x400000), vec![entry, exit])
    }

    #[test]
    fn names_unlabeled_blocks_and_unnamed_results() {
        let mut function = two_block_function();
        InstructionNamer.run(&mut function);

        assert_eq!(function.blocks[0].label.as_deref(), Some("bb0"));
        assert_eq!(function.blocks[1].label.as_deref(), Some("exit"));
        assert_eq!(
            function.blocks[0].instructions[0].result.as_deref(),
            Some("%0")
        );
        assert_eq!(function.blocks[0].instructions[1].result, None);
        assert_eq!(
            function.blocks[1].instructions[0].result.as_deref(),
            Some("%1")
        );
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut function = two_block_function();
        InstructionNamer.run(&mut function);
        let named = function.clone();
        InstructionNamer.run(&mut function);
        assert_eq!(function, named);
    }
}
