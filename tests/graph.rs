use liftgraph::lift::namer::{FunctionPass, InstructionNamer};
use liftgraph::lift::{BlockId, Instruction, LiftedBlock};
use liftgraph::{Error, FunctionGraph, FunctionHandle, LiftedFunction};

const HANDLE: FunctionHandle = FunctionHandle(0x400000);

/// 3-block diamond with one fallthrough missing: A -> B, A -> C, B -> C
fn diamond() -> LiftedFunction {
    let a = LiftedBlock::new(
        BlockId(0xa),
        vec![
            Instruction::valued("icmp", vec!["%x".into(), "0".into()]),
            Instruction::void("br", vec!["%0".into(), "label b".into(), "label c".into()]),
        ],
    )
    .with_successors(vec![BlockId(0xb), BlockId(0xc)]);
    let b = LiftedBlock::new(
        BlockId(0xb),
        vec![Instruction::valued("add", vec!["%x".into(), "1".into()])],
    )
    .with_successors(vec![BlockId(0xc)]);
    let c = LiftedBlock::new(BlockId(0xc), vec![Instruction::void("ret", vec![])]);
    LiftedFunction::new(HANDLE, vec![a, b, c])
}

fn build(mut function: LiftedFunction) -> FunctionGraph {
    InstructionNamer.run(&mut function);
    FunctionGraph::new(function).unwrap()
}

#[test]
fn block_count_matches_decomposition() {
    let graph = build(diamond());
    assert_eq!(graph.block_count(), 3);
}

#[test]
fn index_map_is_a_bijection_over_discovery_order() {
    let graph = build(diamond());
    assert_eq!(graph.index_of(BlockId(0xa)), Some(0));
    assert_eq!(graph.index_of(BlockId(0xb)), Some(1));
    assert_eq!(graph.index_of(BlockId(0xc)), Some(2));
    assert_eq!(graph.index_of(BlockId(0xdead)), None);

    // every index resolves back to the block carrying the mapped id
    for index in 0..graph.block_count() {
        let block = graph.block(index).unwrap();
        assert_eq!(graph.index_of(block.id), Some(index));
    }
}

#[test]
fn edges_resolve_successors_through_the_index_map() {
    let graph = build(diamond());
    let edges = graph.edges().unwrap();
    assert_eq!(edges, &[(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn edges_are_idempotent() {
    let graph = build(diamond());
    let first = graph.edges().unwrap().to_vec();
    let second = graph.edges().unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn unmapped_successor_is_an_invariant_violation() {
    let mut function = diamond();
    function.blocks[1].successors.push(BlockId(0xdead));
    let graph = build(function);
    assert_eq!(
        graph.edges().unwrap_err(),
        Error::InconsistentLift { block: 0xdead }
    );
}

#[test]
fn empty_decomposition_is_a_lift_error() {
    let result = FunctionGraph::new(LiftedFunction::new(HANDLE, vec![]));
    assert!(matches!(result, Err(Error::Lift { .. })));
}

#[test]
fn duplicate_block_reference_is_a_lift_error() {
    let mut function = diamond();
    function.blocks[2].id = BlockId(0xa);
    let result = FunctionGraph::new(function);
    assert!(matches!(result, Err(Error::Lift { .. })));
}

#[test]
fn generated_text_is_nonempty_and_derived_from_each_block() {
    let mut graph = build(diamond());
    graph.generate_text();
    for index in 0..graph.block_count() {
        let text = graph.text_of(index).unwrap();
        assert!(!text.is_empty());
        let label = &graph.block(index).unwrap().label;
        assert!(text.starts_with(&format!("{}:", label)));
    }
    // entry block carries the named compare result
    assert!(graph.text_of(0).unwrap().contains("%0 = icmp"));
}

#[test]
fn regenerating_text_is_stable() {
    let mut graph = build(diamond());
    graph.generate_text();
    let before: Vec<String> = (0..3).map(|i| graph.text_of(i).unwrap().to_string()).collect();
    graph.generate_text();
    let after: Vec<String> = (0..3).map(|i| graph.text_of(i).unwrap().to_string()).collect();
    assert_eq!(before, after);
}

#[test]
fn text_queries_fail_out_of_range_without_panicking() {
    let mut graph = build(diamond());
    // before any generation every index is out of range
    assert!(matches!(graph.text_of(0), Err(Error::OutOfRange { .. })));
    graph.generate_text();
    assert!(matches!(
        graph.text_of(3),
        Err(Error::OutOfRange { index: 3, count: 3 })
    ));
}

#[test]
fn function_name_prefers_the_recovered_symbol() {
    let graph = build(diamond().with_symbol("main"));
    assert_eq!(graph.name(), "main");

    let anonymous = build(diamond());
    assert_eq!(anonymous.name(), "sub_400000");
}

#[test]
fn entry_is_the_first_discovered_block() {
    let graph = build(diamond());
    assert_eq!(graph.entry().unwrap().id, BlockId(0xa));
}

#[test]
fn dot_export_lists_nodes_and_edges() {
    let graph = build(diamond());
    let dot = graph.to_dot().unwrap();
    assert!(dot.starts_with("digraph CFG {"));
    assert!(dot.contains("0 [label=\"bb0\"]"));
    assert!(dot.contains("  0 -> 1;"));
    assert!(dot.contains("  1 -> 2;"));
}
