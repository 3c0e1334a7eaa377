use quarterturn::solver::{IdaSearch, Search};
use quarterturn::{
    apply_all, generate_legal_moves, Algorithm, Axis, BudgetKind, CubeState, Move, SearchBudget,
    SearchStep, SolveOutcome, Spin, Variant,
};

fn budget() -> SearchBudget {
    SearchBudget {
        max_depth: 10,
        max_nodes: 100_000,
        max_millis: None,
        threshold_max: 10,
    }
}

fn run(engine: &mut IdaSearch) -> SolveOutcome {
    loop {
        if let SearchStep::Done(outcome) = engine.advance(4_096) {
            return outcome;
        }
    }
}

#[test]
fn solved_start_finishes_on_the_first_advance() {
    let state = CubeState::new(3, Variant::Normal).expect("state");
    let mut engine = IdaSearch::new(&state, generate_legal_moves(3), budget());
    assert_eq!(
        engine.advance(1),
        SearchStep::Done(SolveOutcome::Solved(Vec::new()))
    );
}

#[test]
fn single_turn_is_undone_by_its_inverse() {
    let solved = CubeState::new(3, Variant::Normal).expect("state");
    let mv = Move::new(Axis::X, 2, Spin::Ccw);
    let scrambled = apply_all(&solved, &[mv]).expect("scramble");
    let mut engine = IdaSearch::new(&scrambled, generate_legal_moves(3), budget());
    match run(&mut engine) {
        SolveOutcome::Solved(path) => assert_eq!(path, vec![mv.inverse()]),
        other => panic!("got {other:?}"),
    }
}

#[test]
fn two_turn_scramble_solves_in_two_moves() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scramble = [
        Move::new(Axis::X, 1, Spin::Cw),
        Move::new(Axis::Y, 1, Spin::Cw),
    ];
    let scrambled = apply_all(&solved, &scramble).expect("scramble");
    let mut engine = IdaSearch::new(&scrambled, generate_legal_moves(2), budget());
    match run(&mut engine) {
        SolveOutcome::Solved(path) => {
            assert_eq!(path.len(), 2);
            let replayed = apply_all(&scrambled, &path).expect("replay");
            assert!(replayed.is_solved());
        }
        other => panic!("got {other:?}"),
    }
}

#[test]
fn engine_suspends_between_slices() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scramble = [
        Move::new(Axis::X, 1, Spin::Cw),
        Move::new(Axis::Y, 1, Spin::Cw),
    ];
    let scrambled = apply_all(&solved, &scramble).expect("scramble");
    let mut engine = IdaSearch::new(&scrambled, generate_legal_moves(2), budget());

    let mut suspensions = 0u32;
    let outcome = loop {
        match engine.advance(1) {
            SearchStep::Suspended => {
                suspensions += 1;
                let progress = engine.progress();
                assert_eq!(progress.algorithm, Algorithm::Ida);
                assert!(progress.threshold.is_some(), "ida reports its threshold");
            }
            SearchStep::Done(outcome) => break outcome,
        }
    };
    assert!(suspensions >= 1);
    assert!(outcome.is_solved());
}

#[test]
fn done_outcome_is_sticky() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scrambled =
        apply_all(&solved, &[Move::new(Axis::Z, 1, Spin::Cw)]).expect("scramble");
    let mut engine = IdaSearch::new(&scrambled, generate_legal_moves(2), budget());
    let first = run(&mut engine);
    match engine.advance(100) {
        SearchStep::Done(again) => assert_eq!(again, first),
        SearchStep::Suspended => panic!("finished engine must not resume"),
    }
}

#[test]
fn threshold_cap_below_the_solution_reports_exhausted_depth() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scramble = [
        Move::new(Axis::X, 1, Spin::Cw),
        Move::new(Axis::Y, 1, Spin::Cw),
    ];
    let scrambled = apply_all(&solved, &scramble).expect("scramble");
    let mut engine = IdaSearch::new(
        &scrambled,
        generate_legal_moves(2),
        SearchBudget {
            threshold_max: 1,
            ..budget()
        },
    );
    assert_eq!(
        run(&mut engine),
        SolveOutcome::Exhausted(BudgetKind::Depth)
    );
    assert!(engine.stats().last_threshold.is_some());
}

#[test]
fn exhausted_component_without_pruning_proves_not_found() {
    // Scramble about y, then only allow one x turn: the reachable component
    // is a 4-cycle, so the thresholds stop growing and the engine concludes.
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scrambled =
        apply_all(&solved, &[Move::new(Axis::Y, 1, Spin::Cw)]).expect("scramble");
    let mut engine = IdaSearch::new(
        &scrambled,
        vec![Move::new(Axis::X, 1, Spin::Cw)],
        SearchBudget {
            max_nodes: 1_000,
            ..budget()
        },
    );
    assert_eq!(run(&mut engine), SolveOutcome::NotFound);
    assert!(engine.stats().dedup_hits >= 1, "the cycle closes on itself");
}

#[test]
fn depth_cap_that_prunes_work_reports_exhausted_depth() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scrambled =
        apply_all(&solved, &[Move::new(Axis::Y, 1, Spin::Cw)]).expect("scramble");
    let mut engine = IdaSearch::new(
        &scrambled,
        vec![Move::new(Axis::X, 1, Spin::Cw)],
        SearchBudget {
            max_depth: 2,
            ..budget()
        },
    );
    assert_eq!(
        run(&mut engine),
        SolveOutcome::Exhausted(BudgetKind::Depth)
    );
}

#[test]
fn node_budget_applies_per_iteration() {
    let solved = CubeState::new(3, Variant::Normal).expect("state");
    let scramble = [
        Move::new(Axis::X, 2, Spin::Cw),
        Move::new(Axis::Y, 2, Spin::Cw),
        Move::new(Axis::X, 2, Spin::Ccw),
        Move::new(Axis::Y, 2, Spin::Ccw),
        Move::new(Axis::X, 2, Spin::Cw),
        Move::new(Axis::Y, 2, Spin::Cw),
        Move::new(Axis::X, 2, Spin::Ccw),
        Move::new(Axis::Y, 2, Spin::Ccw),
    ];
    let scrambled = apply_all(&solved, &scramble).expect("scramble");
    let mut engine = IdaSearch::new(
        &scrambled,
        generate_legal_moves(3),
        SearchBudget {
            max_depth: 50,
            max_nodes: 2,
            max_millis: None,
            threshold_max: 50,
        },
    );
    assert_eq!(
        run(&mut engine),
        SolveOutcome::Exhausted(BudgetKind::Nodes)
    );
}

#[test]
fn zero_time_budget_exhausts_immediately() {
    let solved = CubeState::new(3, Variant::Normal).expect("state");
    let scrambled =
        apply_all(&solved, &[Move::new(Axis::Y, 2, Spin::Cw)]).expect("scramble");
    let mut engine = IdaSearch::new(
        &scrambled,
        generate_legal_moves(3),
        SearchBudget {
            max_millis: Some(0),
            ..budget()
        },
    );
    assert_eq!(
        engine.advance(1_000),
        SearchStep::Done(SolveOutcome::Exhausted(BudgetKind::Time))
    );
}

#[test]
fn stats_cover_the_whole_search() {
    let solved = CubeState::new(2, Variant::Normal).expect("state");
    let scramble = [
        Move::new(Axis::X, 1, Spin::Cw),
        Move::new(Axis::Y, 1, Spin::Cw),
    ];
    let scrambled = apply_all(&solved, &scramble).expect("scramble");
    let mut engine = IdaSearch::new(&scrambled, generate_legal_moves(2), budget());
    assert!(run(&mut engine).is_solved());
    let stats = engine.stats();
    assert!(stats.iterations >= 1);
    assert!(stats.nodes_expanded >= u64::from(stats.iterations));
    let last = stats.last_threshold.expect("at least one iteration ran");
    assert!(last >= 1);
}
