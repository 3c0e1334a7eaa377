use quarterturn::{filter_moves, generate_legal_moves, Axis, Error, Move, Spin};

#[test]
fn notation_round_trips() {
    for text in ["x:0.5:+", "y:-0.5:-", "z:1:+", "x:-2:-", "y:1.5:+", "z:0:-"] {
        let mv: Move = text.parse().expect("parse");
        assert_eq!(mv.to_string(), text, "display must reproduce the input");
    }
}

#[test]
fn notation_half_layers_double_exactly() {
    let mv: Move = "y:0.5:+".parse().expect("parse");
    assert_eq!(mv, Move::new(Axis::Y, 1, Spin::Cw));
    let mv: Move = "x:-1.5:-".parse().expect("parse");
    assert_eq!(mv, Move::new(Axis::X, -3, Spin::Ccw));
    let mv: Move = "z:2:+".parse().expect("parse");
    assert_eq!(mv, Move::new(Axis::Z, 4, Spin::Cw));
}

#[test]
fn notation_rejects_malformed_text() {
    for text in [
        "", "x", "x:1", "w:1:+", "x:1:*", "x:one:+", "x:1.25:+", "x:1:+:extra", "x::+", "x:.5:+",
    ] {
        match text.parse::<Move>() {
            Err(Error::MoveFormat { text: t }) => assert_eq!(t, text),
            other => panic!("{text:?} gave {other:?}"),
        }
    }
}

#[test]
fn move_serde_round_trips() {
    let mv = Move::new(Axis::Z, -1, Spin::Ccw);
    let json = serde_json::to_string(&mv).expect("serialize");
    let back: Move = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(mv, back);
}

#[test]
fn generation_counts_per_order() {
    // axes * layers * spins; odd orders skip the center layer
    assert_eq!(generate_legal_moves(2).len(), 12);
    assert_eq!(generate_legal_moves(3).len(), 12);
    assert_eq!(generate_legal_moves(4).len(), 24);
    assert_eq!(generate_legal_moves(5).len(), 24);
}

#[test]
fn generation_is_deterministic_and_ordered() {
    let moves = generate_legal_moves(2);
    assert_eq!(moves[0], Move::new(Axis::X, -1, Spin::Cw));
    assert_eq!(moves[1], Move::new(Axis::X, -1, Spin::Ccw));
    assert_eq!(moves[2], Move::new(Axis::X, 1, Spin::Cw));
    assert_eq!(moves[11], Move::new(Axis::Z, 1, Spin::Ccw));
    assert_eq!(moves, generate_legal_moves(2), "stable across calls");
}

#[test]
fn center_slice_omitted_for_odd_orders() {
    assert!(generate_legal_moves(3).iter().all(|m| m.slice != 0));
    assert!(generate_legal_moves(5).iter().all(|m| m.slice != 0));
}

#[test]
fn inverse_is_an_involution() {
    for mv in generate_legal_moves(3) {
        assert_eq!(mv.inverse().inverse(), mv);
        assert!(mv.inverse().is_inverse_of(mv));
        assert!(!mv.is_inverse_of(mv), "a move does not invert itself");
    }
}

#[test]
fn filter_drops_exactly_the_inverse_of_last() {
    let moves = generate_legal_moves(2);
    let last = Move::new(Axis::X, 1, Spin::Cw);
    let kept = filter_moves(&moves, Some(last));
    assert_eq!(kept.len(), moves.len() - 1);
    assert!(!kept.contains(&last.inverse()));
    assert!(kept.contains(&last), "repeating the same turn stays legal");
    assert_eq!(filter_moves(&moves, None).len(), moves.len());
}
