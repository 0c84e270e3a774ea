//! Tournaments between computer strategies.

use tictactoe::selfplay;
use tictactoe_core::{FallbackKind, StrategyKind};

#[test]
fn test_optimal_tournament_is_all_draws() {
    let mut o = StrategyKind::Optimal.build(FallbackKind::FirstEmpty, None);
    let mut x = StrategyKind::Optimal.build(FallbackKind::FirstEmpty, None);
    let tally = selfplay::run(o.as_mut(), x.as_mut(), 3);
    assert_eq!(*tally.draws(), 3);
    assert_eq!(*tally.scoreboard().o_wins(), 0);
    assert_eq!(*tally.scoreboard().x_wins(), 0);
}

#[test]
fn test_heuristic_never_beats_optimal() {
    let mut o = StrategyKind::Heuristic.build(FallbackKind::Random, Some(11));
    let mut x = StrategyKind::Optimal.build(FallbackKind::FirstEmpty, None);
    let tally = selfplay::run(o.as_mut(), x.as_mut(), 10);
    assert_eq!(*tally.scoreboard().o_wins(), 0);
    assert_eq!(tally.draws() + tally.scoreboard().x_wins(), 10);
}

#[test]
fn test_tally_serializes_to_json() {
    let mut o = StrategyKind::Heuristic.build(FallbackKind::FirstEmpty, None);
    let mut x = StrategyKind::Optimal.build(FallbackKind::FirstEmpty, None);
    let tally = selfplay::run(o.as_mut(), x.as_mut(), 2);

    let json = serde_json::to_value(&tally).expect("serializable");
    assert_eq!(json["o_strategy"], "heuristic");
    assert_eq!(json["x_strategy"], "optimal");
    assert_eq!(json["games"], 2);

    let back: selfplay::Tally = serde_json::from_value(json).expect("round trip");
    assert_eq!(back, tally);
}
