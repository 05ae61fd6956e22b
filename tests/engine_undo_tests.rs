// tests/engine_undo_tests.rs

//! Undo: каждый публичный переход откатывается ровно одним вызовом undo,
//! стек ограничен 20 снапшотами.

use poker_chip_tracker::domain::{Blinds, Chips, Phase, SeatRequest, Winner};
use poker_chip_tracker::engine::{EngineConfig, EngineError, PlayerActionKind, PokerEngine, TableEvent};

fn start(stacks: &[(&str, u64)], sb: u64, bb: u64) -> PokerEngine {
    let seats: Vec<SeatRequest> = stacks
        .iter()
        .map(|&(name, buy_in)| SeatRequest::new(name, Chips(buy_in)))
        .collect();
    let mut engine = PokerEngine::default();
    engine
        .start_game(&seats, Some(Blinds::new(Chips(sb), Chips(bb))))
        .expect("start_game failed");
    engine
}

/// snapshot → действие → undo даёт исходное состояние.
fn assert_undo_round_trip(engine: &mut PokerEngine, action: PlayerActionKind) {
    let snapshot = engine.table().clone();
    engine.act(action).expect("action must succeed");
    assert_ne!(engine.table(), &snapshot);

    engine.undo().expect("undo");
    assert_eq!(engine.table(), &snapshot, "undo after {:?}", action);
}

#[test]
fn undo_reverts_every_action_kind() {
    let mut engine = start(&[("A", 100), ("B", 100), ("C", 100)], 5, 10);

    assert_undo_round_trip(&mut engine, PlayerActionKind::Fold);
    assert_undo_round_trip(&mut engine, PlayerActionKind::Call);
    assert_undo_round_trip(&mut engine, PlayerActionKind::Raise(Chips(30)));
    assert_undo_round_trip(&mut engine, PlayerActionKind::AllIn);

    engine.call().expect("A calls");
    engine.call().expect("B calls");
    // BB может чекнуть: чек закрывает улицу.
    assert_undo_round_trip(&mut engine, PlayerActionKind::Check);
}

/// Фолд, закончивший раздачу, откатывается вместе с выплатой.
#[test]
fn undo_reverts_pot_award() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let snapshot = engine.table().clone();

    engine.fold().expect("fold");
    assert_eq!(engine.table().phase, Phase::Result);

    engine.undo().expect("undo");
    assert_eq!(engine.table(), &snapshot);
    assert_eq!(engine.table().phase, Phase::Betting);
}

/// Сжигание карты и объявление победителя тоже откатываются.
#[test]
fn undo_reverts_burn_and_declare() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    engine.call().expect("call");
    engine.check().expect("check");

    let before_burn = engine.table().clone();
    engine.acknowledge_burn_card().expect("burn");
    engine.undo().expect("undo burn");
    assert_eq!(engine.table(), &before_burn);
    assert!(engine.table().burn_card_pending);

    assert!(engine.all_in().is_err());
    engine.acknowledge_burn_card().expect("burn");
    engine.all_in().expect("Bob all-in");
    engine.call().expect("Alice calls");
    while engine.table().phase == Phase::Betting {
        engine.acknowledge_burn_card().expect("burn");
    }

    let before_declare = engine.table().clone();
    engine.declare_winner(Winner::Tie).expect("tie");
    engine.undo().expect("undo declare");
    assert_eq!(engine.table(), &before_declare);
    assert_eq!(engine.table().phase, Phase::Showdown);
}

/// Повторные undo идут дальше назад.
#[test]
fn undo_steps_back_repeatedly() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let after_blinds = engine.table().clone();

    engine.raise(Chips(20)).expect("raise");
    engine.raise(Chips(40)).expect("re-raise");
    engine.call().expect("call");

    engine.undo().expect("undo call");
    engine.undo().expect("undo re-raise");
    engine.undo().expect("undo raise");
    assert_eq!(engine.table(), &after_blinds);

    let events = engine.drain_events();
    assert_eq!(events.iter().filter(|e| **e == TableEvent::Undone).count(), 3);
}

/// Отклонённое действие не занимает место в истории.
#[test]
fn rejected_action_pushes_no_snapshot() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let depth = engine.history_len();

    assert!(engine.check().is_err());
    assert!(engine.raise(Chips(12)).is_err());
    assert_eq!(engine.history_len(), depth);
}

/// Стек ограничен: старые снапшоты вытесняются.
#[test]
fn history_is_bounded() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    engine.fold().expect("fold");

    for _ in 0..25 {
        engine.rebuy(0, Chips(1)).expect("rebuy");
    }
    assert_eq!(engine.history_len(), 20);

    for _ in 0..20 {
        engine.undo().expect("undo");
    }
    assert_eq!(engine.undo(), Err(EngineError::NothingToUndo));
    // Пять самых ранних ребаев уже не откатить.
    assert_eq!(engine.table().players[0].total_buy_in, Chips(105));
}

#[test]
fn custom_history_depth() {
    let config = EngineConfig {
        max_history: 2,
        ..EngineConfig::default()
    };
    let mut engine = PokerEngine::new(config);
    engine
        .start_game(
            &[SeatRequest::new("A", Chips(100)), SeatRequest::new("B", Chips(100))],
            Some(Blinds::new(Chips(5), Chips(10))),
        )
        .expect("start");
    engine.call().expect("call");
    engine.check().expect("check");
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn undo_on_fresh_engine_fails() {
    let mut engine = PokerEngine::default();
    assert_eq!(engine.undo(), Err(EngineError::NothingToUndo));
    assert!(!engine.can_undo());
}
