// tests/engine_round_tests.rs

//! Жизненный цикл игры между раздачами:
//! - new_round: кнопка, вылеты, сброс раздачных полей;
//! - конец игры и учёт серий;
//! - реванш, ребай, сброс стола.

use poker_chip_tracker::domain::{Blinds, Chips, Phase, ResultReason, SeatRequest, Street, Winner};
use poker_chip_tracker::engine::{EngineError, PokerEngine, TableEvent, MAX_PENDING_EVENTS};

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

fn check_down(engine: &mut PokerEngine) {
    for _ in 0..64 {
        let t = engine.table();
        if t.phase != Phase::Betting {
            return;
        }
        if t.burn_card_pending {
            engine.acknowledge_burn_card().expect("burn");
        } else {
            engine.check().expect("check");
        }
    }
    panic!("check_down не дошёл до шоудауна");
}

/// Хедз-ап: Alice идёт олл-ин, Bob коллирует, Alice выигрывает всё.
fn heads_up_bust_bob() -> PokerEngine {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    engine.all_in().expect("all-in");
    engine.call().expect("call");
    check_down(&mut engine);
    engine.declare_winner(Winner::Seat(0)).expect("declare");
    engine
}

/// Новая раздача: кнопка по часовой, блайнды заново, раунд +1.
#[test]
fn new_round_rotates_dealer_and_posts_blinds() {
    let mut engine = start(&[("A", 100), ("B", 100), ("C", 100)], 5, 10);
    engine.fold().expect("A folds");
    engine.fold().expect("B folds");

    engine.new_round().expect("new round");
    let t = engine.table();

    assert_eq!(t.round, 2);
    assert_eq!(t.dealer_index, 1);
    assert_eq!(t.phase, Phase::Betting);
    assert_eq!(t.street, Street::Preflop);
    assert!(t.last_result.is_none());
    assert!(t.hand_log.is_empty());
    // SB - C (место 2), BB - A (место 0), первым ходит B.
    assert_eq!(t.players[2].bet, Chips(5));
    assert_eq!(t.players[0].bet, Chips(10));
    assert_eq!(t.active_player_index, 1);
    assert!(t.players.iter().all(|p| !p.folded));
    assert_eq!(t.total_chips_in_play(), Chips(300));

    // История прошлой раздачи очищена, остался только снапшот блайндов.
    assert_eq!(engine.history_len(), 1);
}

/// Посреди раздачи новую начать нельзя.
#[test]
fn new_round_requires_finished_hand() {
    let mut engine = start(&[("A", 100), ("B", 100)], 5, 10);
    let before = engine.table().clone();
    assert!(matches!(engine.new_round(), Err(EngineError::IllegalAction(_))));
    assert_eq!(engine.table(), &before);
}

/// Вылет: игрок удаляется, кнопка пересчитывается, сообщение о вылете.
#[test]
fn new_round_removes_busted_players() {
    let mut engine = start(&[("A", 100), ("B", 10), ("C", 100)], 5, 10);
    engine.raise(Chips(30)).expect("A raises");
    engine.all_in().expect("B all-in");
    engine.call().expect("C calls");
    check_down(&mut engine);
    engine.declare_winner(Winner::Seat(0)).expect("A wins");
    engine.drain_events();

    engine.new_round().expect("new round");
    let t = engine.table();

    let names: Vec<&str> = t.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(t.dealer_index, 1);
    let result = t.last_result.as_ref().expect("elimination message");
    assert_eq!(result.reason, ResultReason::Elimination);
    assert_eq!(result.message, "B eliminated. 2 players remain.");

    // Хедз-ап: дилер C ставит SB.
    assert_eq!(t.players[1].bet, Chips(5));
    assert_eq!(t.players[0].bet, Chips(10));
    assert_eq!(t.active_player_index, 1);
    assert_eq!(t.total_chips_in_play(), Chips(210));

    let events = engine.drain_events();
    assert!(events.contains(&TableEvent::PlayersEliminated {
        names: vec!["B".to_string()]
    }));
}

/// Остался один с фишками - игра окончена, серии обновлены.
#[test]
fn last_player_standing_wins_the_game() {
    let mut engine = heads_up_bust_bob();
    engine.new_round().expect("finish game");

    let t = engine.table();
    assert!(t.is_game_over());
    assert_eq!(t.phase, Phase::Result);
    let result = t.last_result.as_ref().expect("game result");
    assert_eq!(result.message, "Alice WINS THE GAME!");
    assert_eq!(result.winner, Some(0));
    // Состав не фильтруется, чтобы реванш видел всех.
    assert_eq!(t.players.len(), 2);
    assert_eq!(t.players[1].bankroll, Chips::ZERO);

    let alice = engine.series().get("Alice").expect("Alice");
    assert_eq!(alice.series_wins, 1);
    assert_eq!(alice.hands_won, 1);
    let bob = engine.series().get("Bob").expect("Bob");
    assert_eq!(bob.series_losses, 1);
    assert_eq!(bob.hands_lost, 1);

    assert!(!engine.can_undo());
    assert_eq!(engine.new_round(), Err(EngineError::GameOver));
    assert_eq!(engine.rebuy(1, Chips(50)), Err(EngineError::GameOver));
}

/// Реванш: те же имена и блайнды, всем бай-ин первого игрока.
#[test]
fn rematch_restarts_with_same_roster() {
    let mut engine = heads_up_bust_bob();
    engine.new_round().expect("finish game");

    engine.rematch().expect("rematch");
    let t = engine.table();
    assert!(!t.is_game_over());
    assert_eq!(t.round, 1);
    assert_eq!(t.dealer_index, 0);
    assert_eq!(t.blinds, Blinds::new(Chips(5), Chips(10)));
    assert_eq!(t.players[0].name, "Alice");
    assert_eq!(t.players[1].name, "Bob");
    assert_eq!(t.total_chips_in_play(), Chips(200));
    assert_eq!(t.players[1].total_buy_in, Chips(100));
    assert_eq!(t.players[0].stats.hands_won, 0);

    // Серии переживают реванш.
    assert_eq!(engine.series().get("Alice").map(|s| s.series_wins), Some(1));
}

#[test]
fn rebuy_adds_chips_between_hands() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    engine.fold().expect("fold");

    engine.rebuy(0, Chips(50)).expect("rebuy");
    let p = &engine.table().players[0];
    assert_eq!(p.bankroll, Chips(145));
    assert_eq!(p.total_buy_in, Chips(150));
    assert_eq!(engine.drain_events().last(), Some(&TableEvent::Rebuy { seat: 0, amount: Chips(50) }));

    engine.undo().expect("undo rebuy");
    assert_eq!(engine.table().players[0].bankroll, Chips(95));
}

/// Незабранные события не копятся бесконечно: остаются самые свежие.
#[test]
fn pending_events_are_bounded() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    engine.fold().expect("fold");

    for i in 1..=300u64 {
        engine.rebuy(1, Chips(i)).expect("rebuy");
    }

    let events = engine.drain_events();
    assert_eq!(events.len(), MAX_PENDING_EVENTS);
    assert_eq!(events.first(), Some(&TableEvent::Rebuy { seat: 1, amount: Chips(45) }));
    assert_eq!(events.last(), Some(&TableEvent::Rebuy { seat: 1, amount: Chips(300) }));
    assert!(engine.drain_events().is_empty());
}

#[test]
fn rebuy_rejected_while_chips_are_in_play() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let before = engine.table().clone();

    // У обоих стоят блайнды.
    assert!(matches!(engine.rebuy(0, Chips(50)), Err(EngineError::IllegalAction(_))));
    assert_eq!(engine.rebuy(5, Chips(50)), Err(EngineError::InvalidSeat(5)));
    assert!(matches!(engine.rebuy(1, Chips::ZERO), Err(EngineError::InvalidAmount(_))));
    assert_eq!(engine.table(), &before);

    // На флопе ставок нет - можно.
    engine.call().expect("call");
    engine.check().expect("check");
    engine.rebuy(1, Chips(20)).expect("rebuy on flop");
    assert_eq!(engine.table().players[1].bankroll, Chips(110));
}

/// Сброс: стол в setup, блайнды и серии на месте.
#[test]
fn reset_game_returns_to_setup() {
    let mut engine = heads_up_bust_bob();
    engine.new_round().expect("finish game");
    engine.reset_game();

    let t = engine.table();
    assert_eq!(t.phase, Phase::Setup);
    assert!(!t.game_started);
    assert!(t.players.is_empty());
    assert_eq!(t.blinds, Blinds::new(Chips(5), Chips(10)));
    assert!(!engine.can_undo());
    assert_eq!(engine.series().len(), 2);

    engine.clear_series_stats();
    assert!(engine.series().is_empty());
}
