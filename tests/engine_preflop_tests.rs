// tests/engine_preflop_tests.rs

//! Старт игры и постинг блайндов:
//! - хедз-ап: дилер ставит SB и ходит первым;
//! - 3+ игроков: SB слева от дилера, первым ходит место после BB;
//! - авто-блайнды, имена по умолчанию, границы числа игроков;
//! - блайнды олл-ин.

use poker_chip_tracker::domain::{Blinds, Chips, Phase, SeatRequest, Street};
use poker_chip_tracker::engine::{EngineConfig, EngineError, PokerEngine, TableEvent};

fn seats(stacks: &[(&str, u64)]) -> Vec<SeatRequest> {
    stacks
        .iter()
        .map(|&(name, buy_in)| SeatRequest::new(name, Chips(buy_in)))
        .collect()
}

fn start(stacks: &[(&str, u64)], sb: u64, bb: u64) -> PokerEngine {
    let mut engine = PokerEngine::default();
    engine
        .start_game(&seats(stacks), Some(Blinds::new(Chips(sb), Chips(bb))))
        .expect("start_game failed");
    engine
}

/// Хедз-ап 5/10 по 100: дилер - SB и ходит первым.
#[test]
fn heads_up_dealer_posts_small_blind_and_acts_first() {
    let engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let t = engine.table();

    assert_eq!(t.phase, Phase::Betting);
    assert_eq!(t.street, Street::Preflop);
    assert_eq!(t.round, 1);
    assert_eq!(t.dealer_index, 0);
    assert!(t.blinds_posted);

    assert_eq!(t.players[0].bet, Chips(5));
    assert_eq!(t.players[0].bankroll, Chips(95));
    assert_eq!(t.players[1].bet, Chips(10));
    assert_eq!(t.players[1].bankroll, Chips(90));

    assert_eq!(t.current_bet, Chips(10));
    assert_eq!(t.min_raise, Chips(10));
    assert_eq!(t.active_player_index, 0);
    assert!(t.players.iter().all(|p| !p.acted));
}

/// 3 игрока: SB - слева от дилера, BB - следующий, первым ходит дилер (UTG).
#[test]
fn three_handed_blinds_left_of_dealer() {
    let engine = start(&[("A", 100), ("B", 100), ("C", 100)], 1, 2);
    let t = engine.table();

    assert_eq!(t.players[0].bet, Chips::ZERO);
    assert_eq!(t.players[1].bet, Chips(1));
    assert_eq!(t.players[2].bet, Chips(2));
    assert_eq!(t.current_bet, Chips(2));
    assert_eq!(t.active_player_index, 0);
}

/// Без явных блайндов: берём из конфига, иначе по лестнице бай-ина.
#[test]
fn blinds_come_from_config_or_buy_in_ladder() {
    let mut engine = PokerEngine::default();
    engine
        .start_game(&seats(&[("A", 100), ("B", 100)]), None)
        .expect("start_game failed");
    assert_eq!(engine.table().blinds, Blinds::new(Chips(1), Chips(2)));

    let config = EngineConfig {
        default_blinds: Some(Blinds::new(Chips(25), Chips(50))),
        ..EngineConfig::default()
    };
    let mut engine = PokerEngine::new(config);
    engine
        .start_game(&seats(&[("A", 1_000), ("B", 1_000)]), None)
        .expect("start_game failed");
    assert_eq!(engine.table().blinds, Blinds::new(Chips(25), Chips(50)));
    assert_eq!(engine.table().players[1].bet, Chips(50));
}

/// Пустое имя заменяется на "Player N".
#[test]
fn empty_names_get_default_labels() {
    let engine = start(&[("Alice", 100), ("", 100), ("  ", 100)], 1, 2);
    let names: Vec<&str> = engine.table().players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Player 2", "Player 3"]);
    assert!(engine.series().get("Player 2").is_some());
}

#[test]
fn start_game_rejects_bad_rosters() {
    let mut engine = PokerEngine::default();

    assert_eq!(
        engine.start_game(&seats(&[("Solo", 100)]), None),
        Err(EngineError::InsufficientPlayers(1))
    );

    let nine: Vec<(&str, u64)> = (0..9).map(|_| ("P", 100)).collect();
    assert_eq!(
        engine.start_game(&seats(&nine), None),
        Err(EngineError::TooManyPlayers(9))
    );

    assert!(matches!(
        engine.start_game(&seats(&[("A", 100), ("B", 0)]), None),
        Err(EngineError::InvalidAmount(_))
    ));

    assert!(matches!(
        engine.start_game(
            &seats(&[("A", 100), ("B", 100)]),
            Some(Blinds::new(Chips(10), Chips(5)))
        ),
        Err(EngineError::InvalidAmount(_))
    ));

    // Ни одна неудачная попытка не тронула стол.
    assert_eq!(engine.table().phase, Phase::Setup);
    assert!(engine.table().players.is_empty());
}

/// Повторный post_blinds в той же раздаче ничего не делает.
#[test]
fn post_blinds_is_idempotent() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let before = engine.table().clone();

    engine.post_blinds().expect("no-op");
    assert_eq!(engine.table(), &before);
}

/// BB короче блайнда: ставит всё, current_bet = максимум поставленного.
#[test]
fn short_big_blind_posts_all_in() {
    let mut engine = start(&[("Alice", 100), ("Bob", 3)], 5, 10);
    let t = engine.table();

    assert_eq!(t.players[1].bet, Chips(3));
    assert!(t.players[1].is_all_in);
    assert_eq!(t.current_bet, Chips(5));
    assert_eq!(t.active_player_index, 0);

    // Alice уже уравняла - чек закрывает торговлю, дальше прогон борда.
    engine.check().expect("check");
    let t = engine.table();
    assert_eq!(t.street, Street::Flop);
    assert!(t.burn_card_pending);
    assert_eq!(t.pot, Chips(8));
}

/// Оба игрока в олл-ине блайндами - борд прогоняется сразу.
#[test]
fn everyone_all_in_on_blinds_runs_board_out() {
    let engine = start(&[("Alice", 5), ("Bob", 3)], 5, 10);
    let t = engine.table();

    assert_eq!(t.count_can_act(), 0);
    assert_eq!(t.street, Street::Flop);
    assert!(t.burn_card_pending);
    assert_eq!(t.pot, Chips(8));
    assert_eq!(t.total_chips_in_play(), Chips(8));
}

/// События старта: игра, раздача, блайнды.
#[test]
fn start_game_emits_events() {
    let mut engine = start(&[("Alice", 100), ("Bob", 100)], 5, 10);
    let events = engine.drain_events();

    assert_eq!(
        events,
        vec![
            TableEvent::GameStarted {
                players: 2,
                small_blind: Chips(5),
                big_blind: Chips(10),
            },
            TableEvent::HandStarted { round: 1, dealer: 0 },
            TableEvent::BlindsPosted {
                small_blind: (0, Chips(5)),
                big_blind: (1, Chips(10)),
            },
        ]
    );
    assert!(engine.drain_events().is_empty());
}
