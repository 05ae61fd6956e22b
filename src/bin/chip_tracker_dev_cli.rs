// src/bin/chip_tracker_dev_cli.rs

use poker_chip_tracker::api::{build_table_view, execute, Command, CommandRequest, CommandResponse, TableView};
use poker_chip_tracker::domain::{Blinds, Chips, SeatRequest, Winner};
use poker_chip_tracker::engine::{EngineConfig, PokerEngine};
use poker_chip_tracker::infra::{load_game, save_game, InMemoryStore};

fn main() {
    env_logger::init();
    println!("chip_tracker_dev_cli: стартуем dev-CLI трекера фишек…");

    let mut engine = PokerEngine::new(EngineConfig::default());

    // 1. Хедз-ап: Alice и Bob по 100, блайнды 5/10.
    let seats = vec![
        SeatRequest::new("Alice", Chips::new(100)),
        SeatRequest::new("Bob", Chips::new(100)),
    ];
    run(
        &mut engine,
        "Старт игры",
        Command::StartGame {
            players: seats,
            blinds: Some(Blinds::new(Chips::new(5), Chips::new(10))),
        },
    );

    // 2. Префлоп: дилер (SB) коллирует, BB чекает.
    run(&mut engine, "Alice call", Command::Call);
    run(&mut engine, "Bob check", Command::Check);

    // 3. Флоп: сначала подтверждаем сжигание карты.
    run(&mut engine, "Burn card", Command::AcknowledgeBurnCard);
    run(&mut engine, "Bob bet 20", Command::Raise { to: Chips::new(20) });

    // Ошибка: ход не Боба.
    print_response(
        "Bob raise вне очереди",
        &execute(
            &mut engine,
            CommandRequest {
                command: Command::Raise { to: Chips::new(60) },
                actor: Some(1),
            },
        ),
    );

    run(&mut engine, "Alice all-in", Command::AllIn);
    run(&mut engine, "Undo", Command::Undo);
    run(&mut engine, "Alice call", Command::Call);

    // 4. Тёрн и ривер без ставок.
    for street in ["Turn", "River"] {
        run(&mut engine, &format!("Burn card ({})", street), Command::AcknowledgeBurnCard);
        run(&mut engine, "Bob check", Command::Check);
        run(&mut engine, "Alice check", Command::Check);
    }

    // 5. Шоудаун: победителя объявляет пользователь.
    run(
        &mut engine,
        "Declare Alice",
        Command::DeclareWinner {
            winner: Winner::Seat(0),
        },
    );

    // 6. Сохранение и загрузка.
    let mut store = InMemoryStore::new();
    match save_game(&mut store, &engine) {
        Ok(()) => println!("[CLI] Игра сохранена."),
        Err(e) => eprintln!("[CLI] ОШИБКА сохранения: {}", e),
    }
    match load_game(&store) {
        Ok(Some(saved)) => {
            let restored = saved.into_engine(EngineConfig::default());
            println!(
                "[CLI] Загружено: раунд {}, игроков {}.",
                restored.table().round,
                restored.table().player_count()
            );
        }
        Ok(None) => println!("[CLI] Сохранения нет."),
        Err(e) => eprintln!("[CLI] ОШИБКА загрузки: {}", e),
    }

    // 7. Следующая раздача: кнопка переходит к Бобу.
    run(&mut engine, "Next hand", Command::NextHand);
    debug_print_table(&build_table_view(&engine));

    println!("[CLI] Завершение работы dev-CLI.");
}

fn run(engine: &mut PokerEngine, title: &str, command: Command) {
    let response = execute(engine, command.into());
    print_response(title, &response);
}

fn print_response(title: &str, response: &CommandResponse) {
    println!();
    println!("================ {} =================", title);
    if let Some(err) = &response.error {
        println!("[CLI] Отклонено ({:?}): {}", err.code, err.message);
    }
    for event in &response.events {
        println!("[EVENT] {:?} (звук: {:?})", event, event.cue());
    }
    debug_print_table(&response.view);
}

fn debug_print_table(view: &TableView) {
    println!(
        "[TABLE] фаза={:?} улица={} раунд={} банк={} (с учётом ставок {}) ставка={} min_raise={}",
        view.phase,
        view.street_label,
        view.round,
        view.pot,
        view.pot_total,
        view.current_bet,
        view.min_raise
    );
    if view.burn_card_pending {
        println!("[TABLE] ждём сжигания карты");
    }
    for p in &view.players {
        let marker = if p.is_active { "->" } else { "  " };
        let dealer = if p.is_dealer { "(D)" } else { "   " };
        println!(
            "  {} {} seat={} {:<8} bankroll={:<5} bet={:<5} net={:<5} folded={} all_in={}",
            marker, dealer, p.seat, p.name, p.bankroll, p.bet, p.net, p.folded, p.is_all_in
        );
    }
    if !view.valid_raises.is_empty() {
        let labels: Vec<String> = view
            .valid_raises
            .iter()
            .map(|o| format!("{}={}", o.label, o.amount))
            .collect();
        println!("[TABLE] рейзы: {}", labels.join(", "));
    }
    if let Some(odds) = &view.pot_odds {
        println!(
            "[TABLE] шансы банка: {:.1}:1, нужно {:.1}% эквити",
            odds.ratio, odds.percentage
        );
    }
    if let Some(result) = &view.last_result {
        println!("[RESULT] {}", result.message);
    }
}
