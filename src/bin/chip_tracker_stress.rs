use poker_chip_tracker::domain::{Chips, SeatRequest};
use poker_chip_tracker::engine::{EngineConfig, PokerEngine};
use poker_chip_tracker::infra::{play_session, DeterministicRng};

fn main() {
    env_logger::init();
    println!("chip_tracker_stress: стартуем стресс-тест трекера фишек…");

    // Параметры нагрузки - можно смело крутить.
    const NUM_SESSIONS: u64 = 200;
    const MAX_STEPS: usize = 20_000;
    const BUY_IN: u64 = 1_000;

    let mut total_hands: u64 = 0;
    let mut total_showdowns: u64 = 0;
    let mut total_splits: u64 = 0;
    let mut max_pot = Chips::ZERO;
    let mut finished: u64 = 0;
    let mut failures: u64 = 0;

    for seed in 0..NUM_SESSIONS {
        // Чередуем правила олл-ина и размер стола (2–8 игроков).
        let config = EngineConfig {
            short_all_in_reopens_action: seed % 2 == 0,
            ..EngineConfig::default()
        };
        let players = 2 + (seed % 7) as usize;
        let seats: Vec<SeatRequest> = (0..players)
            .map(|i| SeatRequest::new(format!("Bot {}", i + 1), Chips::new(BUY_IN)))
            .collect();

        let mut engine = PokerEngine::new(config);
        let mut rng = DeterministicRng::from_seed(seed);

        match play_session(&mut engine, &seats, &mut rng, MAX_STEPS) {
            Ok(stats) => {
                total_hands += u64::from(stats.hands);
                total_showdowns += u64::from(stats.showdowns);
                total_splits += u64::from(stats.splits);
                max_pot = max_pot.max(stats.max_pot);
                if stats.finished {
                    finished += 1;
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("[STRESS][seed={}] ОШИБКА: {}", seed, e);
            }
        }
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Сессий: {}", NUM_SESSIONS);
    println!("Доиграно до победителя: {}", finished);
    println!("Всего раздач: {}", total_hands);
    println!("Шоудаунов: {} (сплитов {})", total_showdowns, total_splits);
    println!("Максимальный банк: {}", max_pot);
    println!("Ошибок инвариантов: {}", failures);
    println!("===========================================");
    println!("chip_tracker_stress: завершено.");

    if failures > 0 {
        std::process::exit(1);
    }
}
