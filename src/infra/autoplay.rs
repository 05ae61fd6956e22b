//! Автоигра: случайные, но легальные действия за всех игроков.
//!
//! Используется стресс-бинарником и тестами для прогона длинных сессий
//! с проверкой сохранения фишек.

use log::{debug, info};
use thiserror::Error;

use crate::domain::{Chips, Phase, SeatIndex, SeatRequest, Winner};
use crate::engine::{EngineError, PlayerActionKind, PokerEngine};
use crate::infra::rng::ActionRng;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("шаг {step}: фишек стало {actual}, ожидалось {expected}")]
    ChipsNotConserved {
        step: usize,
        expected: Chips,
        actual: Chips,
    },

    #[error("шаг {step}: ход у места {seat}, которое не может ходить")]
    IllegalTurn { step: usize, seat: SeatIndex },
}

/// Что произошло за один шаг автоигры.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Acted(PlayerActionKind),
    BurnAcknowledged,
    WinnerDeclared(Winner),
    HandStarted,
    /// Игра окончена, шагать больше некуда.
    GameOver,
}

/// Итоги сессии для статистики.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub steps: usize,
    pub hands: u32,
    pub showdowns: u32,
    pub splits: u32,
    pub max_pot: Chips,
    pub finished: bool,
    pub winner: Option<String>,
}

/// Выбрать случайное действие для активного игрока.
/// None - сейчас не время торговли.
pub fn pick_action(engine: &PokerEngine, rng: &mut impl ActionRng) -> Option<PlayerActionKind> {
    let table = engine.table();
    if table.phase != Phase::Betting || table.burn_card_pending {
        return None;
    }
    let player = table.active_player()?;
    let to_call = player.to_call(table.current_bet);
    let raises = engine.valid_raises();
    let roll = rng.below(100);

    let action = if to_call.is_zero() {
        match roll {
            0..=59 => PlayerActionKind::Check,
            60..=94 if !raises.is_empty() => {
                let pick = rng.below(raises.len() as u64) as usize;
                PlayerActionKind::Raise(raises[pick].amount)
            }
            60..=94 => PlayerActionKind::Check,
            _ => PlayerActionKind::AllIn,
        }
    } else {
        match roll {
            0..=14 => PlayerActionKind::Fold,
            15..=74 => PlayerActionKind::Call,
            75..=94 if !raises.is_empty() => {
                let pick = rng.below(raises.len() as u64) as usize;
                PlayerActionKind::Raise(raises[pick].amount)
            }
            75..=94 => PlayerActionKind::Call,
            _ => PlayerActionKind::AllIn,
        }
    };
    Some(action)
}

/// Один шаг: действие, сжигание, объявление победителя или новая раздача.
pub fn step(engine: &mut PokerEngine, rng: &mut impl ActionRng) -> Result<StepOutcome, EngineError> {
    let phase = engine.table().phase;
    let burn_pending = engine.table().burn_card_pending;
    let game_over = engine.table().is_game_over();

    match phase {
        Phase::Setup => Err(EngineError::IllegalAction("игра не начата")),

        Phase::Betting if burn_pending => {
            engine.acknowledge_burn_card()?;
            Ok(StepOutcome::BurnAcknowledged)
        }

        Phase::Betting => {
            let action = pick_action(engine, rng).unwrap_or(PlayerActionKind::Call);
            match engine.act(action) {
                Ok(()) => Ok(StepOutcome::Acted(action)),
                Err(err) => {
                    // Строгие правила олл-ина могут запретить повышение: откатываемся на колл.
                    debug!("Автоигра: {:?} отклонено ({}), играем колл", action, err);
                    engine.act(PlayerActionKind::Call)?;
                    Ok(StepOutcome::Acted(PlayerActionKind::Call))
                }
            }
        }

        Phase::Showdown => {
            let contenders: Vec<SeatIndex> = engine
                .table()
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_in_hand())
                .map(|(i, _)| i)
                .collect();
            let winner = if contenders.len() > 1 && rng.chance(10) {
                Winner::Tie
            } else {
                let pick = rng.below(contenders.len() as u64) as usize;
                Winner::Seat(contenders.get(pick).copied().unwrap_or_default())
            };
            engine.declare_winner(winner)?;
            Ok(StepOutcome::WinnerDeclared(winner))
        }

        Phase::Result if game_over => Ok(StepOutcome::GameOver),

        Phase::Result => {
            engine.new_round()?;
            if engine.table().is_game_over() {
                Ok(StepOutcome::GameOver)
            } else {
                Ok(StepOutcome::HandStarted)
            }
        }
    }
}

/// Сыграть сессию от старта до конца игры (или до `max_steps`).
///
/// После каждого шага проверяются сохранение фишек и легальность хода.
pub fn play_session(
    engine: &mut PokerEngine,
    seats: &[SeatRequest],
    rng: &mut impl ActionRng,
    max_steps: usize,
) -> Result<SessionStats, AutoplayError> {
    engine.start_game(seats, None)?;
    let expected = engine.table().total_chips_in_play();

    let mut stats = SessionStats {
        hands: 1,
        ..SessionStats::default()
    };

    while stats.steps < max_steps {
        stats.steps += 1;
        let pot_before = engine.table().pot_total();

        let outcome = step(engine, rng)?;
        check_invariants(engine, stats.steps, expected)?;

        match outcome {
            StepOutcome::WinnerDeclared(winner) => {
                stats.showdowns += 1;
                if winner == Winner::Tie {
                    stats.splits += 1;
                }
                stats.max_pot = stats.max_pot.max(pot_before);
            }
            StepOutcome::Acted(_) if engine.table().phase == Phase::Result => {
                stats.max_pot = stats.max_pot.max(pot_before);
            }
            StepOutcome::HandStarted => stats.hands += 1,
            StepOutcome::GameOver => {
                stats.finished = true;
                stats.winner = engine
                    .table()
                    .last_result
                    .as_ref()
                    .and_then(|r| r.winner)
                    .and_then(|seat| engine.table().players.get(seat))
                    .map(|p| p.name.clone());
                break;
            }
            _ => {}
        }
    }

    info!(
        "Сессия: шагов {}, раздач {}, шоудаунов {}, окончена: {}",
        stats.steps, stats.hands, stats.showdowns, stats.finished
    );
    Ok(stats)
}

/// Сохранение фишек и «ход только у того, кто может ходить».
pub fn check_invariants(engine: &PokerEngine, step: usize, expected: Chips) -> Result<(), AutoplayError> {
    let table = engine.table();
    let actual = table.total_chips_in_play();
    if actual != expected {
        return Err(AutoplayError::ChipsNotConserved {
            step,
            expected,
            actual,
        });
    }

    if table.phase == Phase::Betting && !table.burn_card_pending {
        let legal = table.active_player().map(|p| p.can_act()).unwrap_or(false);
        if !legal {
            return Err(AutoplayError::IllegalTurn {
                step,
                seat: table.active_player_index,
            });
        }
    }
    Ok(())
}
