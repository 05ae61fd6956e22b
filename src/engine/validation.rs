use crate::domain::{Chips, Phase, Player, TableState};
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::{AmountError, EngineError};

/// Проверка, может ли активный игрок выполнить действие при текущем состоянии.
///
/// Ничего не меняет; движок вызывает её до снапшота, поэтому отказ
/// гарантированно оставляет состояние нетронутым.
pub fn validate_action(
    table: &TableState,
    action: &PlayerActionKind,
    reopen_on_short_all_in: bool,
) -> Result<(), EngineError> {
    if table.phase != Phase::Betting {
        return Err(EngineError::IllegalAction("торговля сейчас не идёт"));
    }
    if table.burn_card_pending {
        return Err(EngineError::IllegalAction("сначала подтвердите сжигание карты"));
    }

    let player = table
        .active_player()
        .ok_or(EngineError::InvalidSeat(table.active_player_index))?;

    if !player.can_act() {
        return Err(EngineError::IllegalAction("игрок не может ходить"));
    }

    let to_call = player.to_call(table.current_bet);

    match action {
        PlayerActionKind::Fold => Ok(()),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(EngineError::IllegalAction("нельзя чекать: есть ставка для колла"))
            }
        }

        // Колл без ставки превращается в чек, колл на всё - в олл-ин.
        PlayerActionKind::Call => Ok(()),

        PlayerActionKind::Raise(total_bet) => {
            validate_raise(table, player, *total_bet)?;
            ensure_action_reopened(player, reopen_on_short_all_in)
        }

        PlayerActionKind::AllIn => {
            if player.bankroll.is_zero() {
                return Err(EngineError::InvalidAmount(AmountError::Zero));
            }
            if player.stack_with_bet() > table.current_bet {
                ensure_action_reopened(player, reopen_on_short_all_in)?;
            }
            Ok(())
        }
    }
}

/// Правила суммы для raise(to: total_bet).
fn validate_raise(table: &TableState, player: &Player, total_bet: Chips) -> Result<(), EngineError> {
    if total_bet.is_zero() {
        return Err(AmountError::Zero.into());
    }
    if total_bet <= table.current_bet {
        return Err(AmountError::NotAboveCurrentBet {
            current_bet: table.current_bet,
        }
        .into());
    }

    let to_add = total_bet - player.bet;
    if to_add > player.bankroll {
        return Err(AmountError::ExceedsBankroll {
            needed: to_add,
            bankroll: player.bankroll,
        }
        .into());
    }

    // Минимальный рейз обязателен всем, кроме идущих олл-ин.
    let raise_size = total_bet - table.current_bet;
    if to_add < player.bankroll && raise_size < table.min_raise {
        return Err(AmountError::BelowMinRaise {
            min_total: table.current_bet + table.min_raise,
        }
        .into());
    }

    Ok(())
}

/// При строгих правилах игрок, уже сходивший против неполного олл-ина,
/// может только колл/фолд.
fn ensure_action_reopened(player: &Player, reopen_on_short_all_in: bool) -> Result<(), EngineError> {
    if !reopen_on_short_all_in && player.acted {
        return Err(EngineError::IllegalAction(
            "неполный олл-ин не открывает повторное повышение",
        ));
    }
    Ok(())
}
