use crate::domain::{Chips, SeatIndex, TableState};

/// Завершён ли раунд ставок на текущей улице:
/// - в раздаче остался максимум один игрок, или
/// - каждый, кто может ходить, уже сходил и уравнял текущую ставку.
///
/// Игроки в олл-ине из проверки исключаются.
pub fn is_round_complete(table: &TableState) -> bool {
    if table.count_in_hand() <= 1 {
        return true;
    }

    table
        .players
        .iter()
        .filter(|p| p.can_act())
        .all(|p| p.acted && p.bet >= table.current_bet)
}

/// Обновить состояние после того, как место `seat` подняло ставку до `new_total`:
/// - current_bet / min_raise / last_aggressor;
/// - сбросить `acted` остальным, кто ещё может ходить.
///
/// Неполный рейз (меньше min_raise, бывает только олл-ином) min_raise не
/// меняет. Открывает ли он торговлю заново - решает `reopen_on_short`.
pub fn on_raise(table: &mut TableState, seat: SeatIndex, new_total: Chips, reopen_on_short: bool) {
    if new_total <= table.current_bet {
        return;
    }

    let raise_size = new_total - table.current_bet;
    let full_raise = raise_size >= table.min_raise;

    if full_raise || reopen_on_short {
        for (idx, p) in table.players.iter_mut().enumerate() {
            if idx != seat && p.can_act() {
                p.acted = false;
            }
        }
    }

    table.last_aggressor = Some(seat);
    if full_raise {
        table.min_raise = raise_size;
    }
    table.current_bet = new_total;
}

/// Сброс торговых полей улицы (без переноса ставок в банк).
pub fn reset_street_betting(table: &mut TableState) {
    for p in table.players.iter_mut() {
        p.acted = false;
    }
    table.current_bet = Chips::ZERO;
    table.min_raise = table.blinds.big;
    table.last_aggressor = None;
}
