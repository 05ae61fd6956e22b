use crate::domain::{Chips, SeatIndex, TableState};

/// Собрать ставки улицы в банк. Возвращает, сколько было собрано.
pub fn sweep_bets(table: &mut TableState) -> Chips {
    let mut collected = Chips::ZERO;
    for p in table.players.iter_mut() {
        collected += p.bet;
        p.bet = Chips::ZERO;
    }
    table.pot += collected;
    collected
}

/// Забрать весь банк (включая несобранные ставки) со стола.
/// После вызова pot = 0 и все ставки = 0.
pub fn take_all(table: &mut TableState) -> Chips {
    sweep_bets(table);
    let total = table.pot;
    table.pot = Chips::ZERO;
    total
}

/// Поровну поделить `total` между местами `seats`.
/// Остаток раздаётся по одной фишке, начиная с первого места в списке.
pub fn split_evenly(total: Chips, seats: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    if seats.is_empty() {
        return Vec::new();
    }

    let n = seats.len() as u64;
    let share = total.0 / n;
    let mut remainder = total.0 % n;

    seats
        .iter()
        .map(|&seat| {
            let extra = if remainder > 0 {
                remainder -= 1;
                1
            } else {
                0
            };
            (seat, Chips(share + extra))
        })
        .collect()
}
