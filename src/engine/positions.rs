use crate::domain::{Player, SeatIndex, TableState};

/// Найти следующее по часовой место, удовлетворяющее условию.
/// Стартовое место проверяется последним (полный круг).
pub fn next_seat_where(
    table: &TableState,
    from: SeatIndex,
    pred: impl Fn(&Player) -> bool,
) -> Option<SeatIndex> {
    let n = table.players.len();
    if n == 0 {
        return None;
    }

    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&idx| pred(&table.players[idx]))
}

/// Следующее место, которое может ходить (не сфолдил, не в олл-ине).
pub fn next_active_seat(table: &TableState, from: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, from, Player::can_act)
}

/// Следующее несфолдившее место (олл-ин считается).
pub fn next_non_folded_seat(table: &TableState, from: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, from, Player::is_in_hand)
}

/// Места малого и большого блайнда.
///
/// - Хедз-ап: дилер ставит SB, соперник - BB.
/// - 3+ игроков: SB - следующий после дилера, BB - следующий после SB.
pub fn blind_seats(table: &TableState) -> Option<(SeatIndex, SeatIndex)> {
    if table.players.len() < 2 {
        return None;
    }

    let dealer = table.dealer_index;
    let sb = if table.players.len() == 2 {
        dealer
    } else {
        next_non_folded_seat(table, dealer)?
    };
    let bb = next_non_folded_seat(table, sb)?;
    Some((sb, bb))
}

/// Кто ходит первым на префлопе после постинга блайндов.
///
/// Хедз-ап - SB (он же дилер), иначе - первый после BB.
/// Если выбранное место уже в олл-ине, ищем следующее, кто может ходить.
pub fn first_to_act_preflop(table: &TableState, sb: SeatIndex, bb: SeatIndex) -> SeatIndex {
    let candidate = if table.players.len() == 2 {
        sb
    } else {
        next_active_seat(table, bb).unwrap_or(bb)
    };

    match table.players.get(candidate) {
        Some(p) if p.is_all_in => next_active_seat(table, candidate).unwrap_or(candidate),
        _ => candidate,
    }
}

/// Кто ходит первым на постфлопе: первое активное место после дилера.
pub fn first_to_act_postflop(table: &TableState) -> SeatIndex {
    next_active_seat(table, table.dealer_index).unwrap_or(table.dealer_index)
}

/// Новая кнопка после вылетов.
///
/// `old_dealer_new_pos` - позиция прежнего дилера в отфильтрованном составе
/// (None, если дилер вылетел); тогда берём старый индекс по модулю.
pub fn next_dealer(
    old_dealer_index: SeatIndex,
    old_dealer_new_pos: Option<SeatIndex>,
    survivors: usize,
) -> SeatIndex {
    if survivors == 0 {
        return 0;
    }
    let base = old_dealer_new_pos.unwrap_or(old_dealer_index % survivors);
    (base + 1) % survivors
}
