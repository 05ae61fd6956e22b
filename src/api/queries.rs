use crate::domain::{Chips, Phase, TableState};
use crate::engine::PokerEngine;

use super::dto::{PlayerView, TableView};

/// Сформировать DTO стола на основе текущего состояния движка.
pub fn build_table_view(engine: &PokerEngine) -> TableView {
    let table = engine.table();
    let betting = table.phase == Phase::Betting;

    let active_seat = if betting && table.active_player().is_some() {
        Some(table.active_player_index)
    } else {
        None
    };

    let to_call = match (betting, table.active_player()) {
        (true, Some(p)) => p.to_call(table.current_bet),
        _ => Chips::ZERO,
    };

    // Подсказки только когда игрок реально может ставить.
    let valid_raises = if betting && !table.burn_card_pending {
        engine.valid_raises()
    } else {
        Vec::new()
    };
    let pot_odds = if betting { table.pot_odds() } else { None };

    TableView {
        phase: table.phase,
        street: table.street,
        street_label: table.street.label().to_string(),
        round: table.round,
        blinds: table.blinds,
        pot: table.pot,
        pot_total: table.pot_total(),
        current_bet: table.current_bet,
        min_raise: table.min_raise,
        active_seat,
        dealer_seat: table.dealer_index,
        to_call,
        burn_card_pending: table.burn_card_pending,
        players: build_players_view(table, active_seat),
        valid_raises,
        pot_odds,
        chip_leader: table.chip_leader(),
        average_stack: table.average_stack(),
        total_chips: table.total_chips_in_play(),
        can_undo: engine.can_undo(),
        game_over: table.is_game_over(),
        last_result: table.last_result.clone(),
        last_action: table.last_action.clone(),
        hand_log: table.hand_log.entries.clone(),
    }
}

/// Собрать DTO игроков за столом.
fn build_players_view(table: &TableState, active_seat: Option<usize>) -> Vec<PlayerView> {
    table
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| PlayerView {
            seat,
            name: p.name.clone(),
            bankroll: p.bankroll,
            bet: p.bet,
            total_buy_in: p.total_buy_in,
            net: p.stack_with_bet().signed_diff(p.total_buy_in),
            folded: p.folded,
            is_all_in: p.is_all_in,
            is_active: active_seat == Some(seat),
            is_dealer: table.game_started && seat == table.dealer_index,
            stats: p.stats.clone(),
        })
        .collect()
}
