use serde::{Deserialize, Serialize};

use crate::domain::{
    Blinds, Chips, HandResult, Phase, PlayerStats, PotOdds, SeatIndex, Street,
};
use crate::engine::{LastAction, LogEntry, RaiseOption, TableEvent};

use super::errors::ApiError;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerView {
    pub seat: SeatIndex,
    pub name: String,
    pub bankroll: Chips,
    pub bet: Chips,
    pub total_buy_in: Chips,
    /// Банкролл + ставка − все закупки. Может быть отрицательным.
    pub net: i64,
    pub folded: bool,
    pub is_all_in: bool,
    pub is_active: bool,
    pub is_dealer: bool,
    pub stats: PlayerStats,
}

/// DTO стола: состояние плюс всё, что UI иначе считал бы сам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableView {
    pub phase: Phase,
    pub street: Street,
    /// "Pre-Flop", "Flop", ...
    pub street_label: String,
    pub round: u32,
    pub blinds: Blinds,
    /// Банк прошлых улиц.
    pub pot: Chips,
    /// Банк вместе со ставками текущей улицы.
    pub pot_total: Chips,
    pub current_bet: Chips,
    pub min_raise: Chips,
    /// Кто ходит (только во время торговли).
    pub active_seat: Option<SeatIndex>,
    pub dealer_seat: SeatIndex,
    /// Сколько нужно доплатить активному игроку.
    pub to_call: Chips,
    pub burn_card_pending: bool,
    pub players: Vec<PlayerView>,
    pub valid_raises: Vec<RaiseOption>,
    pub pot_odds: Option<PotOdds>,
    pub chip_leader: Option<SeatIndex>,
    pub average_stack: Chips,
    pub total_chips: Chips,
    pub can_undo: bool,
    pub game_over: bool,
    pub last_result: Option<HandResult>,
    pub last_action: Option<LastAction>,
    pub hand_log: Vec<LogEntry>,
}

/// Ответ единственной мутирующей точки входа.
///
/// Отклонённая команда тоже возвращает актуальное (нетронутое) состояние.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub view: TableView,
    #[serde(default)]
    pub events: Vec<TableEvent>,
}

impl CommandResponse {
    pub fn accepted(view: TableView, events: Vec<TableEvent>) -> Self {
        Self {
            ok: true,
            error: None,
            view,
            events,
        }
    }

    pub fn rejected(error: ApiError, view: TableView, events: Vec<TableEvent>) -> Self {
        Self {
            ok: false,
            error: Some(error),
            view,
            events,
        }
    }
}
