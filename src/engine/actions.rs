use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Тип действия игрока в торговле.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Bet или raise: итоговая ставка игрока на улице (не прибавка).
    Raise(Chips),
    /// All-in – поставить весь банкролл.
    AllIn,
}

impl PlayerActionKind {
    pub fn verb(&self) -> &'static str {
        match self {
            PlayerActionKind::Fold => "folds",
            PlayerActionKind::Check => "checks",
            PlayerActionKind::Call => "calls",
            PlayerActionKind::Raise(_) => "raises to",
            PlayerActionKind::AllIn => "ALL-IN",
        }
    }
}

/// Последнее действие за столом (для строки статуса в UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastAction {
    pub seat: SeatIndex,
    pub player: String,
    pub kind: PlayerActionKind,
    /// Сколько внесено (call) или до скольки поставлено (raise/all-in).
    pub amount: Option<Chips>,
}
