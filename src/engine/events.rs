use serde::{Deserialize, Serialize};

use crate::domain::{Chips, ResultReason, SeatIndex, Street};
use crate::engine::actions::PlayerActionKind;

/// Категория звука для аудио-коллаборатора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Push,
    Lose,
    Win,
    Deal,
    Chip,
}

/// Побочные уведомления о переходах. Для корректности не нужны,
/// их потребляют звук, анимации и синхронизация.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    GameStarted {
        players: usize,
        small_blind: Chips,
        big_blind: Chips,
    },

    HandStarted {
        round: u32,
        dealer: SeatIndex,
    },

    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    PlayerActed {
        seat: SeatIndex,
        action: PlayerActionKind,
        /// Сколько фишек реально ушло из банкролла.
        paid: Chips,
    },

    StreetChanged {
        street: Street,
    },

    BurnCardAcknowledged {
        street: Option<Street>,
    },

    ShowdownReached {
        pot: Chips,
    },

    PotAwarded {
        seat: SeatIndex,
        amount: Chips,
        reason: ResultReason,
    },

    PotSplit {
        shares: Vec<(SeatIndex, Chips)>,
    },

    PlayersEliminated {
        names: Vec<String>,
    },

    GameFinished {
        winner: String,
    },

    Rebuy {
        seat: SeatIndex,
        amount: Chips,
    },

    Undone,

    GameReset,
}

impl TableEvent {
    /// Какой звук проиграть на это событие.
    pub fn cue(&self) -> SoundCue {
        match self {
            TableEvent::PlayerActed {
                action: PlayerActionKind::Fold,
                ..
            } => SoundCue::Lose,
            TableEvent::PotAwarded {
                reason: ResultReason::Fold,
                ..
            } => SoundCue::Push,
            TableEvent::PotAwarded { .. } | TableEvent::GameFinished { .. } => SoundCue::Win,
            TableEvent::BurnCardAcknowledged { .. } => SoundCue::Deal,
            TableEvent::Rebuy { .. } => SoundCue::Chip,
            _ => SoundCue::Push,
        }
    }
}
