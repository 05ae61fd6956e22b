use crate::domain::{Chips, SeatIndex};

use thiserror::Error;

/// Почему сумма не подходит.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("сумма должна быть положительной")]
    Zero,

    #[error("ставка должна быть выше текущей ({current_bet})")]
    NotAboveCurrentBet { current_bet: Chips },

    #[error("недостаточно фишек: нужно {needed}, в банкролле {bankroll}")]
    ExceedsBankroll { needed: Chips, bankroll: Chips },

    #[error("рейз слишком мал: минимум до {min_total}")]
    BelowMinRaise { min_total: Chips },

    #[error("некорректные блайнды: {0}")]
    InvalidBlinds(String),
}

/// Ошибки движка. Любая ошибка означает, что состояние не изменилось.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Действие невозможно в текущей фазе/ситуации.
    #[error("недопустимое действие: {0}")]
    IllegalAction(&'static str),

    #[error("недопустимая сумма: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("сейчас ход места {expected}, а не {got}")]
    OutOfTurn { expected: SeatIndex, got: SeatIndex },

    #[error("недостаточно игроков: {0}, нужно минимум 2")]
    InsufficientPlayers(usize),

    #[error("слишком много игроков: {0}")]
    TooManyPlayers(usize),

    #[error("место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("нечего отменять")]
    NothingToUndo,

    #[error("игра уже окончена")]
    GameOver,
}
