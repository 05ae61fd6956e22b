use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

/// Фаза игры за столом.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Игра ещё не начата (нет состава).
    #[default]
    Setup,
    /// Идёт торговля на одной из улиц.
    Betting,
    /// Торговля закончена, ждём, пока пользователь объявит победителя.
    Showdown,
    /// Раздача (или вся игра) завершена, банк выплачен.
    Result,
}

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Следующая улица; после ривера улиц нет.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Pre-Flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

/// Почему завершилась раздача / игра.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultReason {
    /// Все остальные сфолдили.
    Fold,
    /// Победитель объявлен на шоудауне.
    Win,
    /// Банк поделён.
    Tie,
    /// Остался последний игрок с фишками.
    Game,
    /// Кто-то вылетел, игра продолжается.
    Elimination,
}

/// Кого пользователь объявляет победителем на шоудауне.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Seat(SeatIndex),
    Tie,
}

/// Итог последней раздачи для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub message: String,
    /// Место победителя (None для сплита и сообщений о вылете).
    pub winner: Option<SeatIndex>,
    pub reason: ResultReason,
    /// Профит победителя (или средний профит на игрока при сплите).
    #[serde(default)]
    pub profit: i64,
}
