use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Счётчики раздач игрока за текущую игру (сбрасываются только новой игрой).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerStats {
    pub hands_won: u32,
    pub hands_lost: u32,
    pub hands_tied: u32,
}

/// Игрок за столом.
///
/// Поля делятся на два уровня жизни:
/// - игровые: `bankroll`, `total_buy_in`, `stats` - живут всю игру;
/// - раздачные: `bet`, `round_contribution`, `acted`, `folded`, `is_all_in` -
///   обнуляются в начале каждой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Player {
    /// Отображаемое имя. Не обязано быть уникальным.
    pub name: String,
    /// Фишки, которые сейчас не поставлены.
    pub bankroll: Chips,
    /// Сколько всего игрок закупил за игру (монотонно растёт).
    pub total_buy_in: Chips,
    /// Ставка на текущей улице.
    pub bet: Chips,
    /// Сколько игрок внёс в банк за всю раздачу (для профита при выплате).
    pub round_contribution: Chips,
    /// Ходил ли игрок на этой улице после последнего бета/рейза.
    pub acted: bool,
    pub folded: bool,
    pub is_all_in: bool,
    pub stats: PlayerStats,
}

impl Default for Player {
    fn default() -> Self {
        Player::new(String::new(), Chips::ZERO)
    }
}

impl Player {
    pub fn new(name: impl Into<String>, buy_in: Chips) -> Self {
        Self {
            name: name.into(),
            bankroll: buy_in,
            total_buy_in: buy_in,
            bet: Chips::ZERO,
            round_contribution: Chips::ZERO,
            acted: false,
            folded: false,
            is_all_in: false,
            stats: PlayerStats::default(),
        }
    }

    /// Игрок ещё претендует на банк (не сфолдил).
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Игрок может делать ставки: не сфолдил и не в олл-ине.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.is_all_in
    }

    /// Сколько нужно доплатить до текущей ставки стола.
    pub fn to_call(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.bet)
    }

    /// Стек вместе с фишками, уже поставленными на этой улице.
    pub fn stack_with_bet(&self) -> Chips {
        self.bankroll + self.bet
    }

    /// Переложить `amount` из банкролла в ставку. Возвращает реально внесённое
    /// (не больше банкролла); при обнулении банкролла игрок становится all-in.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.bankroll);
        self.bankroll -= paid;
        self.bet += paid;
        self.round_contribution += paid;
        if self.bankroll.is_zero() {
            self.is_all_in = true;
        }
        paid
    }

    /// Сброс раздачных полей перед новой раздачей.
    pub fn reset_for_hand(&mut self) {
        self.bet = Chips::ZERO;
        self.round_contribution = Chips::ZERO;
        self.acted = false;
        self.folded = false;
        self.is_all_in = false;
    }
}

/// Заявка на место при старте игры: имя и бай-ин.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatRequest {
    /// Пустое имя заменяется на "Player N".
    #[serde(default)]
    pub name: String,
    pub buy_in: Chips,
}

impl SeatRequest {
    pub fn new(name: impl Into<String>, buy_in: Chips) -> Self {
        Self {
            name: name.into(),
            buy_in,
        }
    }
}
