// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Блайнды игры. Фиксированы на всю игру, эскалации нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl Default for Blinds {
    fn default() -> Self {
        Blinds::new(Chips(5), Chips(10))
    }
}

impl Blinds {
    pub fn new(small: Chips, big: Chips) -> Self {
        Self { small, big }
    }

    /// Оба блайнда положительные, большой не меньше малого.
    /// (1/1 на микро-бай-инах допустимо.)
    pub fn validate(&self) -> Result<(), String> {
        if self.small.is_zero() {
            return Err("small_blind = 0".to_string());
        }
        if self.big.is_zero() {
            return Err("big_blind = 0".to_string());
        }
        if self.big < self.small {
            return Err(format!(
                "big_blind ({}) < small_blind ({})",
                self.big, self.small
            ));
        }
        Ok(())
    }

    /// Подбор блайндов по стартовому стеку: ориентир 50–100 BB на старте.
    pub fn for_buy_in(buy_in: Chips) -> Blinds {
        let (sb, bb) = match buy_in.0 {
            0..=20 => (1, 1),
            21..=100 => (1, 2),
            101..=200 => (2, 5),
            201..=1000 => (5, 10),
            1001..=2000 => (10, 20),
            _ => (25, 50),
        };
        Blinds::new(Chips(sb), Chips(bb))
    }
}
