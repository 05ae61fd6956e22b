//! Подсказки размеров рейза для кнопок UI.
//!
//! Это только совет: `PokerEngine::raise` сам проверяет любую сумму.

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Street, TableState};

/// Цвет фишки на кнопке (подсказка для отрисовки).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChipHint {
    White,
    Red,
    Blue,
    Green,
    Orange,
    Gold,
    Black,
}

/// Один вариант рейза: подпись, итоговая ставка, подсказка цвета.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaiseOption {
    pub label: String,
    pub amount: Chips,
    pub hint: ChipHint,
}

/// Множители текущей ставки, когда игрок сталкивается со ставкой.
const BET_MULTIPLIERS: [(u64, &str, ChipHint); 4] = [
    (2, "2×", ChipHint::Red),
    (3, "3×", ChipHint::Blue),
    (4, "4×", ChipHint::Green),
    (5, "5×", ChipHint::Orange),
];

/// Доли банка для открывающей ставки: (числитель, знаменатель).
const POT_FRACTIONS: [(u64, u64, &str, ChipHint); 6] = [
    (1, 4, "¼ Pot", ChipHint::White),
    (1, 3, "⅓ Pot", ChipHint::White),
    (1, 2, "½ Pot", ChipHint::Red),
    (2, 3, "⅔ Pot", ChipHint::Blue),
    (3, 4, "¾ Pot", ChipHint::Blue),
    (1, 1, "Pot", ChipHint::Gold),
];

/// Кратные большого блайнда на префлопе.
const BB_MULTIPLES: [(u64, ChipHint); 5] = [
    (2, ChipHint::White),
    (3, ChipHint::Red),
    (4, ChipHint::Blue),
    (5, ChipHint::Green),
    (10, ChipHint::Black),
];

/// Набор предлагаемых рейзов для активного игрока.
///
/// Все суммы зажимаются в `[current_bet + min_raise, bet + bankroll]`,
/// дубли по сумме отбрасываются (остаётся первая подпись), результат
/// отсортирован по возрастанию.
pub fn valid_raises(table: &TableState) -> Vec<RaiseOption> {
    let Some(player) = table.active_player() else {
        return Vec::new();
    };

    let min_total = table.current_bet + table.min_raise;
    let max_total = player.stack_with_bet();

    if max_total <= table.current_bet {
        return Vec::new();
    }

    let to_call = player.to_call(table.current_bet);
    let pot = table.pot_total();

    let mut candidates: Vec<(String, Chips, ChipHint)> = vec![("Min".to_string(), min_total, ChipHint::White)];

    if !table.current_bet.is_zero() {
        for (k, label, hint) in BET_MULTIPLIERS {
            candidates.push((label.to_string(), table.current_bet.times(k), hint));
        }
        candidates.push(("Pot".to_string(), table.current_bet + pot + to_call, ChipHint::Gold));
    } else {
        if !pot.is_zero() {
            for (num, den, label, hint) in POT_FRACTIONS {
                candidates.push((label.to_string(), pot.fraction(num, den), hint));
            }
        }
        if table.street == Street::Preflop {
            for (k, hint) in BB_MULTIPLES {
                let amount = table.blinds.big.times(k);
                candidates.push((format!("${}", amount), amount, hint));
            }
        }
    }

    let mut options: Vec<RaiseOption> = Vec::with_capacity(candidates.len());
    for (label, amount, hint) in candidates {
        let amount = clamp(amount, min_total, max_total);
        if amount.is_zero() || options.iter().any(|o| o.amount == amount) {
            continue;
        }
        options.push(RaiseOption { label, amount, hint });
    }

    options.sort_by_key(|o| o.amount);
    options
}

/// Зажать в диапазон; если минимум недостижим, остаётся только олл-ин.
fn clamp(amount: Chips, min_total: Chips, max_total: Chips) -> Chips {
    if min_total >= max_total {
        return max_total;
    }
    amount.max(min_total).min(max_total)
}
