use serde::{Deserialize, Serialize};

use crate::domain::blinds::Blinds;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandResult, Phase, ResultReason, Street};
use crate::domain::player::Player;
use crate::engine::actions::LastAction;
use crate::engine::hand_history::HandLog;

/// Индекс места за столом (позиция в `players`, порядок рассадки фиксирован).
pub type SeatIndex = usize;

/// Шансы банка для игрока, которому нужно уравнять.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PotOdds {
    /// (банк + колл) / колл, например 3.0 = «3 к 1».
    pub ratio: f64,
    /// Сколько процентов эквити нужно для безубыточного колла.
    pub percentage: f64,
    pub to_call: Chips,
    /// Банк вместе с несобранными ставками улицы.
    pub pot: Chips,
}

/// Основное состояние стола: единственный изменяемый агрегат игры.
///
/// Всё, что видит UI и что уходит в хранилище, лежит здесь. Undo хранит
/// полные копии этой структуры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableState {
    /// Игроки в порядке рассадки. Порядок не меняется, вылетевшие только удаляются.
    pub players: Vec<Player>,
    /// Банк, собранный с прошлых улиц (без ставок текущей улицы).
    pub pot: Chips,
    pub phase: Phase,
    pub street: Street,
    pub active_player_index: SeatIndex,
    pub dealer_index: SeatIndex,
    pub blinds: Blinds,
    /// Максимальная ставка на текущей улице.
    pub current_bet: Chips,
    /// Минимальный шаг повышения.
    pub min_raise: Chips,
    /// Кто последним ставил/повышал на этой улице.
    pub last_aggressor: Option<SeatIndex>,
    pub blinds_posted: bool,
    /// Торговля на паузе, пока пользователь не подтвердит сжигание/раздачу карты.
    pub burn_card_pending: bool,
    pub burn_card_street: Option<Street>,
    pub last_result: Option<HandResult>,
    pub last_action: Option<LastAction>,
    /// Номер раздачи (1 - первая раздача игры).
    pub round: u32,
    pub game_started: bool,
    pub hand_log: HandLog,
}

impl Default for TableState {
    fn default() -> Self {
        let blinds = Blinds::default();
        Self {
            players: Vec::new(),
            pot: Chips::ZERO,
            phase: Phase::Setup,
            street: Street::Preflop,
            active_player_index: 0,
            dealer_index: 0,
            blinds,
            current_bet: Chips::ZERO,
            min_raise: blinds.big,
            last_aggressor: None,
            blinds_posted: false,
            burn_card_pending: false,
            burn_card_street: None,
            last_result: None,
            last_action: None,
            round: 0,
            game_started: false,
            hand_log: HandLog::default(),
        }
    }
}

impl TableState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active_player_index)
    }

    /// Сколько игроков ещё претендуют на банк.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Сколько игроков ещё могут делать ставки.
    pub fn count_can_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Первое (по рассадке) место, не сфолдившее в этой раздаче.
    pub fn first_in_hand(&self) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.is_in_hand())
    }

    /// Сумма ставок текущей улицы.
    pub fn total_bets(&self) -> Chips {
        self.players.iter().map(|p| p.bet).sum()
    }

    /// Банк вместе с несобранными ставками текущей улицы.
    pub fn pot_total(&self) -> Chips {
        self.pot + self.total_bets()
    }

    /// Все фишки в игре: банкроллы + ставки + банк.
    pub fn total_chips_in_play(&self) -> Chips {
        self.players.iter().map(|p| p.stack_with_bet()).sum::<Chips>() + self.pot
    }

    /// Лидер по фишкам (банкролл + ставка). При равенстве - первый по рассадке.
    pub fn chip_leader(&self) -> Option<SeatIndex> {
        let mut best: Option<(SeatIndex, Chips)> = None;
        for (idx, p) in self.players.iter().enumerate() {
            let stack = p.stack_with_bet();
            match best {
                Some((_, top)) if top >= stack => {}
                _ => best = Some((idx, stack)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Средний стек игроков с фишками.
    pub fn average_stack(&self) -> Chips {
        let alive: Vec<Chips> = self
            .players
            .iter()
            .map(|p| p.stack_with_bet())
            .filter(|c| !c.is_zero())
            .collect();
        if alive.is_empty() {
            return Chips::ZERO;
        }
        Chips(alive.iter().sum::<Chips>().0 / alive.len() as u64)
    }

    /// Шансы банка для активного игрока. None, если уравнивать нечего.
    pub fn pot_odds(&self) -> Option<PotOdds> {
        let player = self.active_player()?;
        let to_call = player.to_call(self.current_bet);
        if to_call.is_zero() {
            return None;
        }

        let pot = self.pot_total();
        let after_call = pot + to_call;
        Some(PotOdds {
            ratio: after_call.0 as f64 / to_call.0 as f64,
            percentage: to_call.0 as f64 / after_call.0 as f64 * 100.0,
            to_call,
            pot,
        })
    }

    /// Игра закончена: остался один игрок с фишками.
    pub fn is_game_over(&self) -> bool {
        matches!(
            self.last_result,
            Some(HandResult {
                reason: ResultReason::Game,
                ..
            })
        )
    }
}
