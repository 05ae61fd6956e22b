use std::collections::VecDeque;

use log::{debug, info};

use crate::domain::{
    Blinds, Chips, HandResult, Phase, Player, ResultReason, SeatIndex, SeatRequest, SeriesLedger,
    Street, TableState, Winner,
};
use crate::engine::actions::{LastAction, PlayerActionKind};
use crate::engine::betting;
use crate::engine::config::EngineConfig;
use crate::engine::errors::{AmountError, EngineError};
use crate::engine::events::TableEvent;
use crate::engine::positions::{blind_seats, first_to_act_postflop, first_to_act_preflop, next_active_seat, next_dealer};
use crate::engine::pot;
use crate::engine::raise_advisor::{self, RaiseOption};
use crate::engine::undo::UndoHistory;
use crate::engine::validation::validate_action;

/// Сколько незабранных событий держит движок.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Движок покерного трекера фишек.
///
/// Владеет агрегатом `TableState`, стеком undo и учётом серий. Каждый
/// публичный переход либо целиком применяется, либо возвращает ошибку, не
/// трогая состояние. Действия всегда выполняются за `active_player_index`.
///
/// События копятся до `drain_events()`; если их не забирать, хранятся
/// только последние `MAX_PENDING_EVENTS`.
#[derive(Clone, Debug)]
pub struct PokerEngine {
    config: EngineConfig,
    table: TableState,
    history: UndoHistory,
    series: SeriesLedger,
    events: VecDeque<TableEvent>,
}

impl Default for PokerEngine {
    fn default() -> Self {
        PokerEngine::new(EngineConfig::default())
    }
}

impl PokerEngine {
    pub fn new(config: EngineConfig) -> Self {
        let history = UndoHistory::new(config.max_history);
        Self {
            config,
            table: TableState::default(),
            history,
            series: SeriesLedger::new(),
            events: VecDeque::new(),
        }
    }

    /// Восстановить движок из сохранённых частей (история undo не хранится).
    pub fn from_parts(config: EngineConfig, table: TableState, series: SeriesLedger) -> Self {
        let mut engine = PokerEngine::new(config);
        engine.table = table;
        engine.series = series;
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn series(&self) -> &SeriesLedger {
        &self.series
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Забрать накопившиеся события (звук, анимации, синхронизация).
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    /// Подсказки рейза для активного игрока.
    pub fn valid_raises(&self) -> Vec<RaiseOption> {
        if !self.config.short_all_in_reopens_action {
            if let Some(p) = self.table.active_player() {
                if p.acted {
                    return Vec::new();
                }
            }
        }
        raise_advisor::valid_raises(&self.table)
    }

    // ------------------------------------------------------------------
    // Игра целиком
    // ------------------------------------------------------------------

    /// Начать новую игру и сразу поставить блайнды первой раздачи.
    ///
    /// `blinds = None` - взять из конфига или подобрать по бай-ину первого игрока.
    pub fn start_game(&mut self, seats: &[SeatRequest], blinds: Option<Blinds>) -> Result<(), EngineError> {
        let n = seats.len();
        if n < self.config.min_players.max(2) {
            return Err(EngineError::InsufficientPlayers(n));
        }
        if n > self.config.max_players {
            return Err(EngineError::TooManyPlayers(n));
        }
        if seats.iter().any(|s| s.buy_in.is_zero()) {
            return Err(AmountError::Zero.into());
        }

        let blinds = blinds
            .or(self.config.default_blinds)
            .unwrap_or_else(|| Blinds::for_buy_in(seats[0].buy_in));
        blinds
            .validate()
            .map_err(|msg| EngineError::InvalidAmount(AmountError::InvalidBlinds(msg)))?;

        let players: Vec<Player> = seats
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let name = if s.name.trim().is_empty() {
                    format!("Player {}", i + 1)
                } else {
                    s.name.clone()
                };
                Player::new(name, s.buy_in)
            })
            .collect();

        for p in &players {
            self.series.register(&p.name);
        }

        self.table = TableState {
            players,
            phase: Phase::Betting,
            blinds,
            min_raise: blinds.big,
            round: 1,
            game_started: true,
            ..TableState::default()
        };
        self.history.clear();

        info!(
            "Игра начата: {} игроков, блайнды {}/{}",
            n, blinds.small, blinds.big
        );
        self.emit(TableEvent::GameStarted {
            players: n,
            small_blind: blinds.small,
            big_blind: blinds.big,
        });
        self.emit(TableEvent::HandStarted {
            round: self.table.round,
            dealer: self.table.dealer_index,
        });

        self.post_blinds()
    }

    /// Постинг блайндов. Повторный вызов в той же раздаче ничего не делает.
    pub fn post_blinds(&mut self) -> Result<(), EngineError> {
        if self.table.blinds_posted {
            return Ok(());
        }
        let n = self.table.player_count();
        if n < 2 {
            return Err(EngineError::InsufficientPlayers(n));
        }
        if self.table.phase != Phase::Betting {
            return Err(EngineError::IllegalAction("блайнды ставятся только в начале раздачи"));
        }

        let (sb, bb) = blind_seats(&self.table).ok_or(EngineError::InsufficientPlayers(n))?;

        self.push_snapshot();

        let blinds = self.table.blinds;
        let sb_paid = self.table.players[sb].commit(blinds.small);
        let bb_paid = self.table.players[bb].commit(blinds.big);

        for p in self.table.players.iter_mut() {
            p.acted = false;
        }
        self.table.current_bet = sb_paid.max(bb_paid);
        self.table.min_raise = blinds.big;
        self.table.last_aggressor = None;
        self.table.blinds_posted = true;
        self.table.active_player_index = first_to_act_preflop(&self.table, sb, bb);

        debug!(
            "Блайнды: SB место {} = {}, BB место {} = {}",
            sb, sb_paid, bb, bb_paid
        );
        self.emit(TableEvent::BlindsPosted {
            small_blind: (sb, sb_paid),
            big_blind: (bb, bb_paid),
        });

        // Все живые игроки ушли в олл-ин блайндами - торговли не будет.
        if self.table.count_can_act() == 0 {
            self.run_out_board();
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Действия игрока
    // ------------------------------------------------------------------

    /// Выполнить действие за активного игрока.
    pub fn act(&mut self, action: PlayerActionKind) -> Result<(), EngineError> {
        match action {
            PlayerActionKind::Fold => self.fold(),
            PlayerActionKind::Check => self.check(),
            PlayerActionKind::Call => self.call(),
            PlayerActionKind::Raise(total) => self.raise(total),
            PlayerActionKind::AllIn => self.all_in(),
        }
    }

    /// Действие с явно указанным местом: чужой ход отклоняется.
    pub fn act_as(&mut self, seat: SeatIndex, action: PlayerActionKind) -> Result<(), EngineError> {
        if self.table.phase == Phase::Betting && seat != self.table.active_player_index {
            return Err(EngineError::OutOfTurn {
                expected: self.table.active_player_index,
                got: seat,
            });
        }
        self.act(action)
    }

    pub fn fold(&mut self) -> Result<(), EngineError> {
        validate_action(&self.table, &PlayerActionKind::Fold, self.reopen_on_short())?;
        self.push_snapshot();

        let seat = self.table.active_player_index;
        {
            let p = &mut self.table.players[seat];
            p.folded = true;
            p.stats.hands_lost += 1;
        }
        self.record_action(seat, PlayerActionKind::Fold, None, Chips::ZERO);

        if self.table.count_in_hand() == 1 {
            if let Some(winner) = self.table.first_in_hand() {
                self.award_pot(winner, ResultReason::Fold);
            }
            return Ok(());
        }

        self.advance_action();
        Ok(())
    }

    pub fn check(&mut self) -> Result<(), EngineError> {
        validate_action(&self.table, &PlayerActionKind::Check, self.reopen_on_short())?;
        self.push_snapshot();

        let seat = self.table.active_player_index;
        self.table.players[seat].acted = true;
        self.record_action(seat, PlayerActionKind::Check, None, Chips::ZERO);

        self.advance_action();
        Ok(())
    }

    /// Колл. Если уравнивать нечего - это чек; если не хватает - колл на всё.
    pub fn call(&mut self) -> Result<(), EngineError> {
        validate_action(&self.table, &PlayerActionKind::Call, self.reopen_on_short())?;

        let seat = self.table.active_player_index;
        let to_call = self.table.players[seat].to_call(self.table.current_bet);
        if to_call.is_zero() {
            return self.check();
        }

        self.push_snapshot();

        let paid = {
            let p = &mut self.table.players[seat];
            let paid = p.commit(to_call);
            p.acted = true;
            paid
        };
        self.record_action(seat, PlayerActionKind::Call, Some(paid), paid);

        self.advance_action();
        Ok(())
    }

    /// Bet/raise до итоговой ставки `total_bet` на этой улице.
    pub fn raise(&mut self, total_bet: Chips) -> Result<(), EngineError> {
        let action = PlayerActionKind::Raise(total_bet);
        validate_action(&self.table, &action, self.reopen_on_short())?;
        self.push_snapshot();

        let seat = self.table.active_player_index;
        let opening = self.table.current_bet.is_zero();
        let paid = {
            let p = &mut self.table.players[seat];
            let paid = p.commit(total_bet - p.bet);
            p.acted = true;
            paid
        };

        let reopen = self.reopen_on_short();
        betting::on_raise(&mut self.table, seat, total_bet, reopen);

        let verb = if opening { "bets" } else { "raises to" };
        self.record_action_with_verb(seat, action, verb, Some(total_bet), paid);

        self.advance_action();
        Ok(())
    }

    /// Олл-ин: поставить весь банкролл.
    pub fn all_in(&mut self) -> Result<(), EngineError> {
        validate_action(&self.table, &PlayerActionKind::AllIn, self.reopen_on_short())?;
        self.push_snapshot();

        let seat = self.table.active_player_index;
        let (paid, total) = {
            let p = &mut self.table.players[seat];
            let paid = p.commit(p.bankroll);
            p.acted = true;
            (paid, p.bet)
        };

        // Олл-ин, не превысивший ставку, - это просто колл на всё.
        let reopen = self.reopen_on_short();
        betting::on_raise(&mut self.table, seat, total, reopen);

        self.record_action(seat, PlayerActionKind::AllIn, Some(total), paid);

        self.advance_action();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Улицы, сжигание карт, шоудаун
    // ------------------------------------------------------------------

    /// Пользователь сжёг/раздал карту - снимаем паузу.
    /// Если торговать уже некому, продолжаем прогон борда.
    pub fn acknowledge_burn_card(&mut self) -> Result<(), EngineError> {
        if !self.table.burn_card_pending {
            return Err(EngineError::IllegalAction("нет карты для сжигания"));
        }
        self.push_snapshot();

        let street = self.table.burn_card_street.take();
        self.table.burn_card_pending = false;
        self.emit(TableEvent::BurnCardAcknowledged { street });

        if self.table.count_can_act() <= 1 && self.table.phase == Phase::Betting {
            if self.table.street == Street::River {
                self.go_to_showdown();
            } else {
                self.run_out_board();
            }
        }

        Ok(())
    }

    /// Объявить победителя на шоудауне (карты сравнивает пользователь).
    pub fn declare_winner(&mut self, winner: Winner) -> Result<(), EngineError> {
        if self.table.phase != Phase::Showdown {
            return Err(EngineError::IllegalAction("победитель объявляется только на шоудауне"));
        }

        match winner {
            Winner::Seat(seat) => {
                let p = self.table.players.get(seat).ok_or(EngineError::InvalidSeat(seat))?;
                if p.folded {
                    return Err(EngineError::IllegalAction("сфолдивший игрок не может выиграть"));
                }
                self.push_snapshot();
                self.award_pot(seat, ResultReason::Win);
            }
            Winner::Tie => {
                if self.table.count_in_hand() == 0 {
                    return Err(EngineError::IllegalAction("некому делить банк"));
                }
                self.push_snapshot();
                self.split_pot();
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Раздачи, ребаи, сброс
    // ------------------------------------------------------------------

    /// Следующая раздача: убрать вылетевших, сдвинуть кнопку, поставить блайнды.
    /// Если с фишками остался один игрок - игра окончена.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        if self.table.is_game_over() {
            return Err(EngineError::GameOver);
        }
        if self.table.phase != Phase::Result {
            return Err(EngineError::IllegalAction("раздача ещё не завершена"));
        }

        let survivors: Vec<SeatIndex> = self
            .table
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.bankroll.is_zero())
            .map(|(i, _)| i)
            .collect();

        if survivors.len() <= 1 {
            self.finish_game(survivors.first().copied());
            return Ok(());
        }

        let eliminated: Vec<String> = self
            .table
            .players
            .iter()
            .filter(|p| p.bankroll.is_zero())
            .map(|p| p.name.clone())
            .collect();

        self.table.last_result = if eliminated.is_empty() {
            None
        } else {
            info!("Вылетели: {}", eliminated.join(", "));
            self.emit(TableEvent::PlayersEliminated {
                names: eliminated.clone(),
            });
            Some(HandResult {
                message: format!(
                    "{} eliminated. {} players remain.",
                    eliminated.join(", "),
                    survivors.len()
                ),
                winner: None,
                reason: ResultReason::Elimination,
                profit: 0,
            })
        };

        let old_dealer = self.table.dealer_index;
        let old_dealer_new_pos = survivors.iter().position(|&i| i == old_dealer);

        self.table.players.retain(|p| !p.bankroll.is_zero());
        for p in self.table.players.iter_mut() {
            p.reset_for_hand();
        }

        let t = &mut self.table;
        t.dealer_index = next_dealer(old_dealer, old_dealer_new_pos, t.players.len());
        t.round += 1;
        t.phase = Phase::Betting;
        t.street = Street::Preflop;
        t.pot = Chips::ZERO;
        t.current_bet = Chips::ZERO;
        t.min_raise = t.blinds.big;
        t.last_aggressor = None;
        t.blinds_posted = false;
        t.burn_card_pending = false;
        t.burn_card_street = None;
        t.last_action = None;
        t.active_player_index = 0;
        t.hand_log.clear();
        self.history.clear();

        info!(
            "Раздача #{}: дилер место {}, игроков {}",
            self.table.round,
            self.table.dealer_index,
            self.table.player_count()
        );
        self.emit(TableEvent::HandStarted {
            round: self.table.round,
            dealer: self.table.dealer_index,
        });

        self.post_blinds()
    }

    /// Синоним `new_round`.
    pub fn next_hand(&mut self) -> Result<(), EngineError> {
        self.new_round()
    }

    /// Докупка фишек. Нельзя посреди улицы, если у игрока есть ставка или он в олл-ине.
    pub fn rebuy(&mut self, seat: SeatIndex, amount: Chips) -> Result<(), EngineError> {
        if self.table.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let p = self.table.players.get(seat).ok_or(EngineError::InvalidSeat(seat))?;
        if amount.is_zero() {
            return Err(AmountError::Zero.into());
        }
        if self.table.phase == Phase::Betting && (!p.bet.is_zero() || p.is_all_in) {
            return Err(EngineError::IllegalAction(
                "нельзя докупаться, пока фишки игрока в игре",
            ));
        }

        self.push_snapshot();
        let p = &mut self.table.players[seat];
        p.bankroll += amount;
        p.total_buy_in += amount;

        info!("Ребай: место {} (+{})", seat, amount);
        self.emit(TableEvent::Rebuy { seat, amount });
        Ok(())
    }

    /// Реванш: те же имена и блайнды, каждому бай-ин первого игрока.
    pub fn rematch(&mut self) -> Result<(), EngineError> {
        let first = self
            .table
            .players
            .first()
            .ok_or(EngineError::InsufficientPlayers(0))?;
        let buy_in = first.total_buy_in;

        let seats: Vec<SeatRequest> = self
            .table
            .players
            .iter()
            .map(|p| SeatRequest::new(p.name.clone(), buy_in))
            .collect();
        let blinds = self.table.blinds;

        self.start_game(&seats, Some(blinds))
    }

    /// Полный сброс стола в setup. Блайнды и серии сохраняются.
    pub fn reset_game(&mut self) {
        let blinds = self.table.blinds;
        self.table = TableState {
            blinds,
            min_raise: blinds.big,
            ..TableState::default()
        };
        self.history.clear();
        info!("Стол сброшен");
        self.emit(TableEvent::GameReset);
    }

    pub fn clear_series_stats(&mut self) {
        self.series.clear();
    }

    /// Откатить последний переход. Повторные вызовы идут дальше назад.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let snapshot = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        self.table = snapshot;
        debug!("Undo: осталось снапшотов {}", self.history.len());
        self.emit(TableEvent::Undone);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Внутренние шаги (без собственных снапшотов)
    // ------------------------------------------------------------------

    fn reopen_on_short(&self) -> bool {
        self.config.short_all_in_reopens_action
    }

    fn emit(&mut self, event: TableEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn push_snapshot(&mut self) {
        self.history.push(self.table.clone());
    }

    fn record_action(&mut self, seat: SeatIndex, kind: PlayerActionKind, amount: Option<Chips>, paid: Chips) {
        self.record_action_with_verb(seat, kind, kind.verb(), amount, paid);
    }

    fn record_action_with_verb(
        &mut self,
        seat: SeatIndex,
        kind: PlayerActionKind,
        verb: &str,
        amount: Option<Chips>,
        paid: Chips,
    ) {
        let name = self.table.players[seat].name.clone();
        debug!("Место {} ({}): {} {:?}", seat, name, verb, amount);

        self.table.hand_log.push(
            self.config.hand_log_capacity,
            self.table.street,
            &name,
            verb,
            amount,
        );
        self.table.last_action = Some(LastAction {
            seat,
            player: name,
            kind,
            amount,
        });
        self.emit(TableEvent::PlayerActed {
            seat,
            action: kind,
            paid,
        });
    }

    /// Передать ход или закрыть раунд ставок.
    fn advance_action(&mut self) {
        if !betting::is_round_complete(&self.table) {
            let from = self.table.active_player_index;
            self.table.active_player_index = next_active_seat(&self.table, from).unwrap_or(from);
            return;
        }

        if self.table.count_in_hand() == 1 {
            if let Some(winner) = self.table.first_in_hand() {
                self.award_pot(winner, ResultReason::Fold);
            }
        } else if self.table.count_can_act() <= 1 {
            self.run_out_board();
        } else if self.table.street == Street::River {
            self.go_to_showdown();
        } else {
            self.next_street();
        }
    }

    fn next_street(&mut self) {
        pot::sweep_bets(&mut self.table);
        betting::reset_street_betting(&mut self.table);

        if let Some(next) = self.table.street.next() {
            self.table.street = next;
        }
        self.table.active_player_index = first_to_act_postflop(&self.table);
        self.table.burn_card_pending = true;
        self.table.burn_card_street = Some(self.table.street);

        debug!("Улица: {:?}, банк {}", self.table.street, self.table.pot);
        self.emit(TableEvent::StreetChanged {
            street: self.table.street,
        });
    }

    /// Прогон борда без торговли: по одной улице за раз, с паузой на сжигание.
    fn run_out_board(&mut self) {
        pot::sweep_bets(&mut self.table);
        betting::reset_street_betting(&mut self.table);

        match self.table.street.next() {
            Some(next) => {
                self.table.street = next;
                self.table.burn_card_pending = true;
                self.table.burn_card_street = Some(next);
                debug!("Прогон борда: {:?}", next);
                self.emit(TableEvent::StreetChanged { street: next });
            }
            None => self.go_to_showdown(),
        }
    }

    fn go_to_showdown(&mut self) {
        pot::sweep_bets(&mut self.table);
        self.table.phase = Phase::Showdown;

        debug!("Шоудаун, банк {}", self.table.pot);
        self.emit(TableEvent::ShowdownReached {
            pot: self.table.pot,
        });
    }

    /// Отдать весь банк одному игроку.
    fn award_pot(&mut self, winner: SeatIndex, reason: ResultReason) {
        let total = pot::take_all(&mut self.table);

        let (name, profit) = {
            let w = &mut self.table.players[winner];
            w.bankroll += total;
            w.stats.hands_won += 1;
            (w.name.clone(), total.signed_diff(w.round_contribution))
        };

        for (idx, p) in self.table.players.iter_mut().enumerate() {
            if idx != winner && p.is_in_hand() {
                p.stats.hands_lost += 1;
            }
        }

        let message = match reason {
            ResultReason::Fold => format!("{} wins +${}! (Others folded)", name, profit),
            _ => format!("{} wins +${}!", name, profit),
        };

        self.table.phase = Phase::Result;
        self.table.last_result = Some(HandResult {
            message,
            winner: Some(winner),
            reason,
            profit,
        });

        info!("Банк {} -> место {} ({:?})", total, winner, reason);
        self.emit(TableEvent::PotAwarded {
            seat: winner,
            amount: total,
            reason,
        });
    }

    /// Сплит: поровну между всеми несфолдившими, остаток по фишке с первого места.
    fn split_pot(&mut self) {
        let total = pot::take_all(&mut self.table);
        let seats: Vec<SeatIndex> = self
            .table
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_in_hand())
            .map(|(i, _)| i)
            .collect();

        let shares = pot::split_evenly(total, &seats);
        for &(seat, share) in &shares {
            let p = &mut self.table.players[seat];
            p.bankroll += share;
            p.stats.hands_tied += 1;
        }

        let n = seats.len() as u64;
        let share = Chips(total.0 / n);
        let avg_contribution = Chips(
            seats
                .iter()
                .map(|&i| self.table.players[i].round_contribution)
                .sum::<Chips>()
                .0
                / n,
        );
        let profit = share.signed_diff(avg_contribution);
        let sign = if profit >= 0 { "+" } else { "" };

        self.table.phase = Phase::Result;
        self.table.last_result = Some(HandResult {
            message: format!("Split Pot! {}${} each", sign, profit),
            winner: None,
            reason: ResultReason::Tie,
            profit,
        });

        info!("Сплит банка {} на {} игроков", total, n);
        self.emit(TableEvent::PotSplit { shares });
    }

    /// Конец игры: победитель в серию, состав не фильтруется (для реванша).
    fn finish_game(&mut self, winner: Option<SeatIndex>) {
        self.table.phase = Phase::Result;
        self.history.clear();

        let Some(winner) = winner else {
            // Фишек не осталось ни у кого: игра всё равно окончена.
            self.table.last_result = Some(HandResult {
                message: "GAME OVER".to_string(),
                winner: None,
                reason: ResultReason::Game,
                profit: 0,
            });
            return;
        };

        let name = self.table.players[winner].name.clone();
        let participants: Vec<String> = self.table.players.iter().map(|p| p.name.clone()).collect();
        self.series
            .record_game(&name, participants.iter().map(String::as_str));
        for p in &self.table.players {
            self.series
                .record_hands(&p.name, p.stats.hands_won, p.stats.hands_lost);
        }

        self.table.last_result = Some(HandResult {
            message: format!("{} WINS THE GAME!", name),
            winner: Some(winner),
            reason: ResultReason::Game,
            profit: 0,
        });

        info!("Игра окончена, победитель: {}", name);
        self.emit(TableEvent::GameFinished { winner: name });
    }
}
