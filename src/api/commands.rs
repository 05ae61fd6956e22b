use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{Blinds, Chips, SeatIndex, SeatRequest, Winner};
use crate::engine::{EngineError, PlayerActionKind, PokerEngine};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда UI: ровно один переход на один жест пользователя.
///
/// В JSON имеет вид `{"action": "raise", "params": {"to": 40}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum Command {
    /// Начать игру. Без блайндов - из конфига или по бай-ину.
    StartGame {
        players: Vec<SeatRequest>,
        #[serde(default)]
        blinds: Option<Blinds>,
    },
    PostBlinds,
    Fold,
    Check,
    Call,
    /// Поднять ставку до итоговой суммы `to`.
    Raise { to: Chips },
    AllIn,
    AcknowledgeBurnCard,
    DeclareWinner { winner: Winner },
    NextHand,
    Undo,
    ResetGame,
    Rematch,
    Rebuy { seat: SeatIndex, amount: Chips },
    ClearSeriesStats,
}

/// Запрос к мутирующей точке входа: поля команды лежат на верхнем уровне,
/// `{"action": "call", "actor": 0}`.
///
/// `actor` необязателен: если указан и это не активное место,
/// действие отклоняется с `OutOfTurn`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommandRequest {
    #[serde(flatten)]
    pub command: Command,
    #[serde(default)]
    pub actor: Option<SeatIndex>,
}

impl From<Command> for CommandRequest {
    fn from(command: Command) -> Self {
        Self {
            command,
            actor: None,
        }
    }
}

/// Выполнить команду и вернуть новое состояние стола.
pub fn execute(engine: &mut PokerEngine, request: CommandRequest) -> CommandResponse {
    debug!("Команда: {:?}", request.command);

    let result = apply(engine, request.command, request.actor);
    let events = engine.drain_events();
    let view = build_table_view(engine);

    match result {
        Ok(()) => CommandResponse::accepted(view, events),
        Err(err) => {
            warn!("Команда отклонена: {}", err);
            CommandResponse::rejected(err.into(), view, events)
        }
    }
}

/// То же, что `execute`, но запрос приходит сырым JSON.
pub fn execute_json(engine: &mut PokerEngine, raw: &str) -> CommandResponse {
    match serde_json::from_str::<CommandRequest>(raw) {
        Ok(request) => execute(engine, request),
        Err(err) => {
            warn!("Некорректный запрос: {}", err);
            CommandResponse::rejected(ApiError::from(err), build_table_view(engine), Vec::new())
        }
    }
}

fn apply(engine: &mut PokerEngine, command: Command, actor: Option<SeatIndex>) -> Result<(), EngineError> {
    match command {
        Command::StartGame { players, blinds } => engine.start_game(&players, blinds),
        Command::PostBlinds => engine.post_blinds(),
        Command::Fold => act(engine, actor, PlayerActionKind::Fold),
        Command::Check => act(engine, actor, PlayerActionKind::Check),
        Command::Call => act(engine, actor, PlayerActionKind::Call),
        Command::Raise { to } => act(engine, actor, PlayerActionKind::Raise(to)),
        Command::AllIn => act(engine, actor, PlayerActionKind::AllIn),
        Command::AcknowledgeBurnCard => engine.acknowledge_burn_card(),
        Command::DeclareWinner { winner } => engine.declare_winner(winner),
        Command::NextHand => engine.next_hand(),
        Command::Undo => engine.undo(),
        Command::ResetGame => {
            engine.reset_game();
            Ok(())
        }
        Command::Rematch => engine.rematch(),
        Command::Rebuy { seat, amount } => engine.rebuy(seat, amount),
        Command::ClearSeriesStats => {
            engine.clear_series_stats();
            Ok(())
        }
    }
}

fn act(engine: &mut PokerEngine, actor: Option<SeatIndex>, kind: PlayerActionKind) -> Result<(), EngineError> {
    match actor {
        Some(seat) => engine.act_as(seat, kind),
        None => engine.act(kind),
    }
}
