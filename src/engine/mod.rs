//! Движок трекера фишек: ставки, переход улиц, банк, шоудаун, undo.
//!
//! Высокоуровневый объект: `PokerEngine`
//! Основные операции:
//!   - `start_game` / `post_blinds` – начать игру и раздачу
//!   - `act` / `act_as` – действие активного игрока
//!   - `acknowledge_burn_card` – снять паузу перед новой улицей
//!   - `declare_winner` / `new_round` – шоудаун и следующая раздача
//!   - `undo` – откат последнего перехода

pub mod actions;
pub mod betting;
pub mod config;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod raise_advisor;
pub mod undo;
pub mod validation;

pub use actions::{LastAction, PlayerActionKind};
pub use config::{ConfigError, EngineConfig};
pub use errors::{AmountError, EngineError};
pub use events::{SoundCue, TableEvent};
pub use game_loop::{PokerEngine, MAX_PENDING_EVENTS};
pub use hand_history::{HandLog, LogEntry};
pub use raise_advisor::{valid_raises, ChipHint, RaiseOption};
pub use undo::UndoHistory;
