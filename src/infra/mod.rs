//! Инфраструктурный слой вокруг движка:
//! - хранилище сохранённой игры (память / JSON-файлы);
//! - RNG-реализации для автоигры;
//! - автоигра для стресс-тестов.

pub mod autoplay;
pub mod persistence;
pub mod rng;

pub use autoplay::{check_invariants, pick_action, play_session, step, AutoplayError, SessionStats, StepOutcome};
pub use persistence::{
    load_game, save_game, InMemoryStore, JsonFileStore, KeyValueStore, SavedGame, StorageError, POKER_KEY,
};
pub use rng::{ActionRng, DeterministicRng, SystemRng};
