//! Трекер фишек для живой игры в техасский холдем.
//!
//! Карты раздаются вручную за реальным столом; библиотека ведёт только
//! фишки: блайнды, ставки, банк, выплаты, вылеты, серии игр и undo.
//!
//! Слои:
//! - `domain` – типы данных стола;
//! - `engine` – машина состояний торговли;
//! - `api` – команды/ответы для UI;
//! - `infra` – хранилище, RNG, автоигра.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use engine::{EngineConfig, EngineError, PokerEngine};
