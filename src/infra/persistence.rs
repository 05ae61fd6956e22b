use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Phase, SeriesLedger, TableState};
use crate::engine::{EngineConfig, PokerEngine};

/// Логический ключ, под которым лежит сохранённая игра.
pub const POKER_KEY: &str = "poker";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("повреждённые данные: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Абстракция хранилища: строка по ключу.
///
/// Ошибка сохранения не откатывает уже выполненный переход движка.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Хранилище на диске: один файл `<key>.json` на ключ в каталоге `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Каталог создаётся при необходимости.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Что уходит в хранилище. История undo не сохраняется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SavedGame {
    pub table: TableState,
    pub series: SeriesLedger,
}

impl SavedGame {
    pub fn from_engine(engine: &PokerEngine) -> Self {
        Self {
            table: engine.table().clone(),
            series: engine.series().clone(),
        }
    }

    /// Привести частично заполненные/устаревшие данные к безопасным значениям.
    pub fn sanitize(&mut self) {
        let t = &mut self.table;
        if t.players.is_empty() {
            if t.phase != Phase::Setup || t.game_started {
                warn!("Сохранение без игроков: сбрасываем стол в setup");
            }
            t.phase = Phase::Setup;
            t.game_started = false;
        }
        let n = t.players.len();
        if t.active_player_index >= n.max(1) {
            warn!("active_player_index {} вне стола, сбрасываем в 0", t.active_player_index);
            t.active_player_index = 0;
        }
        if t.dealer_index >= n.max(1) {
            warn!("dealer_index {} вне стола, сбрасываем в 0", t.dealer_index);
            t.dealer_index = 0;
        }
    }

    pub fn into_engine(self, config: EngineConfig) -> PokerEngine {
        PokerEngine::from_parts(config, self.table, self.series)
    }
}

pub fn save_game(store: &mut impl KeyValueStore, engine: &PokerEngine) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&SavedGame::from_engine(engine))?;
    store.put(POKER_KEY, &raw)?;
    debug!("Игра сохранена ({} байт)", raw.len());
    Ok(())
}

/// Загрузить игру. `Ok(None)` - сохранения нет.
pub fn load_game(store: &impl KeyValueStore) -> Result<Option<SavedGame>, StorageError> {
    let Some(raw) = store.get(POKER_KEY)? else {
        return Ok(None);
    };
    let mut saved: SavedGame = serde_json::from_str(&raw)?;
    saved.sanitize();
    Ok(Some(saved))
}
