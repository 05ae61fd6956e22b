use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Blinds;

/// Ошибки загрузки/проверки конфигурации движка.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Настройки движка. Любое отсутствующее поле берётся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Глубина undo (снапшотов в кольцевом буфере).
    pub max_history: usize,
    /// Сколько записей держит лог раздачи.
    pub hand_log_capacity: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// `true`: любой олл-ин, поднявший ставку, заново открывает торговлю для
    /// остальных (так ведёт себя исходное приложение).
    /// `false`: неполный олл-ин-рейз (меньше min_raise) не даёт повторно
    /// повышать тем, кто уже ходил.
    pub short_all_in_reopens_action: bool,
    /// Блайнды по умолчанию; None - подбирать по бай-ину.
    pub default_blinds: Option<Blinds>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_history: 20,
            hand_log_capacity: 50,
            min_players: 2,
            max_players: 8,
            short_all_in_reopens_action: true,
            default_blinds: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_players = {}, нужно минимум 2",
                self.min_players
            )));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) < min_players ({})",
                self.max_players, self.min_players
            )));
        }
        if self.hand_log_capacity == 0 {
            return Err(ConfigError::Invalid("hand_log_capacity = 0".to_string()));
        }
        if let Some(blinds) = &self.default_blinds {
            blinds.validate().map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }

    /// Разобрать JSON и сразу проверить.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}
