use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Street};

/// Запись лога раздачи: кто, что и на какой улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub index: u32,
    pub street: Street,
    pub player: String,
    /// "folds", "checks", "calls", "bets", "raises to", "ALL-IN".
    pub action: String,
    pub amount: Option<Chips>,
}

/// Лог действий текущей раздачи. Ограничен по длине, старые записи вытесняются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HandLog {
    pub entries: Vec<LogEntry>,
    /// Сквозной счётчик записей за раздачу (не сбрасывается при вытеснении).
    next_index: u32,
}

impl HandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        capacity: usize,
        street: Street,
        player: &str,
        action: &str,
        amount: Option<Chips>,
    ) {
        self.entries.push(LogEntry {
            index: self.next_index,
            street,
            player: player.to_string(),
            action: action.to_string(),
            amount,
        });
        self.next_index += 1;

        if self.entries.len() > capacity {
            let overflow = self.entries.len() - capacity;
            self.entries.drain(..overflow);
        }
    }

    /// Записи одной улицы в порядке поступления.
    pub fn for_street(&self, street: Street) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.street == street)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
