use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Статистика игрока по серии игр (между играми, по имени).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeriesStats {
    pub series_wins: u32,
    pub series_losses: u32,
    pub hands_won: u32,
    pub hands_lost: u32,
}

/// Сквозной учёт серий: имя игрока -> статистика.
///
/// Меняется только когда игра заканчивается вылетом всех, кроме одного.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SeriesLedger {
    entries: BTreeMap<String, SeriesStats>,
}

impl SeriesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Завести запись для имени, если её ещё нет.
    pub fn register(&mut self, name: &str) {
        self.entries.entry(name.to_string()).or_default();
    }

    pub fn get(&self, name: &str) -> Option<&SeriesStats> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SeriesStats)> {
        self.entries.iter()
    }

    /// Игра окончена: победителю +1 победа, всем остальным участникам +1 поражение.
    pub fn record_game<'a>(&mut self, winner: &str, participants: impl IntoIterator<Item = &'a str>) {
        self.entries
            .entry(winner.to_string())
            .or_default()
            .series_wins += 1;

        for name in participants {
            if name != winner {
                self.entries.entry(name.to_string()).or_default().series_losses += 1;
            }
        }
    }

    /// Добавить раздачи, выигранные/проигранные игроком за завершённую игру.
    pub fn record_hands(&mut self, name: &str, won: u32, lost: u32) {
        let entry = self.entries.entry(name.to_string()).or_default();
        entry.hands_won += won;
        entry.hands_lost += lost;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
