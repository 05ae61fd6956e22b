use std::collections::VecDeque;

use crate::domain::TableState;

/// Стек снапшотов для undo: кольцевой буфер ограниченной длины.
///
/// Каждый снапшот - полная глубокая копия `TableState` до мутации.
#[derive(Clone, Debug)]
pub struct UndoHistory {
    snapshots: VecDeque<TableState>,
    capacity: usize,
}

impl UndoHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Положить снапшот; самый старый вытесняется при переполнении.
    pub fn push(&mut self, snapshot: TableState) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<TableState> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
