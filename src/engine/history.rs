use serde::{Deserialize, Serialize};

use crate::domain::{Card, ColumnId, FoundationId};

/// Сборка полной масти, случившаяся как следствие хода или раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Completion {
    /// Из какой колонки ушли 13 карт.
    pub column: ColumnId,
    /// В какой слот они легли.
    pub foundation: FoundationId,
    /// Открылась ли после этого закрытая карта колонки.
    pub revealed: bool,
}

/// Запись в стеке отмены.
///
/// Карты хранятся снимками по значению, колонки — индексами,
/// так что запись не ссылается на живое состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HistoryEntry {
    /// Дополнительный ряд: `cards[i]` ушла в колонку `i`.
    Deal {
        cards: Vec<Card>,
        completions: Vec<Completion>,
    },

    /// Перенос последовательности.
    Move {
        from: ColumnId,
        to: ColumnId,
        cards: Vec<Card>,
        /// Перевернулась ли верхняя карта источника после переноса.
        revealed_source: bool,
        completions: Vec<Completion>,
    },
}

/// Стек отмены (LIFO).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
