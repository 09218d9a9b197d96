use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::{ColumnId, FoundationId};

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия: стартовая раскладка сдана.
    GameStarted {
        dealt: usize,
        deck_remaining: usize,
    },

    /// Сдан дополнительный ряд.
    RowDealt {
        round: u32,
        cards: Vec<Card>,
    },

    /// Перенесена последовательность.
    SequenceMoved {
        from: ColumnId,
        to: ColumnId,
        count: usize,
        revealed_source: bool,
    },

    /// Собрана полная масть.
    SuitCompleted {
        column: ColumnId,
        foundation: FoundationId,
        suit: Suit,
    },

    /// Отменён перенос.
    MoveUndone {
        from: ColumnId,
        to: ColumnId,
        count: usize,
    },

    /// Отменена раздача ряда.
    DealUndone {
        round: u32,
    },

    /// Все 8 мастей собраны.
    GameWon {
        moves: u32,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Журнал партии. В отличие от стека отмены, только растёт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameLog {
    pub events: Vec<GameEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// События начиная с порядкового номера `from` (для инкрементального вывода).
    pub fn since(&self, from: u32) -> &[GameEvent] {
        let start = (from as usize).min(self.events.len());
        &self.events[start..]
    }
}
