use crate::domain::{ColumnId, DeckError, Rank};

use thiserror::Error;

/// Ошибки движка «Паука».
///
/// Ни одна из них не фатальна: булевы обёртки в `Game` превращают их в `false`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Колонка {0} не существует")]
    InvalidColumn(ColumnId),

    #[error("Нельзя перенести карты в ту же колонку")]
    SameColumn,

    #[error("В колонке {column} нет карты с индексом {index}")]
    IndexOutOfRange { column: ColumnId, index: usize },

    #[error("Карта {index} в колонке {column} закрыта")]
    FaceDownCard { column: ColumnId, index: usize },

    #[error("Карты с индекса {index} в колонке {column} не образуют одномастную последовательность")]
    BrokenSequence { column: ColumnId, index: usize },

    #[error("Карту ранга {moving:?} нельзя положить на {target:?}")]
    RankMismatch { moving: Rank, target: Rank },

    #[error("Лимит дополнительных раздач ({max_draws}) исчерпан")]
    DrawQuotaExhausted { max_draws: u32 },

    #[error("Нельзя раздавать, пока колонка {0} пуста")]
    EmptyColumn(ColumnId),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("Нечего отменять")]
    NothingToUndo,

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(&'static str),
}
