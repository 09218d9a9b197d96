use serde::{Deserialize, Serialize};

use crate::domain::ColumnId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Колонки с таким индексом нет.
    ColumnNotFound(ColumnId),

    /// Ход нарушает правила.
    IllegalMove(String),

    /// Ряд сейчас раздать нельзя (лимит, пустая колонка, мало карт).
    DealRefused(String),

    /// История пуста.
    NothingToUndo,

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidColumn(id) => ApiError::ColumnNotFound(id),
            EngineError::NothingToUndo => ApiError::NothingToUndo,
            EngineError::DrawQuotaExhausted { .. }
            | EngineError::EmptyColumn(_)
            | EngineError::Deck(_) => ApiError::DealRefused(err.to_string()),
            EngineError::InvalidConfig(_) => ApiError::BadRequest(err.to_string()),
            EngineError::SameColumn
            | EngineError::IndexOutOfRange { .. }
            | EngineError::FaceDownCard { .. }
            | EngineError::BrokenSequence { .. }
            | EngineError::RankMismatch { .. } => ApiError::IllegalMove(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
