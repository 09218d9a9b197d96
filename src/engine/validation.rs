use crate::domain::{Card, Column, ColumnId, ColumnTop, COLUMN_COUNT};
use crate::engine::errors::EngineError;
use crate::engine::sequence::movable_sequence;

/// Проверка, можно ли перенести карты колонки `from` начиная с `index` в колонку `to`.
///
/// При успехе возвращает переносимую последовательность.
pub fn validate_move<'a>(
    columns: &'a [Column; COLUMN_COUNT],
    from: ColumnId,
    index: usize,
    to: ColumnId,
) -> Result<&'a [Card], EngineError> {
    let run = validate_source(columns, from, index)?;
    let target = columns.get(to).ok_or(EngineError::InvalidColumn(to))?;
    if from == to {
        return Err(EngineError::SameColumn);
    }

    match target.top() {
        // На плейсхолдер можно класть любую корректную последовательность.
        ColumnTop::Placeholder => Ok(run),
        ColumnTop::Card(top) => {
            let moving = run[0].rank;
            if top.rank.pred() == Some(moving) {
                Ok(run)
            } else {
                Err(EngineError::RankMismatch {
                    moving,
                    target: top.rank,
                })
            }
        }
    }
}

/// Проверка только источника: есть ли с `index` подвижная последовательность.
pub fn validate_source(
    columns: &[Column; COLUMN_COUNT],
    from: ColumnId,
    index: usize,
) -> Result<&[Card], EngineError> {
    let source = columns.get(from).ok_or(EngineError::InvalidColumn(from))?;
    let card = source.get(index).ok_or(EngineError::IndexOutOfRange {
        column: from,
        index,
    })?;
    if !card.face_up {
        return Err(EngineError::FaceDownCard { column: from, index });
    }

    let run = movable_sequence(&source.cards, index);
    if run.is_empty() {
        return Err(EngineError::BrokenSequence { column: from, index });
    }
    Ok(run)
}
