use serde::{Deserialize, Serialize};

use crate::domain::ColumnId;

/// Команда верхнего уровня — всё, что меняет состояние партии.
///
/// UI переводит клики в эти команды: «выбрать карту (колонка, индекс)»
/// + «кликнуть по колонке назначения» = `Move`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую партию. С seed раскладка воспроизводима.
    NewGame { seed: Option<u64> },

    /// Перенести карты колонки `from` начиная с `index` в колонку `to`.
    Move(MoveCommand),

    /// Раздать дополнительный ряд.
    DealRow,

    /// Откатить последнее действие.
    Undo,
}

/// Перенос последовательности.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: ColumnId,
    pub index: usize,
    pub to: ColumnId,
}
