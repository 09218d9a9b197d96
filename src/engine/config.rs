use serde::{Deserialize, Serialize};

use crate::domain::{COLUMN_COUNT, DECK_SIZE, ROW_SIZE};
use crate::engine::errors::EngineError;

/// Стандартная стартовая раскладка: первые 4 колонки по 6 карт, остальные 6 по 5.
pub const DEFAULT_LAYOUT: [usize; COLUMN_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Стандартное число дополнительных раздач (50 карт / 10 колонок).
pub const DEFAULT_MAX_DRAWS: u32 = 5;

/// Конфиг партии: стартовая раскладка, лимит раздач и правило пустых колонок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Сколько карт получает каждая колонка при старте.
    pub initial_layout: [usize; COLUMN_COUNT],
    /// Сколько раз за партию можно раздать дополнительный ряд.
    pub max_draws: u32,
    /// Запрещать раздачу, если есть пустая колонка (классическое правило).
    pub block_deal_on_empty_column: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_layout: DEFAULT_LAYOUT,
            max_draws: DEFAULT_MAX_DRAWS,
            block_deal_on_empty_column: true,
        }
    }
}

impl GameConfig {
    /// Сколько карт уходит на стартовую раскладку.
    pub fn initial_card_count(&self) -> usize {
        self.initial_layout.iter().sum()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.initial_layout.iter().any(|&n| n == 0) {
            return Err(EngineError::InvalidConfig(
                "каждая колонка должна получить хотя бы одну карту",
            ));
        }
        let needed = self.initial_card_count() + self.max_draws as usize * ROW_SIZE;
        if needed > DECK_SIZE {
            return Err(EngineError::InvalidConfig(
                "раскладке и дополнительным раздачам не хватает карт колоды",
            ));
        }
        Ok(())
    }
}
