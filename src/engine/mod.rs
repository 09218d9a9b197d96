//! Движок «Паука»: раскладка, поиск последовательностей, ходы, сборка мастей, undo.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `Game::new` – перемешать колоду и сдать стартовую раскладку
//!   - `can_move_card` / `move_sequence` – проверить и выполнить перенос
//!   - `deal_additional_row` – раздать ряд из колоды
//!   - `undo_last_move` – откатить последнее действие

pub mod config;
pub mod errors;
pub mod game;
pub mod game_log;
pub mod history;
pub mod sequence;
pub mod validation;

pub use config::{GameConfig, DEFAULT_LAYOUT, DEFAULT_MAX_DRAWS};
pub use errors::EngineError;
pub use game::{new_game, DealOutcome, Game, MoveOutcome, UndoOutcome};
pub use game_log::{GameEvent, GameEventKind, GameLog};
pub use history::{Completion, HistoryEntry, MoveHistory};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
