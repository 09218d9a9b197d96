//! Движок правил двухмастного «Паука» (Spider Solitaire).
//!
//! Слой UI сюда не входит: крейт отдаёт read-only состояние стола
//! и мутаторы (ход, раздача ряда, undo), а перевод кликов в вызовы —
//! забота фронтенда.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use engine::{new_game, Game};
