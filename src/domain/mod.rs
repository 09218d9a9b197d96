//! Доменная модель «Паука»: карты, колода, колонки и foundation-слоты.

pub mod card;
pub mod deck;
pub mod tableau;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use tableau::*;
