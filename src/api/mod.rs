//! Внешний API движка для слоя отрисовки.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (ход, раздача, undo, новая партия);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для UI;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - сессия (session.rs) — владелец партии, через которого UI вызывает движок.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod session;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use session::GameSession;
