use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::tableau::{Column, Foundation};
use crate::engine::{DealOutcome, MoveOutcome, UndoOutcome};

use super::errors::ApiError;

/// DTO карты. У закрытой карты ранг и масть не раскрываются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub face_up: bool,
    pub rank: Option<u8>,
    pub suit: Option<Suit>,
    /// Готовая подпись для UI: "Ks", "Th" или "##".
    pub label: String,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        if card.face_up {
            CardDto {
                face_up: true,
                rank: Some(card.rank.value()),
                suit: Some(card.suit),
                label: card.to_string(),
            }
        } else {
            CardDto {
                face_up: false,
                rank: None,
                suit: None,
                label: card.to_string(),
            }
        }
    }
}

/// DTO колонки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDto {
    pub cards: Vec<CardDto>,
    /// Колонка пуста: UI рисует плейсхолдер, на который можно положить что угодно.
    pub placeholder: bool,
}

impl From<&Column> for ColumnDto {
    fn from(column: &Column) -> Self {
        ColumnDto {
            cards: column.cards.iter().map(CardDto::from).collect(),
            placeholder: column.has_placeholder(),
        }
    }
}

/// DTO foundation-слота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundationDto {
    pub filled: bool,
    pub suit: Option<Suit>,
}

impl From<&Foundation> for FoundationDto {
    fn from(f: &Foundation) -> Self {
        FoundationDto {
            filled: f.is_filled(),
            suit: f.suit(),
        }
    }
}

/// DTO всего стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardViewDto {
    pub columns: Vec<ColumnDto>,
    pub foundations: Vec<FoundationDto>,
    pub deck_remaining: usize,
    pub moves: u32,
    pub deal_count: u32,
    pub max_draws: u32,
    pub can_deal: bool,
    pub can_undo: bool,
    pub is_won: bool,
}

/// Что сделала команда (для анимаций/статус-бара).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionDto {
    NewGame,
    Moved(MoveOutcome),
    Dealt(DealOutcome),
    Undone(UndoOutcome),
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Команда выполнена, вот новое состояние стола.
    Applied {
        action: ActionDto,
        board: BoardViewDto,
    },

    /// Команда отклонена; состояние не менялось.
    Rejected(ApiError),
}
