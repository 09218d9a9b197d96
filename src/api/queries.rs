use serde::{Deserialize, Serialize};

use crate::domain::ColumnId;
use crate::engine::Game;

use super::dto::{BoardViewDto, CardDto, ColumnDto, FoundationDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полное состояние стола для отрисовки.
    Board,

    /// Какие карты поедут, если взять колонку `column` с индекса `index`.
    MovableSequence { column: ColumnId, index: usize },

    /// Легален ли перенос (для подсветки целей при drag'n'drop).
    CanMove {
        from: ColumnId,
        index: usize,
        to: ColumnId,
    },

    /// Выиграна ли партия.
    IsWon,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Board(BoardViewDto),
    /// Пустой список — «здесь нечего брать».
    MovableSequence(Vec<CardDto>),
    CanMove(bool),
    IsWon(bool),
}

/// Сформировать DTO стола.
pub fn build_board_view(game: &Game) -> BoardViewDto {
    BoardViewDto {
        columns: game.columns().iter().map(ColumnDto::from).collect(),
        foundations: game.foundations().iter().map(FoundationDto::from).collect(),
        deck_remaining: game.deck().len(),
        moves: game.moves(),
        deal_count: game.deal_count(),
        max_draws: game.max_draws(),
        can_deal: game.can_deal_additional_row(),
        can_undo: game.can_undo(),
        is_won: game.is_game_won(),
    }
}

/// Ответить на запрос по текущей партии.
pub fn answer_query(game: &Game, query: &Query) -> QueryResponse {
    match *query {
        Query::Board => QueryResponse::Board(build_board_view(game)),
        Query::MovableSequence { column, index } => QueryResponse::MovableSequence(
            game.get_movable_sequence(column, index)
                .iter()
                .map(CardDto::from)
                .collect(),
        ),
        Query::CanMove { from, index, to } => {
            QueryResponse::CanMove(game.can_move_card(from, index, to))
        }
        Query::IsWon => QueryResponse::IsWon(game.is_game_won()),
    }
}
