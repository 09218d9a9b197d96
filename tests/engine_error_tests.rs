// tests/engine_error_tests.rs
//
// Причины отказа: try_* возвращают конкретный вариант EngineError и не трогают стол.

use spider_engine::domain::{
    card::{Card, Rank},
    deck::{Deck, DeckError},
    tableau::COLUMN_COUNT,
};
use spider_engine::engine::{errors::EngineError, Game, GameConfig};

fn col(list: &str) -> Vec<Card> {
    list.split_whitespace()
        .map(|s| s.parse().expect("parse card"))
        .collect()
}

fn table() -> Game {
    let mut layout: [Vec<Card>; COLUMN_COUNT] = std::array::from_fn(|_| col("5h~ Qh"));
    layout[0] = col("Jh~ 9s~ 8s 7s");
    layout[1] = col("4h~ 9h 6h");
    Game::from_layout(layout, Deck::from_cards(Vec::new()), GameConfig::default())
}

#[test]
fn move_errors_name_the_reason() {
    let game = table();

    assert_eq!(
        game.validate_move(10, 0, 1),
        Err(EngineError::InvalidColumn(10))
    );
    assert_eq!(
        game.validate_move(0, 2, 99),
        Err(EngineError::InvalidColumn(99))
    );
    assert_eq!(game.validate_move(0, 2, 0), Err(EngineError::SameColumn));
    assert_eq!(
        game.validate_move(0, 4, 1),
        Err(EngineError::IndexOutOfRange {
            column: 0,
            index: 4
        })
    );
    assert_eq!(
        game.validate_move(0, 1, 2),
        Err(EngineError::FaceDownCard {
            column: 0,
            index: 1
        })
    );
    // 9h 6h — разрыв ранга.
    assert_eq!(
        game.validate_move(1, 1, 2),
        Err(EngineError::BrokenSequence {
            column: 1,
            index: 1
        })
    );
    // 8s на Qh.
    assert_eq!(
        game.validate_move(0, 2, 2),
        Err(EngineError::RankMismatch {
            moving: Rank::Eight,
            target: Rank::Queen
        })
    );
}

#[test]
fn rejected_move_keeps_table_untouched() {
    let mut game = table();
    let columns = game.columns().clone();
    let events = game.log().events.len();

    assert!(game.try_move_sequence(0, 2, 2).is_err());
    assert!(game.try_move_sequence(0, 1, 2).is_err());

    assert_eq!(game.columns(), &columns);
    assert_eq!(game.moves(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.log().events.len(), events);
}

#[test]
fn undo_without_history() {
    let mut game = table();
    assert_eq!(game.try_undo(), Err(EngineError::NothingToUndo));
}

#[test]
fn deal_errors() {
    // Колода пуста, колонки заполнены: упираемся в нехватку карт.
    let mut game = table();
    assert_eq!(
        game.try_deal_additional_row(),
        Err(EngineError::Deck(DeckError::InsufficientCards {
            requested: 10,
            remaining: 0
        }))
    );

    let mut config = GameConfig::default();
    config.max_draws = 0;
    let game = Game::from_layout(
        std::array::from_fn(|_| col("Qh")),
        Deck::two_suit(),
        config,
    );
    assert_eq!(
        game.check_deal(),
        Err(EngineError::DrawQuotaExhausted { max_draws: 0 })
    );
}

#[test]
fn deck_error_converts_into_engine_error() {
    let deck_err = DeckError::InsufficientCards {
        requested: 10,
        remaining: 3,
    };
    let err: EngineError = deck_err.clone().into();
    assert_eq!(err, EngineError::Deck(deck_err.clone()));
    // transparent: текст тот же, что у DeckError.
    assert_eq!(err.to_string(), deck_err.to_string());
}

#[test]
fn every_error_has_a_message() {
    let errors = [
        EngineError::InvalidColumn(3),
        EngineError::SameColumn,
        EngineError::IndexOutOfRange {
            column: 1,
            index: 9,
        },
        EngineError::FaceDownCard {
            column: 1,
            index: 0,
        },
        EngineError::BrokenSequence {
            column: 2,
            index: 1,
        },
        EngineError::RankMismatch {
            moving: Rank::Two,
            target: Rank::King,
        },
        EngineError::DrawQuotaExhausted { max_draws: 5 },
        EngineError::EmptyColumn(4),
        EngineError::NothingToUndo,
        EngineError::InvalidConfig("layout"),
    ];
    for err in errors {
        assert!(!err.to_string().is_empty(), "{err:?}");
    }
    assert!(EngineError::InvalidColumn(3).to_string().contains('3'));
}
