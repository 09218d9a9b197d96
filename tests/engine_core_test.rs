use spider_engine::domain::{
    card::{Card, Rank, Suit},
    deck::{Deck, DECK_SIZE},
    tableau::{ColumnTop, COLUMN_COUNT, FOUNDATION_COUNT},
};
use spider_engine::engine::{
    config::{GameConfig, DEFAULT_LAYOUT},
    errors::EngineError,
    game_log::GameEventKind,
    sequence::{is_complete_run, movable_sequence},
    Game, RandomSource,
};
use spider_engine::infra::DeterministicRng;

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в порядке построения.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn col(list: &str) -> Vec<Card> {
    list.split_whitespace()
        .map(|s| s.parse().expect("parse card"))
        .collect()
}

fn empty_layout() -> [Vec<Card>; COLUMN_COUNT] {
    Default::default()
}

//
// Стартовая раскладка
//
#[test]
fn initial_deal_layout_and_face_state() {
    let game = Game::new(&mut DeterministicRng::from_seed(2024));

    let sizes: Vec<usize> = game.columns().iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![6, 6, 6, 6, 5, 5, 5, 5, 5, 5]);
    assert_eq!(sizes.iter().sum::<usize>(), 54);
    assert_eq!(game.deck().len(), 50);

    for column in game.columns() {
        let (last, rest) = column.cards.split_last().unwrap();
        assert!(last.face_up, "top card must be face-up");
        assert!(rest.iter().all(|c| !c.face_up), "all others face-down");
    }

    assert_eq!(game.foundations().len(), FOUNDATION_COUNT);
    assert!(game.foundations().iter().all(|f| !f.is_filled()));
    assert_eq!(game.moves(), 0);
    assert_eq!(game.deal_count(), 0);
    assert_eq!(game.max_draws(), 5);
    assert_eq!(game.remaining_draws(), 5);
    assert!(!game.can_undo());
    assert!(!game.is_game_won());
}

#[test]
fn initial_deal_consumes_deck_in_order() {
    let game = Game::new(&mut DummyRng);
    let ordered = Deck::two_suit();

    // Колонки заполняются по очереди из начала колоды.
    let mut on_table: Vec<(Rank, Suit)> = Vec::new();
    for column in game.columns() {
        on_table.extend(column.cards.iter().map(|c| (c.rank, c.suit)));
    }
    let expected: Vec<(Rank, Suit)> = ordered.cards[..54]
        .iter()
        .map(|c| (c.rank, c.suit))
        .collect();
    assert_eq!(on_table, expected);

    // Остаток колоды — следующие 50 карт, всё ещё закрытые.
    assert_eq!(&game.deck().cards[..], &ordered.cards[54..]);
    assert_eq!(game.columns()[0].top(), ColumnTop::Card("6s".parse().unwrap()));
}

#[test]
fn game_started_is_logged() {
    let game = Game::new(&mut DummyRng);
    let first = &game.log().events[0];
    assert_eq!(first.index, 0);
    assert_eq!(
        first.kind,
        GameEventKind::GameStarted {
            dealt: 54,
            deck_remaining: 50
        }
    );
}

//
// Конфиг
//
#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.initial_layout, DEFAULT_LAYOUT);
    assert_eq!(config.initial_card_count(), 54);
    assert!(config.block_deal_on_empty_column);
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let mut too_many_draws = GameConfig::default();
    too_many_draws.max_draws = 6;
    assert!(matches!(
        too_many_draws.validate(),
        Err(EngineError::InvalidConfig(_))
    ));

    let mut empty_column = GameConfig::default();
    empty_column.initial_layout[3] = 0;
    assert!(matches!(
        Game::with_config(empty_column, &mut DummyRng),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn alternative_layout_is_dealt() {
    let config = GameConfig {
        initial_layout: [5, 5, 5, 5, 5, 5, 6, 6, 6, 6],
        max_draws: 5,
        block_deal_on_empty_column: false,
    };
    let game = Game::with_config(config.clone(), &mut DummyRng).unwrap();
    assert_eq!(game.columns()[0].len(), 5);
    assert_eq!(game.columns()[9].len(), 6);
    assert_eq!(game.deck().len(), DECK_SIZE - 54);
    assert_eq!(game.config(), &config);
}

//
// Поиск последовательностей
//
#[test]
fn movable_sequence_rules() {
    // 9♠(закрыта) 8♠ 7♠ 6♥
    let cards = col("9s~ 8s 7s 6h");

    // С закрытой карты брать нельзя.
    assert!(movable_sequence(&cards, 0).is_empty());
    // Разрыв масти ниже 8♠ делает всю последовательность недействительной.
    assert!(movable_sequence(&cards, 1).is_empty());
    assert!(movable_sequence(&cards, 2).is_empty());
    // Верхняя карта всегда подвижна.
    assert_eq!(movable_sequence(&cards, 3), &col("6h")[..]);
    // Индекс за границей — пусто.
    assert!(movable_sequence(&cards, 4).is_empty());
    assert!(movable_sequence(&cards, usize::MAX).is_empty());

    let clean = col("9s~ 8s 7s");
    assert_eq!(movable_sequence(&clean, 1), &col("8s 7s")[..]);
}

#[test]
fn get_movable_sequence_through_game() {
    let mut layout = empty_layout();
    layout[0] = col("9s~ 8s 7s");
    layout[1] = col("Kh");
    let game = Game::from_layout(layout, Deck::from_cards(Vec::new()), GameConfig::default());

    assert_eq!(game.get_movable_sequence(0, 1), col("8s 7s"));
    assert!(game.get_movable_sequence(0, 0).is_empty());
    assert!(game.get_movable_sequence(2, 0).is_empty(), "empty column");
    assert!(game.get_movable_sequence(42, 0).is_empty(), "no such column");
}

#[test]
fn complete_run_needs_king_to_ace_in_one_suit() {
    assert!(is_complete_run(&col("Kh Qh Jh Th 9h 8h 7h 6h 5h 4h 3h 2h Ah")));
    assert!(!is_complete_run(&col("Qh Jh Th 9h 8h 7h 6h 5h 4h 3h 2h Ah")));
    assert!(!is_complete_run(&col("Kh Qh Jh Th 9h 8h 7h 6h 5h 4h 3h 2h As")));
}

#[test]
fn from_layout_reveals_tops_only() {
    let mut layout = empty_layout();
    layout[4] = col("5h~ 4s~");
    let game = Game::from_layout(layout, Deck::from_cards(Vec::new()), GameConfig::default());

    let column = &game.columns()[4];
    assert!(!column.cards[0].face_up);
    assert!(column.cards[1].face_up);
    assert_eq!(game.columns()[0].top(), ColumnTop::Placeholder);
}
