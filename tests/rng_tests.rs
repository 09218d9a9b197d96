//! RNG tests for spider-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие раскладок
//! - что shuffle не теряет и не дублирует карты
//! - работу Deck + shuffle + RandomSource

use spider_engine::domain::deck::{Deck, DECK_SIZE};
use spider_engine::engine::{Game, RandomSource};
use spider_engine::infra::{DeterministicRng, SystemRng};

fn sorted_labels(deck: &Deck) -> Vec<String> {
    let mut v: Vec<String> = deck
        .cards
        .iter()
        .map(|c| format!("{:?}{:?}", c.rank, c.suit))
        .collect();
    v.sort();
    v
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..104).collect();
    let mut b: Vec<u32> = (0..104).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..104).collect();
    let mut b: Vec<u32> = (0..104).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — Deck.shuffle keeps the multiset of cards
//
#[test]
fn deck_shuffle_is_a_permutation() {
    let ordered = Deck::two_suit();
    let mut deck = ordered.clone();
    deck.shuffle(&mut DeterministicRng::from_seed(999));

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, ordered, "shuffle should change the order");
    assert_eq!(sorted_labels(&deck), sorted_labels(&ordered));
}

//
// TEST 4 — a seeded game is reproducible
//
#[test]
fn seeded_games_are_reproducible() {
    let g1 = Game::new(&mut DeterministicRng::from_seed(7));
    let g2 = Game::new(&mut DeterministicRng::from_seed(7));
    let g3 = Game::new(&mut DeterministicRng::from_seed(8));

    assert_eq!(g1.columns(), g2.columns());
    assert_eq!(g1.deck(), g2.deck());
    assert_ne!(g1.columns(), g3.columns());
}

//
// TEST 5 — SystemRng games still hold all 104 cards
//
#[test]
fn system_rng_game_holds_every_card() {
    let game = Game::new(&mut SystemRng);
    let on_table: usize = game.columns().iter().map(|c| c.len()).sum();
    assert_eq!(on_table + game.deck().len(), DECK_SIZE);
}

//
// TEST 6 — shuffling an empty slice does not panic
//
#[test]
fn shuffle_empty_slice_is_fine() {
    let mut empty: Vec<u8> = Vec::new();
    DeterministicRng::from_seed(1).shuffle(&mut empty);
    SystemRng.shuffle(&mut empty);
    assert!(empty.is_empty());
}
