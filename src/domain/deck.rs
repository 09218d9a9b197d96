use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Сколько карт в колоде двухмастного «Паука».
pub const DECK_SIZE: usize = 104;

/// Ошибки колоды.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Нельзя сдать {requested} карт: в колоде осталось {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// Колода (сток). Верх колоды — начало вектора: `deal` снимает карты с начала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Две двухмастные колоды: 2 × [♠, ♥, ♠, ♥] × A..K = 104 карты,
    /// каждая пара (ранг, масть) встречается 4 раза. Все карты рубашкой вверх.
    pub fn two_suit() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..2 {
            for suit in [Suit::Spades, Suit::Hearts, Suit::Spades, Suit::Hearts] {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Deck { cards }
    }

    /// Колода из заранее заданных карт (реплеи, тесты).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать оставшиеся карты.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Снять `n` карт сверху. Если карт не хватает — колода не трогается.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Вернуть карты наверх колоды в том же порядке (обратная операция к `deal`).
    pub fn return_to_top(&mut self, cards: Vec<Card>) {
        self.cards.splice(0..0, cards);
    }
}
