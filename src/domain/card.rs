use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты. В двухмастном «Пауке» используются только пики и червы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades, // ♠
    Hearts, // ♥
}

impl Suit {
    pub const ALL: [Suit; 2] = [Suit::Spades, Suit::Hearts];
}

/// Ранг карты: туз = 1, валет = 11, дама = 12, король = 13.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Все ранги по возрастанию (Ace..King).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Числовое значение 1..=13.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Ранг ровно на единицу ниже (у туза такого нет).
    pub fn pred(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }
}

/// Карта «Паука».
///
/// В отличие от ранга и масти, флаг `face_up` меняется по ходу игры.
/// Равенство учитывает и флаг: так undo можно проверять побайтово.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Новая карта рубашкой вверх (так карты лежат в колоде).
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    pub const fn face_up(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Совпадают ли ранг и масть (без учёта стороны).
    pub fn same_identity(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Можно ли положить `self` прямо под `upper` внутри одной последовательности:
    /// та же масть и ранг ровно на единицу ниже.
    pub fn follows_in_suit(&self, upper: &Card) -> bool {
        self.suit == upper.suit && upper.rank.pred() == Some(self.rank)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            r => char::from(b'0' + r.value()),
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ks`, `Th`, `7s`; закрытая карта печатается как `##`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            write!(f, "##")
        }
    }
}

/// Парсинг строки вида "Ks", "Th", "7s" (открытая карта)
/// или "9s~" (та же карта рубашкой вверх).
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, face_up) = match s.strip_suffix('~') {
            Some(body) => (body, false),
            None => (s, true),
        };

        let mut chars = body.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(format!("Card string must look like `Ks` or `Ks~`, got `{s}`"));
        };

        let rank = match r_ch {
            'A' | 'a' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch {
            's' | 'S' => Suit::Spades,
            'h' | 'H' => Suit::Hearts,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card {
            rank,
            suit,
            face_up,
        })
    }
}
