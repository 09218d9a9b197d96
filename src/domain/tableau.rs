use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};

/// Количество колонок на столе.
pub const COLUMN_COUNT: usize = 10;

/// Количество слотов под собранные масти.
pub const FOUNDATION_COUNT: usize = 8;

/// Длина полной последовательности K..A.
pub const RUN_LENGTH: usize = 13;

/// Сколько карт уходит в одну дополнительную раздачу (по одной на колонку).
pub const ROW_SIZE: usize = COLUMN_COUNT;

/// Индекс колонки (0..COLUMN_COUNT-1).
pub type ColumnId = usize;

/// Индекс слота foundation (0..FOUNDATION_COUNT-1).
pub type FoundationId = usize;

/// Что лежит сверху колонки.
///
/// Пустая колонка не хранит никакой псевдо-карты: она сама и есть
/// «плейсхолдер», на который можно положить любую последовательность.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnTop {
    Placeholder,
    Card(Card),
}

/// Колонка (стопка) на столе. Индекс 0 — самая нижняя карта, последняя — верхняя.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Колонка пуста и помечена плейсхолдером.
    pub fn has_placeholder(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> ColumnTop {
        match self.cards.last() {
            Some(card) => ColumnTop::Card(*card),
            None => ColumnTop::Placeholder,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.face_up).count()
    }

    /// Открыть верхнюю карту, если она закрыта. Возвращает true, если карта перевернулась.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Закрыть верхнюю карту (откат `reveal_top`).
    pub fn hide_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.face_up = false;
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Снять все карты начиная с `index` (включительно).
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Снять `n` верхних карт.
    pub fn take_top(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }
}

/// Слот foundation: либо пуст, либо хранит ровно одну собранную масть K..A.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Foundation {
    run: Option<Vec<Card>>,
}

impl Foundation {
    pub fn is_filled(&self) -> bool {
        self.run.is_some()
    }

    pub fn cards(&self) -> &[Card] {
        self.run.as_deref().unwrap_or(&[])
    }

    pub fn suit(&self) -> Option<Suit> {
        self.cards().first().map(|c| c.suit)
    }

    /// Положить собранную последовательность. Занятый слот не перезаписывается.
    pub(crate) fn fill(&mut self, run: Vec<Card>) -> bool {
        if self.run.is_some() {
            return false;
        }
        self.run = Some(run);
        true
    }

    /// Забрать последовательность обратно (только для undo).
    pub(crate) fn take(&mut self) -> Option<Vec<Card>> {
        self.run.take()
    }
}
