use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::deck::{Deck, DeckError};
use crate::domain::tableau::{
    Column, ColumnId, Foundation, FoundationId, COLUMN_COUNT, FOUNDATION_COUNT, ROW_SIZE,
    RUN_LENGTH,
};
use crate::engine::config::GameConfig;
use crate::engine::errors::EngineError;
use crate::engine::game_log::{GameEventKind, GameLog};
use crate::engine::history::{Completion, HistoryEntry, MoveHistory};
use crate::engine::sequence::{has_complete_run_on_top, movable_sequence};
use crate::engine::validation::validate_move;
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Результат успешного переноса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Сколько карт перенесено.
    pub moved: usize,
    /// Открылась ли карта в колонке-источнике.
    pub revealed_source: bool,
    /// В какие слоты легли собранные масти.
    pub completed: Vec<FoundationId>,
    /// Партия выиграна этим ходом.
    pub won: bool,
}

/// Результат успешной раздачи ряда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealOutcome {
    /// Номер раздачи (1..=max_draws).
    pub round: u32,
    pub completed: Vec<FoundationId>,
    pub won: bool,
}

/// Что именно откатил undo.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum UndoOutcome {
    Move {
        from: ColumnId,
        to: ColumnId,
        count: usize,
    },
    Deal {
        round: u32,
    },
}

/// Партия «Паука»: 10 колонок, 8 foundation-слотов, колода и история.
///
/// Внешний код (UI) работает только через методы ниже; поля закрыты,
/// наружу отдаются read-only срезы.
#[derive(Clone, Debug)]
pub struct Game {
    columns: [Column; COLUMN_COUNT],
    foundations: [Foundation; FOUNDATION_COUNT],
    deck: Deck,
    config: GameConfig,
    moves: u32,
    deal_count: u32,
    history: MoveHistory,
    log: GameLog,
}

/// Новая партия со стандартными правилами и системным RNG.
pub fn new_game() -> Game {
    Game::new(&mut SystemRng)
}

impl Game {
    /// Стандартная партия: перемешать колоду и сдать 6,6,6,6,5,5,5,5,5,5.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Deck::two_suit();
        deck.shuffle(rng);
        Self::deal_layout(GameConfig::default(), deck)
    }

    /// Партия с произвольным (но корректным) конфигом.
    pub fn with_config<R: RandomSource>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut deck = Deck::two_suit();
        deck.shuffle(rng);
        Ok(Self::deal_layout(config, deck))
    }

    /// Собрать позицию из готовых колонок и колоды (тесты, реплеи).
    ///
    /// Верхняя карта каждой непустой колонки открывается.
    pub fn from_layout(
        columns: [Vec<Card>; COLUMN_COUNT],
        deck: Deck,
        config: GameConfig,
    ) -> Self {
        let columns = columns.map(|cards| {
            let mut column = Column::from_cards(cards);
            column.reveal_top();
            column
        });
        Self::from_columns(columns, deck, config)
    }

    /// Заполнить первые свободные слоты foundation готовыми мастями K..A.
    pub fn with_completed_suits(mut self, suits: &[Suit]) -> Self {
        for &suit in suits {
            let Some(slot) = self.first_free_foundation() else {
                break;
            };
            let run = Rank::ALL
                .iter()
                .rev()
                .map(|&rank| Card::face_up(rank, suit))
                .collect();
            self.foundations[slot].fill(run);
        }
        self
    }

    fn deal_layout(config: GameConfig, mut deck: Deck) -> Self {
        let mut columns: [Column; COLUMN_COUNT] = Default::default();
        for (column, &size) in columns.iter_mut().zip(config.initial_layout.iter()) {
            let take = size.min(deck.len());
            column.extend(deck.cards.drain(..take).map(|mut card| {
                card.face_up = false;
                card
            }));
            column.reveal_top();
        }
        Self::from_columns(columns, deck, config)
    }

    fn from_columns(columns: [Column; COLUMN_COUNT], deck: Deck, config: GameConfig) -> Self {
        let mut log = GameLog::new();
        log.push(GameEventKind::GameStarted {
            dealt: columns.iter().map(Column::len).sum(),
            deck_remaining: deck.len(),
        });
        Self {
            columns,
            foundations: Default::default(),
            deck,
            config,
            moves: 0,
            deal_count: 0,
            history: MoveHistory::new(),
            log,
        }
    }

    // ------------------------------------------------------------------
    // Read-only срезы для отрисовки
    // ------------------------------------------------------------------

    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn foundations(&self) -> &[Foundation; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn deal_count(&self) -> u32 {
        self.deal_count
    }

    pub fn max_draws(&self) -> u32 {
        self.config.max_draws
    }

    pub fn remaining_draws(&self) -> u32 {
        self.config.max_draws.saturating_sub(self.deal_count)
    }

    pub fn completed_foundations(&self) -> usize {
        self.foundations.iter().filter(|f| f.is_filled()).count()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Все 8 слотов заполнены.
    pub fn is_game_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_filled)
    }

    // ------------------------------------------------------------------
    // Последовательности и проверка ходов
    // ------------------------------------------------------------------

    /// Подвижная последовательность с `index` до конца колонки; пусто — если её нет.
    pub fn get_movable_sequence(&self, column: ColumnId, index: usize) -> Vec<Card> {
        self.columns
            .get(column)
            .map(|c| movable_sequence(&c.cards, index).to_vec())
            .unwrap_or_default()
    }

    /// Проверка хода с причиной отказа.
    pub fn validate_move(
        &self,
        from: ColumnId,
        index: usize,
        to: ColumnId,
    ) -> Result<Vec<Card>, EngineError> {
        validate_move(&self.columns, from, index, to).map(<[Card]>::to_vec)
    }

    pub fn can_move_card(&self, from: ColumnId, index: usize, to: ColumnId) -> bool {
        validate_move(&self.columns, from, index, to).is_ok()
    }

    // ------------------------------------------------------------------
    // Ходы
    // ------------------------------------------------------------------

    /// Перенос с полной проверкой: нелегальный ход не меняет состояние.
    pub fn try_move_sequence(
        &mut self,
        from: ColumnId,
        index: usize,
        to: ColumnId,
    ) -> Result<MoveOutcome, EngineError> {
        validate_move(&self.columns, from, index, to)?;
        Ok(self.execute_move(from, index, to))
    }

    /// Перенос без проверки ранга: предполагается, что UI уже вызвал `can_move_card`.
    ///
    /// Если с `index` нет корректной последовательности, переносятся карты
    /// с `index` до конца колонки как есть. Вызов игнорируется (false), если
    /// колонки или индекс некорректны либо карта на `index` закрыта.
    pub fn move_sequence(&mut self, from: ColumnId, index: usize, to: ColumnId) -> bool {
        if from == to || to >= COLUMN_COUNT {
            return false;
        }
        let movable = self
            .columns
            .get(from)
            .and_then(|c| c.get(index))
            .is_some_and(|card| card.face_up);
        if !movable {
            return false;
        }
        self.execute_move(from, index, to);
        true
    }

    fn execute_move(&mut self, from: ColumnId, index: usize, to: ColumnId) -> MoveOutcome {
        let cards = self.columns[from].split_off(index);
        self.columns[to].extend(cards.iter().copied());
        let revealed_source = self.columns[from].reveal_top();
        self.moves += 1;

        self.log.push(GameEventKind::SequenceMoved {
            from,
            to,
            count: cards.len(),
            revealed_source,
        });

        let completions = self.complete_suits(to);
        let completed = completions.iter().map(|c| c.foundation).collect();
        let won = self.note_win_if_needed(&completions);
        let moved = cards.len();

        self.history.push(HistoryEntry::Move {
            from,
            to,
            cards,
            revealed_source,
            completions,
        });

        MoveOutcome {
            moved,
            revealed_source,
            completed,
            won,
        }
    }

    // ------------------------------------------------------------------
    // Сборка мастей
    // ------------------------------------------------------------------

    /// Снять с колонки все полные масти K..A в свободные слоты.
    ///
    /// Сборки приписываются последней записи истории, чтобы их можно было отменить.
    /// Возвращает количество собранных мастей.
    pub fn check_for_complete_suits(&mut self, column: ColumnId) -> usize {
        if column >= COLUMN_COUNT {
            return 0;
        }
        let found = self.complete_suits(column);
        let count = found.len();
        self.note_win_if_needed(&found);
        if let Some(entry) = self.history.pop() {
            let entry = match entry {
                HistoryEntry::Deal {
                    cards,
                    mut completions,
                } => {
                    completions.extend(found);
                    HistoryEntry::Deal { cards, completions }
                }
                HistoryEntry::Move {
                    from,
                    to,
                    cards,
                    revealed_source,
                    mut completions,
                } => {
                    completions.extend(found);
                    HistoryEntry::Move {
                        from,
                        to,
                        cards,
                        revealed_source,
                        completions,
                    }
                }
            };
            self.history.push(entry);
        }
        count
    }

    fn complete_suits(&mut self, column: ColumnId) -> Vec<Completion> {
        let mut completions = Vec::new();
        while has_complete_run_on_top(&self.columns[column].cards) {
            let Some(foundation) = self.first_free_foundation() else {
                break;
            };
            let run = self.columns[column].take_top(RUN_LENGTH);
            let suit = run[0].suit;
            self.foundations[foundation].fill(run);
            let revealed = self.columns[column].reveal_top();

            self.log.push(GameEventKind::SuitCompleted {
                column,
                foundation,
                suit,
            });
            completions.push(Completion {
                column,
                foundation,
                revealed,
            });
        }
        completions
    }

    fn first_free_foundation(&self) -> Option<FoundationId> {
        self.foundations.iter().position(|f| !f.is_filled())
    }

    fn note_win_if_needed(&mut self, completions: &[Completion]) -> bool {
        let won = !completions.is_empty() && self.is_game_won();
        if won {
            self.log.push(GameEventKind::GameWon { moves: self.moves });
        }
        won
    }

    // ------------------------------------------------------------------
    // Дополнительные раздачи
    // ------------------------------------------------------------------

    /// Почему сейчас нельзя раздать ряд (Ok — можно).
    pub fn check_deal(&self) -> Result<(), EngineError> {
        if self.deal_count >= self.config.max_draws {
            return Err(EngineError::DrawQuotaExhausted {
                max_draws: self.config.max_draws,
            });
        }
        if self.config.block_deal_on_empty_column {
            if let Some(empty) = self.columns.iter().position(Column::is_empty) {
                return Err(EngineError::EmptyColumn(empty));
            }
        }
        if self.deck.len() < ROW_SIZE {
            return Err(DeckError::InsufficientCards {
                requested: ROW_SIZE,
                remaining: self.deck.len(),
            }
            .into());
        }
        Ok(())
    }

    pub fn can_deal_additional_row(&self) -> bool {
        self.check_deal().is_ok()
    }

    /// Раздать по одной открытой карте в каждую колонку.
    pub fn try_deal_additional_row(&mut self) -> Result<DealOutcome, EngineError> {
        self.check_deal()?;
        let mut cards = self.deck.deal(ROW_SIZE)?;
        for (column, card) in self.columns.iter_mut().zip(cards.iter_mut()) {
            card.face_up = true;
            column.push(*card);
        }
        self.deal_count += 1;
        let round = self.deal_count;

        self.log.push(GameEventKind::RowDealt {
            round,
            cards: cards.clone(),
        });

        let mut completions = Vec::new();
        for column in 0..COLUMN_COUNT {
            completions.extend(self.complete_suits(column));
        }
        let completed = completions.iter().map(|c| c.foundation).collect();
        let won = self.note_win_if_needed(&completions);

        self.history.push(HistoryEntry::Deal { cards, completions });

        Ok(DealOutcome {
            round,
            completed,
            won,
        })
    }

    /// false — раздача отклонена (лимит, пустая колонка или мало карт).
    pub fn deal_additional_row(&mut self) -> bool {
        self.try_deal_additional_row().is_ok()
    }

    // ------------------------------------------------------------------
    // Undo
    // ------------------------------------------------------------------

    /// Откатить последнее действие, включая перевороты карт и сборки мастей.
    pub fn try_undo(&mut self) -> Result<UndoOutcome, EngineError> {
        let entry = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        let outcome = match entry {
            HistoryEntry::Move {
                from,
                to,
                cards,
                revealed_source,
                completions,
            } => {
                self.revert_completions(&completions);
                if revealed_source {
                    self.columns[from].hide_top();
                }
                let back = self.columns[to].take_top(cards.len());
                self.columns[from].extend(back);
                self.moves = self.moves.saturating_sub(1);

                let count = cards.len();
                self.log.push(GameEventKind::MoveUndone { from, to, count });
                UndoOutcome::Move { from, to, count }
            }
            HistoryEntry::Deal { cards, completions } => {
                self.revert_completions(&completions);
                let mut returned = Vec::with_capacity(cards.len());
                for column in self.columns.iter_mut().take(cards.len()) {
                    if let Some(mut card) = column.cards.pop() {
                        card.face_up = false;
                        returned.push(card);
                    }
                }
                self.deck.return_to_top(returned);

                let round = self.deal_count;
                self.deal_count = self.deal_count.saturating_sub(1);
                self.log.push(GameEventKind::DealUndone { round });
                UndoOutcome::Deal { round }
            }
        };
        Ok(outcome)
    }

    /// false — история пуста.
    pub fn undo_last_move(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    fn revert_completions(&mut self, completions: &[Completion]) {
        for completion in completions.iter().rev() {
            let column = &mut self.columns[completion.column];
            if completion.revealed {
                column.hide_top();
            }
            if let Some(run) = self.foundations[completion.foundation].take() {
                column.extend(run);
            }
        }
    }
}
