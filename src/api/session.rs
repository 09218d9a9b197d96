use crate::engine::{Game, RandomSource};
use crate::infra::{DeterministicRng, SystemRng};

use super::commands::{Command, MoveCommand};
use super::dto::{ActionDto, CommandResponse};
use super::errors::ApiError;
use super::queries::{answer_query, build_board_view, Query, QueryResponse};

/// Сессия игрока: владеет одной партией и RNG для новых партий.
///
/// UI держит сессию (или ссылку на неё) и общается с движком только через
/// `execute` / `query`, не залезая во внутренности `Game`.
pub struct GameSession<R: RandomSource = SystemRng> {
    game: Game,
    rng: R,
}

impl GameSession<SystemRng> {
    pub fn new() -> Self {
        Self::with_rng(SystemRng)
    }
}

impl Default for GameSession<SystemRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let game = Game::new(&mut rng);
        Self { game, rng }
    }

    /// Сессия вокруг уже собранной позиции.
    pub fn from_game(game: Game, rng: R) -> Self {
        Self { game, rng }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Выполнить команду. Отклонённая команда состояние не меняет.
    pub fn execute(&mut self, command: Command) -> CommandResponse {
        match self.apply(command) {
            Ok(action) => CommandResponse::Applied {
                action,
                board: build_board_view(&self.game),
            },
            Err(err) => CommandResponse::Rejected(err),
        }
    }

    fn apply(&mut self, command: Command) -> Result<ActionDto, ApiError> {
        let action = match command {
            Command::NewGame { seed } => {
                self.game = match seed {
                    Some(seed) => Game::new(&mut DeterministicRng::from_seed(seed)),
                    None => Game::new(&mut self.rng),
                };
                ActionDto::NewGame
            }
            Command::Move(MoveCommand { from, index, to }) => {
                ActionDto::Moved(self.game.try_move_sequence(from, index, to)?)
            }
            Command::DealRow => ActionDto::Dealt(self.game.try_deal_additional_row()?),
            Command::Undo => ActionDto::Undone(self.game.try_undo()?),
        };
        Ok(action)
    }

    pub fn query(&self, query: &Query) -> QueryResponse {
        answer_query(&self.game, query)
    }

    /// JSON-вход для UI на другом языке: команда → ответ, оба в JSON.
    pub fn execute_json(&mut self, raw: &str) -> String {
        let response = match serde_json::from_str::<Command>(raw) {
            Ok(command) => self.execute(command),
            Err(err) => CommandResponse::Rejected(ApiError::from(err)),
        };
        serde_json::to_string(&response).unwrap_or_else(|err| {
            format!("{{\"Rejected\":{{\"Internal\":{:?}}}}}", err.to_string())
        })
    }
}
