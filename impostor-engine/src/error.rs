use super::deck::MIN_PLAYERS;
use super::machine::Phase;
use super::roster::MAX_NAME_LENGTH;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is too long ({length} characters, max {max})")]
    TooLong { length: usize, max: usize },
}

impl NameError {
    pub(crate) fn too_long(length: usize) -> NameError {
        NameError::TooLong {
            length,
            max: MAX_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("need at least {required} players to deal the cards (have {players})")]
    InsufficientPlayers { players: usize, required: usize },
    #[error("can't do that during {found}, only during {expected}")]
    WrongPhase { expected: Phase, found: Phase },
}

impl GameError {
    pub(crate) fn insufficient(players: usize, impostors: usize) -> GameError {
        GameError::InsufficientPlayers {
            players,
            required: MIN_PLAYERS.max(impostors + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl Error {
    // phase mismatches come from stray input, not from anything the players should read
    pub fn is_displayable(&self) -> bool {
        !matches!(self, Error::Game(GameError::WrongPhase { .. }))
    }
}
