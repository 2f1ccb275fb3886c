use super::deck::{Deck, IMPOSTOR_COUNT, RoleCard};
use super::error::GameError;
use super::roster::PlayerName;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

// The round loop, as a decision tree of the transitions the machine allows:
//
// Setup -> Reveal (start, needs enough players)
//
// Reveal -> Reveal (show the current card, or hide it and move to the next one)
//        -> End    (hide the last card)
//
// End -> Reveal (replay with the same roster, new word and new order)
//
// Any -> Setup (reset)
//
// Every card has to be shown before the device can move past it, and the cursor
// never moves backwards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Phase {
    Setup,
    Reveal,
    End,
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Reveal => write!(f, "reveal"),
            Phase::End => write!(f, "end"),
        }
    }
}

/// What a call to [`Round::toggle_or_advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Step {
    Shown { cursor: usize },
    Advanced { cursor: usize },
    Exhausted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Round {
    #[default]
    Setup,
    Reveal {
        deck: Deck,
        cursor: usize,
        revealed: bool,
    },
    End {
        deck: Deck,
    },
}

impl Round {
    pub fn new() -> Round {
        Round::default()
    }

    pub fn phase(&self) -> Phase {
        match self {
            Round::Setup => Phase::Setup,
            Round::Reveal { .. } => Phase::Reveal,
            Round::End { .. } => Phase::End,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        let found = self.phase();
        if found == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase { expected, found })
        }
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        roster: &[PlayerName],
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        self.deal(roster, rng)
    }

    pub fn replay<R: Rng + ?Sized>(
        &mut self,
        roster: &[PlayerName],
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::End)?;
        self.deal(roster, rng)
    }

    // deck is built before anything is touched so a failure leaves the round as it was
    fn deal<R: Rng + ?Sized>(&mut self, roster: &[PlayerName], rng: &mut R) -> Result<(), GameError> {
        let deck = Deck::build(roster, IMPOSTOR_COUNT, rng)?;
        *self = Round::Reveal {
            deck,
            cursor: 0,
            revealed: false,
        };

        Ok(())
    }

    pub fn toggle_or_advance(&mut self) -> Result<Step, GameError> {
        let found = self.phase();
        let Round::Reveal {
            deck,
            cursor,
            revealed,
        } = self
        else {
            return Err(GameError::WrongPhase {
                expected: Phase::Reveal,
                found,
            });
        };

        if !*revealed {
            *revealed = true;
            return Ok(Step::Shown { cursor: *cursor });
        }

        let next = *cursor + 1;
        if next >= deck.len() {
            let deck = std::mem::take(deck);
            *self = Round::End { deck };
            Ok(Step::Exhausted)
        } else {
            *cursor = next;
            *revealed = false;
            Ok(Step::Advanced { cursor: next })
        }
    }

    pub fn reset(&mut self) {
        *self = Round::Setup;
    }

    // "Card 2 of 5", only while cards are being passed around
    pub fn progress_label(&self) -> Option<String> {
        match self {
            Round::Reveal { deck, cursor, .. } => {
                Some(format!("Card {} of {}", cursor + 1, deck.len()))
            }
            Round::Setup | Round::End { .. } => None,
        }
    }

    pub fn cursor(&self) -> usize {
        match self {
            Round::Reveal { cursor, .. } => *cursor,
            Round::End { deck } => deck.len().saturating_sub(1),
            Round::Setup => 0,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Round::Reveal { revealed: true, .. })
    }

    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Round::Reveal { deck, .. } | Round::End { deck } => Some(deck),
            Round::Setup => None,
        }
    }

    /// The card waiting at the cursor, whether or not it is showing.
    pub fn current_card(&self) -> Option<&RoleCard> {
        match self {
            Round::Reveal { deck, cursor, .. } => deck.get(*cursor),
            Round::Setup | Round::End { .. } => None,
        }
    }

    /// The card at the cursor, but only while it is showing.
    pub fn visible_card(&self) -> Option<&RoleCard> {
        self.current_card().filter(|_| self.is_revealed())
    }
}
