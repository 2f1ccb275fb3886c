use super::error::GameError;
use super::roster::PlayerName;
use super::shuffle::{pick_one, shuffle};
use itertools::{chain, repeat_n};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub const MIN_PLAYERS: usize = 3;
pub const IMPOSTOR_COUNT: usize = 2;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RoleCard {
    Impostor,
    Word(PlayerName),
}

impl RoleCard {
    pub fn is_impostor(&self) -> bool {
        matches!(self, RoleCard::Impostor)
    }

    pub fn word(&self) -> Option<&PlayerName> {
        match self {
            RoleCard::Impostor => None,
            RoleCard::Word(word) => Some(word),
        }
    }
}

impl Display for RoleCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleCard::Impostor => write!(f, "IMPOSTOR"),
            RoleCard::Word(word) => write!(f, "{word}"),
        }
    }
}

/// One card per player, in the order the device is passed around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<RoleCard>,
}

impl Deck {
    /// Picks the secret word from `roster` and deals `impostors` impostor
    /// cards plus one word card for everybody else, in random order.
    ///
    /// Every call draws a new word and a new order.
    pub fn build<R: Rng + ?Sized>(
        roster: &[PlayerName],
        impostors: usize,
        rng: &mut R,
    ) -> Result<Deck, GameError> {
        let players = roster.len();
        if players < MIN_PLAYERS || players < impostors + 1 {
            return Err(GameError::insufficient(players, impostors));
        }

        let word = pick_one(roster, rng)
            .cloned()
            .ok_or_else(|| GameError::insufficient(players, impostors))?;

        let cards = chain(
            repeat_n(RoleCard::Impostor, impostors),
            repeat_n(RoleCard::Word(word), players - impostors),
        )
        .collect();

        Ok(Deck {
            cards: shuffle(cards, rng),
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoleCard> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[RoleCard] {
        &self.cards
    }

    pub fn impostor_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_impostor()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(size: usize) -> Roster {
        (0..size).map(|i| format!("Player {i}")).collect()
    }

    #[test]
    fn composition() {
        let mut rng = StdRng::seed_from_u64(3);

        for size in MIN_PLAYERS..=12 {
            let roster = roster(size);
            let deck = Deck::build(roster.names(), IMPOSTOR_COUNT, &mut rng).expect("Enough players");

            assert_eq!(deck.len(), size);
            assert_eq!(deck.impostor_count(), IMPOSTOR_COUNT);

            let words: Vec<&PlayerName> = deck.cards().iter().filter_map(RoleCard::word).collect();
            assert_eq!(words.len(), size - IMPOSTOR_COUNT);
            assert!(words.iter().all_equal(), "Word cards differ: {words:?}");
            assert!(roster.names().contains(words[0]));
        }
    }

    #[test]
    fn too_few_players() {
        let mut rng = StdRng::seed_from_u64(3);

        for size in 0..MIN_PLAYERS {
            assert_eq!(
                Deck::build(roster(size).names(), IMPOSTOR_COUNT, &mut rng),
                Err(GameError::InsufficientPlayers {
                    players: size,
                    required: MIN_PLAYERS
                })
            );
        }
    }

    #[test]
    fn impostors_must_leave_a_word_card() {
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            Deck::build(roster(4).names(), 4, &mut rng),
            Err(GameError::InsufficientPlayers {
                players: 4,
                required: 5
            })
        );
        assert!(Deck::build(roster(5).names(), 4, &mut rng).is_ok());
    }

    #[test]
    fn card_labels() {
        let word = RoleCard::Word(roster(1).names()[0].clone());

        assert_eq!(RoleCard::Impostor.to_string(), "IMPOSTOR");
        assert_eq!(word.to_string(), "Player 0");
        assert_eq!(RoleCard::Impostor.word(), None);
    }
}
