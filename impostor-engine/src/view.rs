use super::deck::{IMPOSTOR_COUNT, MIN_PLAYERS, RoleCard};
use super::machine::Phase;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What the card on screen looks like. The kind of card is only known once
/// its holder has revealed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CardView {
    Hidden,
    Impostor,
    Word { word: String },
}

impl From<&RoleCard> for CardView {
    fn from(card: &RoleCard) -> Self {
        match card {
            RoleCard::Impostor => CardView::Impostor,
            RoleCard::Word(word) => CardView::Word {
                word: word.to_string(),
            },
        }
    }
}

/// Everything a front end needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoundView {
    pub phase: Phase,
    pub player_count: usize,
    pub impostor_count: usize,
    pub min_players: usize,
    pub can_start: bool,
    pub progress: Option<String>,
    pub card: Option<CardView>,
    pub error: Option<String>,
}

impl RoundView {
    pub(crate) fn new(phase: Phase, player_count: usize) -> RoundView {
        RoundView {
            phase,
            player_count,
            impostor_count: IMPOSTOR_COUNT,
            min_players: MIN_PLAYERS,
            can_start: false,
            progress: None,
            card: None,
            error: None,
        }
    }
}
