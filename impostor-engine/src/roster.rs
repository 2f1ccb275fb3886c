use super::error::NameError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub const MAX_NAME_LENGTH: usize = 40;

/// A name submitted by one of the players. Always trimmed, never empty and at
/// most [`MAX_NAME_LENGTH`] characters long.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Returns `Ok(None)` for input that is blank once trimmed.
    pub fn parse(raw: &str) -> Result<Option<PlayerName>, NameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(NameError::too_long(length));
        }

        Ok(Some(PlayerName(name.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names in the order they were typed in. Duplicates are separate entries.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<PlayerName>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    // returns whether anything was appended
    pub fn add(&mut self, raw: &str) -> Result<bool, NameError> {
        let Some(name) = PlayerName::parse(raw)? else {
            return Ok(false);
        };

        self.names.push(name);
        Ok(true)
    }

    pub fn remove_last(&mut self) -> Option<PlayerName> {
        self.names.pop()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerName> {
        self.names.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Roster {
    // blank and over-long names are skipped
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Roster {
        let names = iter
            .into_iter()
            .filter_map(|raw| PlayerName::parse(raw.as_ref()).ok().flatten())
            .collect();

        Roster { names }
    }
}
