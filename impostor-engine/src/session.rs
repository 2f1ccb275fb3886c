use super::deck::{IMPOSTOR_COUNT, MIN_PLAYERS};
use super::error::{Error, GameError};
use super::machine::{Phase, Round, Step};
use super::roster::{PlayerName, Roster};
use super::view::{CardView, RoundView};
use rand::Rng;
use tracing::instrument;

/// Everything one device needs to run a game: the names typed in so far, the
/// round being dealt, the random source and the last error worth showing.
///
/// Every successful change clears the last error.
#[derive(Debug)]
pub struct Session<R> {
    roster: Roster,
    round: Round,
    rng: R,
    last_error: Option<Error>,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Session<R> {
        Session {
            roster: Roster::new(),
            round: Round::new(),
            rng,
            last_error: None,
        }
    }

    fn record<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(err) if err.is_displayable() => {
                tracing::debug!(%err, "Rejected input");
                self.last_error = Some(err.clone());
            }
            Err(err) => tracing::warn!(%err, "Ignoring input for another phase"),
        }

        result
    }

    // the roster is frozen once cards are dealt
    fn edit_roster<T>(
        &mut self,
        edit: impl FnOnce(&mut Roster) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let found = self.round.phase();
        if found != Phase::Setup {
            return Err(GameError::WrongPhase {
                expected: Phase::Setup,
                found,
            }
            .into());
        }

        edit(&mut self.roster)
    }

    /// Returns `Ok(false)` when the input was blank, which is not an edit
    /// and leaves any previous error on screen.
    pub fn add_name(&mut self, raw: &str) -> Result<bool, Error> {
        let result = self.edit_roster(|roster| Ok(roster.add(raw)?));
        if let Ok(false) = result {
            return result;
        }

        let result = self.record(result);
        if result.is_ok() {
            tracing::debug!(players = self.roster.len(), "Added player");
        }
        result
    }

    pub fn remove_last(&mut self) -> Result<Option<PlayerName>, Error> {
        let result = self.edit_roster(|roster| Ok(roster.remove_last()));
        if let Ok(None) = result {
            return result;
        }

        let result = self.record(result);
        if result.is_ok() {
            tracing::debug!(players = self.roster.len(), "Removed last player");
        }
        result
    }

    pub fn clear_roster(&mut self) -> Result<(), Error> {
        let result = self.edit_roster(|roster| {
            roster.clear();
            Ok(())
        });
        self.record(result)
    }

    #[instrument(skip(self), fields(players = self.roster.len()))]
    pub fn start_round(&mut self) -> Result<(), Error> {
        let result = self
            .round
            .start(self.roster.names(), &mut self.rng)
            .map_err(Error::from);

        let result = self.record(result);
        if result.is_ok() {
            tracing::info!("Dealt a new deck");
        }
        result
    }

    pub fn toggle_or_advance(&mut self) -> Result<Step, Error> {
        let result = self.round.toggle_or_advance().map_err(Error::from);
        let result = self.record(result);
        match &result {
            Ok(Step::Exhausted) => tracing::info!("Every card has been seen"),
            Ok(step) => tracing::trace!(?step, "Card toggled"),
            Err(_) => {}
        }
        result
    }

    #[instrument(skip(self), fields(players = self.roster.len()))]
    pub fn replay_same_roster(&mut self) -> Result<(), Error> {
        let result = self
            .round
            .replay(self.roster.names(), &mut self.rng)
            .map_err(Error::from);

        let result = self.record(result);
        if result.is_ok() {
            tracing::info!("Dealt a new deck for the same players");
        }
        result
    }

    pub fn reset_all(&mut self) {
        self.roster.clear();
        self.round.reset();
        self.last_error = None;
        tracing::info!("Reset to a new game");
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn can_start(&self) -> bool {
        let players = self.roster.len();
        self.phase() == Phase::Setup && players >= MIN_PLAYERS && players > IMPOSTOR_COUNT
    }

    pub fn progress_label(&self) -> Option<String> {
        self.round.progress_label()
    }

    pub fn view(&self) -> RoundView {
        let mut view = RoundView::new(self.phase(), self.roster.len());
        view.can_start = self.can_start();
        view.progress = self.progress_label();
        view.card = self.round.current_card().map(|card| {
            if self.round.is_revealed() {
                card.into()
            } else {
                CardView::Hidden
            }
        });
        view.error = self.last_error.as_ref().map(ToString::to_string);
        view
    }
}
