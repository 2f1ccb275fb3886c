use impostor_engine::IMPOSTOR_COUNT;
use impostor_engine::deck::{Deck, RoleCard};
use impostor_engine::machine::{Phase, Step};
use impostor_engine::roster::{PlayerName, Roster};
use impostor_engine::session::Session;
use impostor_engine::view::CardView;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn secret_word(deck: &Deck) -> &PlayerName {
    deck.cards()
        .iter()
        .find_map(RoleCard::word)
        .expect("Deck always has a word card")
}

#[test]
fn basic_round() {
    let names = ["Ana", "Beto", "Cora", "Deco"];
    let mut session = Session::new(StdRng::seed_from_u64(2024));
    for name in names {
        assert_eq!(session.add_name(name), Ok(true));
    }

    session.start_round().expect("Four players are enough");

    let deck = session.round().deck().expect("Cards were dealt").clone();
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.impostor_count(), IMPOSTOR_COUNT);
    let word = secret_word(&deck);
    assert!(names.contains(&word.as_str()));
    assert!(
        deck.cards()
            .iter()
            .all(|card| card.is_impostor() || card.word() == Some(word))
    );

    // every player shows, then hides and passes the device on
    let mut steps = Vec::new();
    for _ in 0..7 {
        steps.push(session.toggle_or_advance().expect("Still dealing"));
        assert_eq!(session.phase(), Phase::Reveal);
    }
    assert_eq!(
        steps,
        [
            Step::Shown { cursor: 0 },
            Step::Advanced { cursor: 1 },
            Step::Shown { cursor: 1 },
            Step::Advanced { cursor: 2 },
            Step::Shown { cursor: 2 },
            Step::Advanced { cursor: 3 },
            Step::Shown { cursor: 3 },
        ]
    );
    assert_eq!(session.progress_label().as_deref(), Some("Card 4 of 4"));

    // the eighth press hides the last card and ends the round
    assert_eq!(session.toggle_or_advance(), Ok(Step::Exhausted));
    assert_eq!(session.phase(), Phase::End);
    assert_eq!(session.view().card, None);

    session.replay_same_roster().expect("Same four players");
    assert_eq!(session.phase(), Phase::Reveal);
    assert_eq!(session.round().cursor(), 0);
    assert!(!session.round().is_revealed());
    assert_eq!(session.view().card, Some(CardView::Hidden));

    let replayed = session.round().deck().expect("Cards were dealt");
    assert_eq!(replayed.len(), 4);
    assert_eq!(replayed.impostor_count(), IMPOSTOR_COUNT);
    assert_eq!(session.roster().len(), 4);
}

#[test]
fn dealing_is_fair() {
    const TRIALS: usize = 20_000;
    const TOLERANCE: f64 = 0.02;

    let roster: Roster = ["Ana", "Beto", "Cora", "Deco", "Eva"].into_iter().collect();
    let players = roster.len();
    let mut rng = StdRng::seed_from_u64(77);

    let mut impostors_at = vec![0usize; players];
    let mut chosen: HashMap<&str, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let deck = Deck::build(roster.names(), IMPOSTOR_COUNT, &mut rng).expect("Enough players");

        for (position, card) in deck.cards().iter().enumerate() {
            if card.is_impostor() {
                impostors_at[position] += 1;
            }
        }

        let word = secret_word(&deck);
        let name = roster
            .iter()
            .find(|name| *name == word)
            .map(PlayerName::as_str)
            .expect("Word comes from the roster");
        *chosen.entry(name).or_default() += 1;
    }

    let impostor_odds = IMPOSTOR_COUNT as f64 / players as f64;
    for (position, count) in impostors_at.into_iter().enumerate() {
        let freq = count as f64 / TRIALS as f64;
        assert!(
            (freq - impostor_odds).abs() < TOLERANCE,
            "Position {position} held an impostor with frequency {freq}"
        );
    }

    assert_eq!(chosen.len(), players);
    for (name, count) in chosen {
        let freq = count as f64 / TRIALS as f64;
        assert!(
            (freq - 1.0 / players as f64).abs() < TOLERANCE,
            "{name} was the secret word with frequency {freq}"
        );
    }
}

#[test]
fn replay_redraws_the_word() {
    let mut session = Session::new(StdRng::seed_from_u64(5));
    for name in ["Ana", "Beto", "Cora", "Deco", "Eva", "Fede"] {
        session.add_name(name).expect("Valid name");
    }
    session.start_round().expect("Enough players");

    let mut words = Vec::new();
    for _ in 0..30 {
        let deck = session.round().deck().expect("Cards were dealt");
        words.push(secret_word(deck).clone());

        while session.phase() == Phase::Reveal {
            session.toggle_or_advance().expect("Still dealing");
        }
        session.replay_same_roster().expect("Same players");
    }

    words.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
    words.dedup();
    assert!(words.len() > 1, "Replays never changed the word");
}

#[test]
fn two_players_can_not_start() {
    let mut session = Session::new(StdRng::seed_from_u64(5));
    session.add_name("A").expect("Valid name");
    session.add_name("B").expect("Valid name");

    assert!(session.start_round().is_err());
    assert_eq!(session.phase(), Phase::Setup);
    assert_eq!(session.round().deck(), None);
    assert!(session.view().error.is_some());

    assert_eq!(
        session.remove_last().map(|name| name.map(|n| n.to_string())),
        Ok(Some("B".to_string()))
    );
    assert_eq!(session.roster().len(), 1);
}
