use std::time::Duration;

use crate::draw;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use impostor_engine::machine::Phase;
use impostor_engine::session::Session;
use rand::Rng;
use tokio::select;
use tokio::time::interval;

pub struct Context<'a, R> {
    pub session: &'a mut Session<R>,
    pub ui_state: &'a mut UiState,
}

/// Input that only lives in the terminal, never in the session.
#[derive(Debug, Default)]
pub struct UiState {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn ui<R: Rng>(mut session: Session<R>) -> anyhow::Result<()> {
    // for terminal events
    let mut term_events = EventStream::new();
    let mut term = ratatui::init();

    // 60 frames per second
    let render_rate = Duration::from_secs_f64(1.0 / 60.0);
    let mut interval = interval(render_rate);

    let mut ui_state = UiState::default();

    let result: anyhow::Result<()> = loop {
        let ctx = Context {
            session: &mut session,
            ui_state: &mut ui_state,
        };
        let flow = select! {
            biased;
            Some(event) = term_events.next() => match event {
                Ok(event) => handle_term_event(event, ctx),
                Err(err) => break Err(err.into()),
            },
            _ = interval.tick() => {
                let view = session.view();
                if let Err(err) = term.draw(|f| draw::screen(&view, &ui_state, f)) {
                    break Err(err.into());
                }
                continue;
            },
            else => break Ok(()),
        };

        if flow == Flow::Quit {
            break Ok(());
        }
    };

    ratatui::restore();
    tracing::info!("Session closed");
    result
}

fn handle_term_event<R: Rng>(event: Event, ctx: Context<'_, R>) -> Flow {
    match event {
        Event::Key(event) => handle_key_event(event, ctx),
        // ignore
        _ => Flow::Continue,
    }
}

pub fn handle_key_event<R: Rng>(event: KeyEvent, ctx: Context<'_, R>) -> Flow {
    if event.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match (event.code, ctrl) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), true) => return Flow::Quit,
        (KeyCode::Char('r'), true) => {
            ctx.session.reset_all();
            ctx.ui_state.name.clear();
        }
        (code, ctrl) => match ctx.session.phase() {
            Phase::Setup => handle_setup_key(code, ctrl, ctx),
            Phase::Reveal => handle_reveal_key(code, ctx),
            Phase::End => handle_end_key(code, ctx),
        },
    }

    Flow::Continue
}

// rejected input is kept in the session for drawing, so results are only checked for success
fn handle_setup_key<R: Rng>(code: KeyCode, ctrl: bool, ctx: Context<'_, R>) {
    let Context { session, ui_state } = ctx;
    match (code, ctrl) {
        (KeyCode::Enter, _) => {
            if let Ok(true) = session.add_name(&ui_state.name) {
                ui_state.name.clear();
            }
        }
        (KeyCode::Char('z'), true) => {
            let _ = session.remove_last();
        }
        (KeyCode::Char('s'), true) => {
            if session.start_round().is_ok() {
                ui_state.name.clear();
            }
        }
        (KeyCode::Backspace, _) => {
            ui_state.name.pop();
        }
        (KeyCode::Char(c), false) => ui_state.name.push(c),
        _ => {}
    }
}

fn handle_reveal_key<R: Rng>(code: KeyCode, ctx: Context<'_, R>) {
    if let KeyCode::Char(' ') | KeyCode::Enter = code {
        let _ = ctx.session.toggle_or_advance();
    }
}

fn handle_end_key<R: Rng>(code: KeyCode, ctx: Context<'_, R>) {
    match code {
        KeyCode::Char('r') | KeyCode::Enter => {
            let _ = ctx.session.replay_same_roster();
        }
        KeyCode::Char('n') => {
            ctx.session.reset_all();
            ctx.ui_state.name.clear();
        }
        _ => {}
    }
}
