use impostor_engine::machine::Phase;
use impostor_engine::view::{CardView, RoundView};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::UiState;

pub fn screen(view: &RoundView, ui_state: &UiState, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title_top(Line::from(" impostor ").bold().centered())
        .title_bottom(Line::from(" Ctrl+R new game · Esc quit ").dim().centered());
    let area = block.inner(f.area());
    f.render_widget(block, f.area());

    match view.phase {
        Phase::Setup => setup_view(view, ui_state, area, f),
        Phase::Reveal => reveal_view(view, area, f),
        Phase::End => end_view(area, f),
    }
}

fn text(line: impl Into<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(line.into()).wrap(Wrap { trim: true })
}

fn setup_view(view: &RoundView, ui_state: &UiState, area: Rect, f: &mut Frame) {
    let layout = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
    ]);
    let [logo, intro, input, counts, undo, error, start] = layout.areas(area);

    let logo_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .lines(["impostor".into()])
        .centered()
        .build();
    f.render_widget(logo_text, logo);

    f.render_widget(
        text("Pass the device around, everyone types a name in secret.").dim(),
        intro,
    );

    let name_box = Block::bordered().title_top(" Name (Enter to add) ");
    f.render_widget(Paragraph::new(ui_state.name.as_str()).block(name_box), input);

    let counts_line = Line::from(vec![
        "Players: ".into(),
        Span::raw(view.player_count.to_string()).bold(),
        "    Impostors: ".into(),
        Span::raw(view.impostor_count.to_string()).bold(),
    ]);
    f.render_widget(Paragraph::new(counts_line), counts);

    // the list itself is never drawn
    if view.player_count > 0 {
        f.render_widget(
            text("The list stays hidden. Ctrl+Z undoes the last name, or keep adding.").dim(),
            undo,
        );
    }

    if let Some(message) = &view.error {
        f.render_widget(text(format!("! {message}")).red(), error);
    }

    let start_text = if view.can_start {
        text("Ctrl+S to start the game").bold()
    } else {
        text(format!(
            "You need at least {} players. {} get an IMPOSTOR card, everyone else gets the same name picked at random from the list.",
            view.min_players, view.impostor_count
        ))
        .dim()
    };
    f.render_widget(start_text, start);
}

fn reveal_view(view: &RoundView, area: Rect, f: &mut Frame) {
    let layout = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ]);
    let [intro, progress, card, footer] = layout.areas(area);

    f.render_widget(
        text("Hand the device to the next player. Press Space to see your role, press it again to hide it and pass it on."),
        intro,
    );

    if let Some(label) = &view.progress {
        f.render_widget(Paragraph::new(label.as_str()).dim().right_aligned(), progress);
    }

    let card_block = Block::bordered().border_type(BorderType::Rounded);
    let inner = card_block.inner(card);
    f.render_widget(card_block, card);
    draw_card(view.card.as_ref().unwrap_or(&CardView::Hidden), inner, f);

    f.render_widget(
        Paragraph::new("Don't show your card to anyone.").dim().centered(),
        footer,
    );
}

fn draw_card(card: &CardView, area: Rect, f: &mut Frame) {
    // centre the card contents vertically
    let layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ]);
    let [_, heading, big, label, hint, _] = layout.areas(area);

    match card {
        CardView::Hidden => {
            f.render_widget(
                Paragraph::new("Press Space to see your card").dim().centered(),
                label,
            );
        }
        CardView::Impostor => {
            let big_text = BigText::builder()
                .pixel_size(PixelSize::Quadrant)
                .lines(["IMPOSTOR".into()])
                .centered()
                .build();
            f.render_widget(big_text, big);
            f.render_widget(Paragraph::new("IMPOSTOR").bold().centered(), label);
        }
        CardView::Word { word } => {
            f.render_widget(Paragraph::new("YOUR WORD IS").dim().centered(), heading);
            let big_text = BigText::builder()
                .pixel_size(PixelSize::Quadrant)
                .lines([Line::from(word.clone())])
                .centered()
                .build();
            f.render_widget(big_text, big);
            // long names get clipped in big text
            f.render_widget(Paragraph::new(word.as_str()).bold().centered(), label);
        }
    }

    if !matches!(card, CardView::Hidden) {
        f.render_widget(
            Paragraph::new("Press Space to hide it").dim().centered(),
            hint,
        );
    }
}

fn end_view(area: Rect, f: &mut Frame) {
    let layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ]);
    let [_, done, _, replay, new_game, _] = layout.areas(area);

    f.render_widget(
        Paragraph::new("Every card has been dealt!").bold().centered(),
        done,
    );
    f.render_widget(
        Paragraph::new("[r] Deal again (same group)").centered(),
        replay,
    );
    f.render_widget(
        Paragraph::new("[n] New game (new names)").centered(),
        new_game,
    );
}
