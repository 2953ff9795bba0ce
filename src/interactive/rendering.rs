//! TUI rendering with ratatui
//!
//! Draws the guess board, the letter-knowledge keyboard, and the
//! end-of-round modal.

use super::app::App;
use crate::core::Verdict;
use crate::game::{EndGameStatus, GameState, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app.game.state(), chunks[1]);
    render_keyboard(f, app.game.state(), chunks[2]);
    render_status(f, app, chunks[3]);

    if app.game.state().show_end_game_modal {
        render_end_game_modal(f, app.game.state());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("GRIDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn cell(text: String, style: Style) -> Span<'static> {
    Span::styled(format!(" {text} "), style)
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let word_len = state.word_len();

    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    if word_len == 0 {
        lines.push(Line::from("No words to play!"));
    } else {
        for scored in &state.submitted_guesses {
            let spans: Vec<Span> = scored
                .iter()
                .map(|&(letter, verdict)| {
                    cell(
                        letter.to_ascii_uppercase().to_string(),
                        verdict_style(verdict),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        // Pending row, unless the round already ended
        if !state.is_over() {
            let mut spans: Vec<Span> = state
                .pending_guess
                .iter()
                .map(|letter| {
                    cell(
                        letter.to_ascii_uppercase().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            for _ in state.pending_guess.len()..word_len {
                spans.push(cell("_".to_string(), Style::default().fg(Color::DarkGray)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        // Unused attempt rows
        let used = state.submitted_guesses.len() + usize::from(!state.is_over());
        for _ in used..MAX_ATTEMPTS {
            let spans: Vec<Span> = (0..word_len)
                .map(|_| cell("·".to_string(), Style::default().fg(Color::DarkGray)))
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
    }

    let title = format!(
        " Board ({}/{MAX_ATTEMPTS}) ",
        state.submitted_guesses.len()
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = state
                        .letter_keys
                        .get(&letter)
                        .map_or_else(Style::default, |&verdict| verdict_style(verdict));
                    cell(letter.to_ascii_uppercase().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let help_text = if app.game.state().is_over() {
        "n: Next Word | r: Replay Word | Esc: Dismiss | q: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Ctrl-N: Skip | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[0]);

    let queued = Paragraph::new(format!("Words queued: {}", app.game.queue().len()))
        .alignment(Alignment::Center);
    f.render_widget(queued, chunks[1]);
}

fn render_end_game_modal(f: &mut Frame, state: &GameState) {
    let target = state
        .target_word
        .as_ref()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    let (title, message, color) = match state.end_game_status {
        Some(EndGameStatus::Won) => (
            " You won! ",
            format!(
                "Got {target} in {} guess(es)!",
                state.submitted_guesses.len()
            ),
            Color::Green,
        ),
        Some(EndGameStatus::Lost) => (
            " Out of attempts ",
            format!("The word was {target}."),
            Color::Red,
        ),
        None => return,
    };

    let area = centered_rect(50, 30, f.area());
    let content = vec![
        Line::default(),
        Line::from(message),
        Line::default(),
        Line::from(Span::styled(
            "n: next word | r: replay word | Esc: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Centered sub-rectangle taking the given percentages of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
