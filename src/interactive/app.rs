//! TUI application state and logic

use crate::game::GameStateMachine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: GameStateMachine,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub const fn new(game: GameStateMachine) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Map one key press onto a game command
    ///
    /// Letters type into the pending guess, so quitting mid-round is Esc or
    /// Ctrl-C rather than 'q'. Once the round is over the letter keys are
    /// free again and single-key shortcuts take over.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.state().is_over() {
            match code {
                KeyCode::Char('n') | KeyCode::Enter => self.game.restart(false),
                KeyCode::Char('r') => self.game.restart(true),
                KeyCode::Esc => self.game.dismiss_modal(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                // Give up on this word and draw the next
                self.game.restart(false);
            }
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                // Requeue this word and draw the next
                self.game.restart(true);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.game.add_pending_guess(c.to_ascii_lowercase());
            }
            KeyCode::Backspace => self.game.delete_pending_guess(),
            KeyCode::Enter => self.game.submit_pending_guesses(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::EndGameStatus;

    fn app() -> App {
        let words = vec![Word::new("test").unwrap(), Word::new("poop").unwrap()];
        App::new(GameStateMachine::new(words))
    }

    fn type_word(app: &mut App, word: &str) {
        for letter in word.chars() {
            app.handle_key(KeyCode::Char(letter), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn letters_type_into_the_pending_guess() {
        let mut app = app();
        app.handle_key(KeyCode::Char('T'), KeyModifiers::SHIFT);
        app.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(app.game.state().pending_guess, vec!['t', 'e']);

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.game.state().pending_guess, vec!['t']);
    }

    #[test]
    fn enter_submits_a_full_guess() {
        let mut app = app();
        type_word(&mut app, "test");
        assert_eq!(
            app.game.state().end_game_status,
            Some(EndGameStatus::Won)
        );
    }

    #[test]
    fn shortcuts_take_over_after_the_round() {
        let mut app = app();
        type_word(&mut app, "test");
        assert!(app.game.state().show_end_game_modal);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.game.state().show_end_game_modal);
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(
            app.game.state().target_word.as_ref().unwrap().text(),
            "poop"
        );
    }

    #[test]
    fn esc_quits_mid_round() {
        let mut app = app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_skips_the_current_word() {
        let mut app = app();
        type_word(&mut app, "aaaa");
        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(
            app.game.state().target_word.as_ref().unwrap().text(),
            "poop"
        );
        assert!(app.game.state().submitted_guesses.is_empty());
    }
}
