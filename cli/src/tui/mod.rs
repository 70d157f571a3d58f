pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use moodlog_core::{FileJournalRepository, Journal};

use crate::tui::app::{App, Mode, Tab};

pub fn run(journal: Journal<FileJournalRepository>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(journal);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // A pending notice blocks input: the next keypress only
        // dismisses it.
        if app.notice.is_some() {
            app.notice = None;
            continue;
        }

        match app.mode {
            Mode::Browse => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.switch_tab(),
                KeyCode::Char('1') => app.select_tab(Tab::Moods),
                KeyCode::Char('2') => app.select_tab(Tab::Diary),
                KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                KeyCode::Left | KeyCode::Char('h') => app.carousel_left(),
                KeyCode::Right | KeyCode::Char('l') => app.carousel_right(),
                KeyCode::Enter => app.record_picked_mood()?,
                KeyCode::Char('a') => app.enter_diary_input(),
                KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
                _ => {}
            },
            Mode::DiaryInput => match key.code {
                KeyCode::Enter => app.submit_diary()?,
                KeyCode::Esc => app.cancel_diary_input(),
                KeyCode::Char(c) => app.input_char(c),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right => app.move_cursor_right(),
                _ => {}
            },
            Mode::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete()?,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
                _ => {}
            },
        }
    }
}
