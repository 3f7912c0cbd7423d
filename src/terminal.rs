//! Raw-mode terminal setup and teardown.

use std::io::{self, Stdout};
use std::panic;
use std::thread;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

use crate::app::App;
use crate::ui;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the TUI runs.
pub struct Tui {
    terminal: AppTerminal,
}

impl Tui {
    /// Switch to raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    /// Give the terminal back to the shell.
    pub fn exit(mut self) -> io::Result<()> {
        self.terminal.show_cursor()?;
        restore()
    }
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if owns_screen(thread::current().name()) {
            let _ = restore();
            original_hook(panic_info);
        } else {
            // Anything written to stderr would land on the alternate screen.
            error!(panic = %panic_info, "background thread panicked");
        }
    }));
}

/// Only the thread running the event loop may tear the screen down.
fn owns_screen(thread_name: Option<&str>) -> bool {
    thread_name == Some("main")
}
