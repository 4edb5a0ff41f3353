use std::io::{Stderr, stderr};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Raw-mode alternate screen with mouse capture, restored on drop
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
                return Err(err).context("Failed to create terminal");
            }
        };

        // From here on Drop restores the terminal
        let mut guard = Self { terminal };
        guard.terminal.hide_cursor().context("Failed to hide cursor")?;
        guard.terminal.clear().context("Failed to clear terminal")?;
        Ok(guard)
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("terminal restore failed: {err:#}");
        }
    }
}
