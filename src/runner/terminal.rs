//! Terminal setup, teardown, and management.
//!
//! Handles crossterm initialization for an inline one-line viewport and
//! provides RAII-based cleanup so the terminal is always restored to a
//! sane state, even in panic situations.

use std::io::{self, Stdout, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

/// Track whether the panic hook has been installed to avoid installing it multiple times.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// A terminal rendering to a single inline line below the shell prompt.
pub type ShimmerTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII guard that restores the terminal on drop.
///
/// Disables raw mode and re-shows the cursor. Created by
/// [`setup_terminal`] and held for the lifetime of the run loop.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            tracing::trace!("failed to restore terminal: {err}");
        }
    }
}

/// Enter raw mode and build an inline one-line terminal.
///
/// The returned guard restores the terminal when dropped; keep it alive
/// for as long as the terminal is in use.
pub fn setup_terminal() -> Result<(ShimmerTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    install_panic_hook();

    let mut out = stdout();
    execute!(out, cursor::Hide)?;

    let backend = CrosstermBackend::new(out);
    let terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(1),
        },
    )?;

    Ok((terminal, TerminalGuard))
}

/// Restore the terminal to its pre-run state.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), cursor::Show)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before the default
/// hook prints the panic message, so it is not swallowed by raw mode.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
