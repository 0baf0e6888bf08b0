//! Blocking run helpers that drive the shimmer on a real terminal.
//!
//! These wrap the state machine in a `tokio::select!` event loop over a
//! crossterm [`EventStream`]: the loop arms one timer per tick from the
//! state machine's scheduling request, redraws after every frame, and
//! exits on a quit key. [`Runner`] additionally runs a caller-supplied
//! background action concurrently and quits when it completes.

pub mod terminal;

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::oneshot;

use crate::options::ShimmerOptions;
use crate::shimmer::Shimmer;

pub use terminal::{ShimmerTerminal, TerminalGuard, restore_terminal, setup_terminal};

/// Which keys end the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuitKeys {
    /// Ctrl+C, `q`, or Esc (plain runs)
    Full,
    /// Ctrl+C only (runs with a background action)
    CtrlC,
}

fn is_quit_key(key: &KeyEvent, quit_keys: QuitKeys) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl_c =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    match quit_keys {
        QuitKeys::Full => ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc),
        QuitKeys::CtrlC => ctrl_c,
    }
}

/// Display shimmering text until the user presses Ctrl+C, `q`, or Esc.
///
/// Blocks the calling task and handles all terminal setup and restore.
///
/// # Example
/// ```rust,ignore
/// shimmer_tui::run("Loading", "#00D787").await?;
/// ```
pub async fn run(text: impl Into<String>, base_color: &str) -> Result<()> {
    run_with_options(text, base_color, ShimmerOptions::default()).await
}

/// Like [`run`] but with explicit options.
///
/// # Example
/// ```rust,ignore
/// use std::time::Duration;
/// use shimmer_tui::ShimmerOptions;
///
/// let options = ShimmerOptions::new()
///     .interval(Duration::from_millis(100))
///     .wave_width(12);
/// shimmer_tui::run_with_options("Processing", "#FFC000", options).await?;
/// ```
pub async fn run_with_options(
    text: impl Into<String>,
    base_color: &str,
    options: ShimmerOptions,
) -> Result<()> {
    let shimmer = Shimmer::with_options(text, base_color, options);
    drive(shimmer, QuitKeys::Full, None).await
}

/// Boxed background action run concurrently with the animation.
type Action = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Builder for running a shimmer alongside a background action.
///
/// The action is spawned on its own task so the animation keeps
/// rendering while it executes; when it completes, the run loop quits
/// automatically. With an action attached, the only quit key is Ctrl+C.
///
/// # Example
/// ```rust,ignore
/// use shimmer_tui::Runner;
///
/// Runner::new("Installing", "#00D787")
///     .action(async {
///         install_packages().await;
///     })
///     .run()
///     .await?;
/// ```
pub struct Runner {
    text: String,
    base_color: String,
    options: ShimmerOptions,
    action: Option<Action>,
}

impl Runner {
    /// Create a runner for the given text and base color.
    pub fn new(text: impl Into<String>, base_color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            base_color: base_color.into(),
            options: ShimmerOptions::default(),
            action: None,
        }
    }

    /// Set the animation options.
    pub fn options(mut self, options: ShimmerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a future to run while the shimmer animates.
    ///
    /// The shimmer stops when the future completes. The action must not
    /// share mutable state with the animation; it communicates only via
    /// its completion.
    pub fn action(mut self, action: impl Future<Output = ()> + Send + 'static) -> Self {
        self.action = Some(Box::pin(action));
        self
    }

    /// Drive the event loop until a quit key or action completion.
    pub async fn run(self) -> Result<()> {
        let shimmer = Shimmer::with_options(self.text, &self.base_color, self.options);
        let Some(action) = self.action else {
            return drive(shimmer, QuitKeys::Full, None).await;
        };

        let (done_tx, done_rx) = oneshot::channel();
        tokio::spawn(async move {
            action.await;
            // The loop may already have quit on Ctrl+C; a dropped
            // receiver is fine.
            let _ = done_tx.send(());
        });

        drive(shimmer, QuitKeys::CtrlC, Some(done_rx)).await
    }
}

/// Core event loop: one armed timer per tick, crossterm input events,
/// and an optional action-completion signal.
async fn drive(
    mut shimmer: Shimmer,
    quit_keys: QuitKeys,
    done: Option<oneshot::Receiver<()>>,
) -> Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    let mut events = EventStream::new();
    let mut done = done;

    let mut delay = shimmer.next_delay();
    draw(&mut terminal, &shimmer)?;

    loop {
        let timer = async {
            match delay {
                Some(d) => tokio::time::sleep(d).await,
                // Animation stopped: no further ticks are requested.
                None => std::future::pending().await,
            }
        };
        let action_done = async {
            match done.as_mut() {
                Some(rx) => {
                    let _ = rx.await;
                }
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = timer => {
                delay = shimmer.tick();
                draw(&mut terminal, &shimmer)?;
            }
            _ = action_done => {
                tracing::debug!("background action complete, quitting");
                break;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if is_quit_key(&key, quit_keys) => {
                    tracing::debug!(?key, "quit key pressed");
                    break;
                }
                Some(Ok(Event::Resize(_, _))) => {
                    draw(&mut terminal, &shimmer)?;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }

        // The oneshot must not be polled again once it has fired; it
        // can only fire on the branch that breaks, so reaching here
        // with a consumed receiver is impossible.
    }

    Ok(())
}

fn draw(terminal: &mut ShimmerTerminal, shimmer: &Shimmer) -> Result<()> {
    terminal.draw(|frame| {
        frame.render_widget(shimmer, frame.area());
    })?;
    Ok(())
}
