//! # shimmer-tui
//!
//! An animated "shimmer" text label for terminal loading indicators:
//! a band of brightened color sweeps across a single line of text at a
//! fixed interval.
//!
//! ## Core Components
//!
//! - **Color engine** ([`color`]): pure functions that parse a base
//!   color and derive the symmetric brightness ramp the wave carries.
//! - **State machine** ([`Shimmer`]): owns the scroll position,
//!   advances it on each tick, and maps every character to a color by
//!   its offset against the ramp.
//! - **Run helpers** ([`run`], [`Runner`]): drive the state machine on
//!   a real terminal with a `tokio::select!` loop over crossterm
//!   events, optionally alongside a background action.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            run / Runner (event loop)          │
//! │   tokio::select! over timer + key events      │
//! └─────────────┬────────────────────┬────────────┘
//!               │ tick()             │ render
//! ┌─────────────▼────────────┐  ┌────▼────────────┐
//! │       Shimmer            │  │ spans / Widget  │
//! │ (position, wave window)  │  │   (ratatui)     │
//! └─────────────┬────────────┘  └─────────────────┘
//!               │ wave_ramp (once, at construction)
//! ┌─────────────▼────────────┐
//! │       color engine       │
//! └──────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shimmer_tui::{Runner, ShimmerOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Animate until the user quits
//!     shimmer_tui::run("Loading", "#00D787").await?;
//!
//!     // Or animate while background work runs, quitting on completion
//!     Runner::new("Installing", "#FFC000")
//!         .options(ShimmerOptions::new().wave_width(12))
//!         .action(async { do_the_work().await })
//!         .run()
//!         .await
//! }
//! ```
//!
//! The state machine is also usable without the run helpers: embed a
//! [`Shimmer`] in any ratatui application, call [`Shimmer::tick`] from
//! your own timer, and render it as a widget or via [`Shimmer::line`].
//!
//! Configuration is deliberately tolerant: malformed hex colors fall
//! back to a default green and out-of-range options are clamped. The
//! animation core never returns an error; only terminal I/O in the run
//! helpers can fail.

pub mod color;
pub mod options;
pub mod runner;
pub mod shimmer;

pub use color::{FALLBACK_RGB, format_hex, lighten, parse_hex, wave_ramp};
pub use options::{
    DEFAULT_INTERVAL, DEFAULT_PEAK_LIGHTNESS, DEFAULT_WAVE_PAUSE, DEFAULT_WAVE_WIDTH, Direction,
    ShimmerOptions,
};
pub use runner::{Runner, run, run_with_options};
pub use shimmer::Shimmer;

/// shimmer-tui version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
