//! Configuration options for the shimmer animation.

use std::time::Duration;

/// Default time between animation frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Default maximum lightness percentage at the wave's center (0-100).
pub const DEFAULT_PEAK_LIGHTNESS: u8 = 90;

/// Default width of the shimmer wave in characters.
pub const DEFAULT_WAVE_WIDTH: usize = 8;

/// Default pause between wave sweeps, in character positions.
pub const DEFAULT_WAVE_PAUSE: usize = 8;

/// Which way the shimmer wave moves across the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Wave moves left to right (default)
    #[default]
    Forward,
    /// Wave moves right to left
    Reverse,
}

/// Configuration for a [`Shimmer`](crate::Shimmer) animation.
///
/// All knobs live in one place so callers can start from
/// `ShimmerOptions::default()` and override with the builder-style
/// setters. Out-of-range values are clamped, never rejected.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use shimmer_tui::{Direction, ShimmerOptions};
///
/// let options = ShimmerOptions::default()
///     .interval(Duration::from_millis(100))
///     .wave_width(12)
///     .direction(Direction::Reverse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShimmerOptions {
    /// Time between animation frames
    pub interval: Duration,
    /// Maximum lightness percentage at the wave's center (0-100)
    pub peak_lightness: u8,
    /// Width of the wave in characters (at least 2)
    pub wave_width: usize,
    /// Idle positions appended after the wave exits the text
    pub wave_pause: usize,
    /// Wave travel direction
    pub direction: Direction,
}

impl Default for ShimmerOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            peak_lightness: DEFAULT_PEAK_LIGHTNESS,
            wave_width: DEFAULT_WAVE_WIDTH,
            wave_pause: DEFAULT_WAVE_PAUSE,
            direction: Direction::Forward,
        }
    }
}

impl ShimmerOptions {
    /// Create options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation speed (time between frames).
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the maximum lightness (0-100). Higher = brighter shimmer.
    ///
    /// Values above 100 are clamped down.
    pub fn peak_lightness(mut self, percent: u8) -> Self {
        self.peak_lightness = percent.min(100);
        self
    }

    /// Set the width of the shimmer wave in characters.
    ///
    /// Widths below 2 are clamped up.
    pub fn wave_width(mut self, width: usize) -> Self {
        self.wave_width = width.max(2);
        self
    }

    /// Set the pause between wave sweeps (in character positions).
    pub fn wave_pause(mut self, pause: usize) -> Self {
        self.wave_pause = pause;
        self
    }

    /// Set the wave direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Return a copy with every field forced into its valid range.
    ///
    /// The setters already clamp; this covers options built with struct
    /// literal syntax.
    pub(crate) fn normalized(mut self) -> Self {
        self.peak_lightness = self.peak_lightness.min(100);
        self.wave_width = self.wave_width.max(2);
        self
    }
}
