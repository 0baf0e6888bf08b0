//! Shimmer animation state machine.
//!
//! Owns the scroll position and maps each character of a single-line
//! label to a color from the precomputed wave ramp. The state machine
//! never blocks and never schedules itself: each [`Shimmer::tick`]
//! advances one frame and hands back the delay at which the host loop
//! should deliver the next tick.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::color::{parse_hex, wave_ramp};
use crate::options::{Direction, ShimmerOptions};

/// An animated shimmer effect on a single line of text.
///
/// A wave of brightened color sweeps across the text, creating a
/// loading indicator. The wave ramp is derived once from the base color
/// at construction and only rebuilt when the color-affecting options
/// change.
///
/// # Example
/// ```
/// use shimmer_tui::Shimmer;
///
/// let mut shimmer = Shimmer::new("Loading", "#00D787");
/// let next = shimmer.tick(); // advance one frame, returns Some(interval)
/// let line = shimmer.line(); // per-character styled line for rendering
/// # assert!(next.is_some());
/// # assert_eq!(line.spans.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Shimmer {
    text: String,
    base: (u8, u8, u8),
    is_loading: bool,
    position: usize,
    wave: Vec<(u8, u8, u8)>,
    options: ShimmerOptions,
}

impl Shimmer {
    /// Create a shimmer with the given text and base color.
    ///
    /// The color is a hex string like `"#00D787"`; malformed colors
    /// fall back to a default green rather than failing.
    pub fn new(text: impl Into<String>, base_color: &str) -> Self {
        Self::with_options(text, base_color, ShimmerOptions::default())
    }

    /// Create a shimmer with explicit options.
    ///
    /// Out-of-range option values are clamped into their valid ranges.
    pub fn with_options(text: impl Into<String>, base_color: &str, options: ShimmerOptions) -> Self {
        let options = options.normalized();
        let base = parse_hex(base_color);
        let wave = wave_ramp(base, options.wave_width, options.peak_lightness);
        Self {
            text: text.into(),
            base,
            is_loading: true,
            position: 0,
            wave,
            options,
        }
    }

    /// Replace the displayed text.
    ///
    /// The wave ramp is unaffected; the position keeps cycling modulo
    /// the new total length on the next tick.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Enable or disable the animation.
    ///
    /// While disabled the position is frozen and rendering falls back
    /// to the flat base color. Re-enabling resumes from where the wave
    /// stopped.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Whether the animation is currently running.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current animation offset (cyclic over one full sweep).
    pub fn position(&self) -> usize {
        self.position
    }

    /// The base color as an RGB triple.
    pub fn base_rgb(&self) -> (u8, u8, u8) {
        self.base
    }

    /// Number of colors in the wave ramp (`max(wave_width, 2)`).
    pub fn wave_len(&self) -> usize {
        self.wave.len()
    }

    /// Delay until the next frame should be delivered.
    ///
    /// `None` when the animation is stopped and no tick is wanted.
    /// Use this to arm the first timer before any tick has happened.
    pub fn next_delay(&self) -> Option<Duration> {
        self.is_loading.then_some(self.options.interval)
    }

    /// Advance the animation by one frame.
    ///
    /// Returns the delay at which the host loop should deliver the next
    /// tick, or `None` when the animation is stopped (the position is
    /// left untouched and no further tick is requested).
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.is_loading {
            return None;
        }
        // Cycle length is never zero: the wave alone holds >= 2 colors.
        self.position = (self.position + 1) % self.cycle_len();
        Some(self.options.interval)
    }

    /// One full sweep: text, then the wave draining off, then the pause.
    fn cycle_len(&self) -> usize {
        self.text.chars().count() + self.wave.len() + self.options.wave_pause
    }

    /// Color for the character at `index` (in code points).
    ///
    /// The wave is a moving window of brightness values trailing behind
    /// the current position; characters outside the window show the
    /// plain base color.
    pub fn color_at(&self, index: usize) -> Color {
        let (r, g, b) = self.rgb_at(index, self.text.chars().count());
        Color::Rgb(r, g, b)
    }

    fn rgb_at(&self, index: usize, text_len: usize) -> (u8, u8, u8) {
        let position = self.position as isize;
        let distance = match self.options.direction {
            Direction::Forward => position - index as isize,
            Direction::Reverse => position - (text_len as isize - 1 - index as isize),
        };

        if (0..self.wave.len() as isize).contains(&distance) {
            self.wave[distance as usize]
        } else {
            self.base
        }
    }

    /// Render the text as per-character styled spans.
    ///
    /// When the animation is stopped this is a single span in the flat
    /// base color. Empty text yields no spans.
    pub fn spans(&self) -> Vec<Span<'static>> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let base_style = Style::default().fg(Color::Rgb(self.base.0, self.base.1, self.base.2));
        if !self.is_loading {
            return vec![Span::styled(self.text.clone(), base_style)];
        }

        let text_len = self.text.chars().count();
        self.text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let (r, g, b) = self.rgb_at(i, text_len);
                Span::styled(ch.to_string(), Style::default().fg(Color::Rgb(r, g, b)))
            })
            .collect()
    }

    /// Render the text as a single styled [`Line`].
    pub fn line(&self) -> Line<'static> {
        Line::from(self.spans())
    }
}

impl Widget for &Shimmer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_color(shimmer: &Shimmer) -> Color {
        let (r, g, b) = shimmer.base_rgb();
        Color::Rgb(r, g, b)
    }

    #[test]
    fn test_new_defaults() {
        let shimmer = Shimmer::new("Loading", "#00D787");
        assert!(shimmer.is_loading());
        assert_eq!(shimmer.position(), 0);
        assert_eq!(shimmer.base_rgb(), (0, 215, 135));
        assert_eq!(shimmer.wave_len(), 8);
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let shimmer = Shimmer::new("Loading", "not-a-color");
        assert_eq!(shimmer.base_rgb(), (0, 215, 135));
    }

    #[test]
    fn test_tick_cycles_position() {
        // "Hi" + wave of 2 + no pause = cycle of 4 positions
        let mut shimmer = Shimmer::with_options(
            "Hi",
            "#00D787",
            ShimmerOptions::new().wave_width(2).wave_pause(0),
        );

        let mut seen = vec![shimmer.position()];
        for _ in 0..4 {
            assert!(shimmer.tick().is_some());
            seen.push(shimmer.position());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_tick_requests_interval() {
        let interval = Duration::from_millis(80);
        let mut shimmer = Shimmer::with_options(
            "Loading",
            "#00D787",
            ShimmerOptions::new().interval(interval),
        );
        assert_eq!(shimmer.next_delay(), Some(interval));
        assert_eq!(shimmer.tick(), Some(interval));
    }

    #[test]
    fn test_static_tick_is_noop() {
        let mut shimmer = Shimmer::new("Loading", "#00D787");
        shimmer.tick();
        let frozen = shimmer.position();

        shimmer.set_loading(false);
        assert_eq!(shimmer.tick(), None);
        assert_eq!(shimmer.next_delay(), None);
        assert_eq!(shimmer.position(), frozen);
    }

    #[test]
    fn test_static_renders_flat_base_color() {
        let mut shimmer = Shimmer::new("Loading", "#00D787");
        shimmer.tick();
        shimmer.set_loading(false);

        let spans = shimmer.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Loading");
        assert_eq!(spans[0].style.fg, Some(base_color(&shimmer)));
    }

    #[test]
    fn test_loading_back_on_resumes() {
        let mut shimmer = Shimmer::new("Loading", "#00D787");
        shimmer.tick();
        shimmer.set_loading(false);
        shimmer.set_loading(true);
        assert!(shimmer.tick().is_some());
        assert_eq!(shimmer.position(), 2);
    }

    #[test]
    fn test_forward_window_at_start() {
        // Position 0: 'H' sits at distance 0 (first ramp color),
        // 'i' at distance -1 (outside the window, base color).
        let shimmer = Shimmer::with_options(
            "Hi",
            "#00D787",
            ShimmerOptions::new()
                .wave_width(2)
                .peak_lightness(100)
                .wave_pause(0),
        );

        assert_eq!(shimmer.color_at(0), Color::Rgb(0, 215, 135));
        assert_eq!(shimmer.color_at(1), base_color(&shimmer));
    }

    #[test]
    fn test_forward_peak_reaches_character() {
        // Width 2 at peak 100 ramps [base, white]; after one tick the
        // first character is one step behind the position and lights up
        // with the peak color.
        let mut shimmer = Shimmer::with_options(
            "Hi",
            "#00D787",
            ShimmerOptions::new()
                .wave_width(2)
                .peak_lightness(100)
                .wave_pause(0),
        );
        shimmer.tick();

        assert_eq!(shimmer.color_at(0), Color::Rgb(255, 255, 255));
        assert_eq!(shimmer.color_at(1), Color::Rgb(0, 215, 135));
    }

    #[test]
    fn test_reverse_swaps_highlight() {
        // Same setup as the forward case but reversed: the window
        // enters from the right, so 'i' gets the ramp color first.
        let shimmer = Shimmer::with_options(
            "Hi",
            "#00D787",
            ShimmerOptions::new()
                .wave_width(2)
                .peak_lightness(100)
                .wave_pause(0)
                .direction(Direction::Reverse),
        );

        assert_eq!(shimmer.color_at(1), Color::Rgb(0, 215, 135));
        assert_eq!(shimmer.color_at(0), base_color(&shimmer));
    }

    #[test]
    fn test_wave_pause_extends_cycle() {
        let mut shimmer = Shimmer::with_options(
            "Hi",
            "#00D787",
            ShimmerOptions::new().wave_width(2).wave_pause(3),
        );
        // 2 text + 2 wave + 3 pause = 7 positions before wrap
        for expected in [1, 2, 3, 4, 5, 6, 0] {
            shimmer.tick();
            assert_eq!(shimmer.position(), expected);
        }
    }

    #[test]
    fn test_spans_one_per_code_point() {
        let shimmer = Shimmer::new("héllo", "#00D787");
        let spans = shimmer.spans();
        assert_eq!(spans.len(), 5);
        let rendered: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "héllo");
    }

    #[test]
    fn test_empty_text_is_safe() {
        let mut shimmer = Shimmer::with_options(
            "",
            "#00D787",
            ShimmerOptions::new().wave_width(2).wave_pause(0),
        );
        assert!(shimmer.spans().is_empty());
        // Cycle length is the wave alone; ticking must not divide by zero
        for expected in [1, 0, 1, 0] {
            shimmer.tick();
            assert_eq!(shimmer.position(), expected);
        }
    }

    #[test]
    fn test_set_text_keeps_cycling() {
        let mut shimmer = Shimmer::with_options(
            "Loading",
            "#00D787",
            ShimmerOptions::new().wave_width(2).wave_pause(0),
        );
        for _ in 0..5 {
            shimmer.tick();
        }
        shimmer.set_text("Hi");
        // New cycle length is 4; position wraps under the new modulus
        shimmer.tick();
        assert!(shimmer.position() < 4);
        assert_eq!(shimmer.text(), "Hi");
    }

    #[test]
    fn test_widget_render() {
        let shimmer = Shimmer::new("Hi", "#00D787");
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        (&shimmer).render(Rect::new(0, 0, 10, 1), &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(1, 0)].symbol(), "i");
    }
}
