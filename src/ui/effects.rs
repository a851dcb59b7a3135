//! Timed text effects
//!
//! Each effect is a pure function of the time elapsed since it started, so the
//! event loop only has to redraw. A zero delay or duration produces an effect
//! that is already complete, which is how `--no-animation` is implemented.

use std::time::{Duration, Instant};

/// Typewriter delay per character of the banner title
pub const TITLE_CHAR_DELAY: Duration = Duration::from_millis(30);

/// Typewriter delay per character of the tagline
pub const SUBTITLE_CHAR_DELAY: Duration = Duration::from_millis(35);

/// Length of the progress bar shown while a demonstration starts
pub const LOADING_DURATION: Duration = Duration::from_millis(1500);

/// Length of the progress bar shown while exiting
pub const EXIT_DURATION: Duration = Duration::from_millis(2500);

/// Times the farewell message blinks before it stays on
pub const FLASH_TIMES: u32 = 3;

/// Duration of each on and off phase of the farewell blink
pub const FLASH_DELAY: Duration = Duration::from_millis(200);

/// Reveals `text` one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    started: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration, started: Instant) -> Self {
        Typewriter {
            text: text.into(),
            delay,
            started,
        }
    }

    /// Number of characters visible at `now`
    pub fn visible_chars(&self, now: Instant) -> usize {
        let total = self.text.chars().count();
        if self.delay.is_zero() {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let shown = elapsed.as_millis() / self.delay.as_millis().max(1);
        usize::try_from(shown).map_or(total, |shown| shown.min(total))
    }

    /// The prefix of the text visible at `now`
    pub fn visible(&self, now: Instant) -> &str {
        let chars = self.visible_chars(now);
        match self.text.char_indices().nth(chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.visible_chars(now) == self.text.chars().count()
    }

    /// Instant at which the last character appears
    pub fn finishes_at(&self) -> Instant {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.started + self.delay.saturating_mul(chars)
    }
}

/// A progress bar filling over a fixed duration
#[derive(Debug, Clone)]
pub struct Progress {
    message: String,
    duration: Duration,
    started: Instant,
}

impl Progress {
    pub fn new(message: impl Into<String>, duration: Duration, started: Instant) -> Self {
        Progress {
            message: message.into(),
            duration,
            started,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Fraction complete in `0.0..=1.0`
    pub fn ratio(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn percent(&self, now: Instant) -> u16 {
        (self.ratio(now) * 100.0).round() as u16
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.ratio(now) >= 1.0
    }
}

/// Text that blinks a few times and then stays on
#[derive(Debug, Clone)]
pub struct Flash {
    times: u32,
    delay: Duration,
    started: Instant,
}

impl Flash {
    pub fn new(times: u32, delay: Duration, started: Instant) -> Self {
        Flash {
            times,
            delay,
            started,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        if self.is_done(now) {
            return true;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let phase = elapsed.as_millis() / self.delay.as_millis().max(1);
        phase % 2 == 0
    }

    pub fn is_done(&self, now: Instant) -> bool {
        // on, off, on, off, ... then steady
        let total = self.delay.saturating_mul(self.times.saturating_mul(2));
        now.saturating_duration_since(self.started) >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typewriter_reveals_over_time() {
        let start = Instant::now();
        let tw = Typewriter::new("abcd", Duration::from_millis(10), start);

        assert_eq!(tw.visible(start), "");
        assert_eq!(tw.visible(start + Duration::from_millis(25)), "ab");
        assert_eq!(tw.visible(start + Duration::from_millis(100)), "abcd");
        assert!(tw.is_done(start + Duration::from_millis(40)));
        assert_eq!(tw.finishes_at(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_typewriter_multibyte() {
        let start = Instant::now();
        let tw = Typewriter::new("║ab", Duration::from_millis(10), start);

        assert_eq!(tw.visible(start + Duration::from_millis(10)), "║");
    }

    #[test]
    fn test_zero_delay_is_instant() {
        let start = Instant::now();

        assert_eq!(Typewriter::new("done", Duration::ZERO, start).visible(start), "done");
        assert!(Progress::new("x", Duration::ZERO, start).is_done(start));
        assert!(Flash::new(3, Duration::ZERO, start).is_done(start));
    }

    #[test]
    fn test_progress_ratio() {
        let start = Instant::now();
        let progress = Progress::new("Loading", Duration::from_millis(1000), start);

        assert_eq!(progress.percent(start), 0);
        assert_eq!(progress.percent(start + Duration::from_millis(500)), 50);
        assert_eq!(progress.ratio(start + Duration::from_secs(5)), 1.0);
        assert!(!progress.is_done(start + Duration::from_millis(999)));
        assert_eq!(progress.message(), "Loading");
    }

    #[test]
    fn test_flash_phases() {
        let start = Instant::now();
        let flash = Flash::new(2, Duration::from_millis(100), start);

        assert!(flash.is_visible(start + Duration::from_millis(50)));
        assert!(!flash.is_visible(start + Duration::from_millis(150)));
        assert!(flash.is_visible(start + Duration::from_millis(250)));
        assert!(!flash.is_done(start + Duration::from_millis(399)));
        assert!(flash.is_done(start + Duration::from_millis(400)));
        assert!(flash.is_visible(start + Duration::from_millis(1000)));
    }
}
