use std::time::{Duration, Instant};

use super::transform::ease_out;

/// One-shot visibility latch.
///
/// An element starts `Unrevealed` and becomes `Revealed` the first time it
/// is observed inside the viewport. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Unrevealed,
    Revealed {
        at: Instant,
    },
}

impl Reveal {
    /// Feed the latest intersection result.
    /// Returns `true` only on the call that performs the transition.
    pub fn observe(&mut self, visible: bool, now: Instant) -> bool {
        match self {
            Reveal::Unrevealed if visible => {
                *self = Reveal::Revealed { at: now };
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed { .. })
    }

    /// Time since the reveal fired, if it has
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match self {
            Reveal::Unrevealed => None,
            Reveal::Revealed { at } => Some(now.saturating_duration_since(*at)),
        }
    }
}

/// Sampled state of an entrance animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    /// Downward offset in logical pixels; 0.0 at rest
    pub offset_y: f32,
}

impl EntranceFrame {
    pub const SETTLED: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

/// Fade-and-rise timeline: `{opacity 0, y +distance}` to `{opacity 1, y 0}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub duration: Duration,
    pub delay: Duration,
    pub distance: f32,
}

impl Entrance {
    pub const fn new(duration: Duration, distance: f32) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            distance,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay for the `index`-th element of a staggered group
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        self.with_delay(self.delay + step * index as u32)
    }

    /// Sample the timeline; `None` means the trigger has not fired yet
    pub fn sample(&self, elapsed: Option<Duration>) -> EntranceFrame {
        let Some(elapsed) = elapsed else {
            return EntranceFrame {
                opacity: 0.0,
                offset_y: self.distance,
            };
        };

        let running = elapsed.saturating_sub(self.delay);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            ease_out(running.as_secs_f32() / self.duration.as_secs_f32())
        };

        EntranceFrame {
            opacity: progress,
            offset_y: self.distance * (1.0 - progress),
        }
    }

    /// Whether the timeline has reached its final frame
    pub fn is_finished(&self, elapsed: Option<Duration>) -> bool {
        elapsed.is_some_and(|e| e >= self.delay + self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let start = Instant::now();
        let mut reveal = Reveal::default();

        assert!(!reveal.observe(false, start));
        assert!(reveal.observe(true, start + Duration::from_millis(10)));

        // Leaving and re-entering the viewport never replays
        assert!(!reveal.observe(false, start + Duration::from_millis(20)));
        assert!(!reveal.observe(true, start + Duration::from_millis(30)));

        assert_eq!(
            reveal,
            Reveal::Revealed {
                at: start + Duration::from_millis(10)
            }
        );
    }

    #[test]
    fn test_reveal_elapsed() {
        let start = Instant::now();
        let mut reveal = Reveal::Unrevealed;
        assert_eq!(reveal.elapsed(start), None);

        reveal.observe(true, start);
        assert_eq!(
            reveal.elapsed(start + Duration::from_millis(250)),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_entrance_before_trigger_is_hidden() {
        let entrance = Entrance::new(Duration::from_millis(800), 20.0);
        assert_eq!(
            entrance.sample(None),
            EntranceFrame {
                opacity: 0.0,
                offset_y: 20.0
            }
        );
    }

    #[test]
    fn test_entrance_respects_delay_and_settles() {
        let entrance =
            Entrance::new(Duration::from_millis(500), 20.0).with_delay(Duration::from_millis(200));

        let waiting = entrance.sample(Some(Duration::from_millis(150)));
        assert_eq!(waiting.opacity, 0.0);
        assert_eq!(waiting.offset_y, 20.0);

        let moving = entrance.sample(Some(Duration::from_millis(450)));
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);

        assert_eq!(
            entrance.sample(Some(Duration::from_millis(700))),
            EntranceFrame::SETTLED
        );
        assert!(entrance.is_finished(Some(Duration::from_millis(700))));
        assert!(!entrance.is_finished(None));
    }

    #[test]
    fn test_staggered_delay() {
        let base = Entrance::new(Duration::from_millis(300), 10.0);
        let step = Duration::from_millis(100);

        assert_eq!(base.staggered(0, step).delay, Duration::ZERO);
        assert_eq!(base.staggered(2, step).delay, Duration::from_millis(200));
    }
}
