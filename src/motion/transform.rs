/// Scroll offset at which the hero is fully faded out
pub const HERO_FADE_END: f32 = 200.0;

/// Smallest scale the hero shrinks to
pub const HERO_MIN_SCALE: f32 = 0.8;

/// Map `input` from the `from` range onto the `to` range.
///
/// Inputs outside `from` clamp to the nearest endpoint of `to`, so callers
/// never see values past the output range. Ranges may be descending on
/// either side.
pub fn interpolate(input: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 || input.is_nan() {
        return to.0;
    }

    let progress = ((input - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * progress
}

/// Opacity and scale applied to the hero block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f32,
    pub scale: f32,
}

impl HeroFade {
    /// Fully visible, unscaled
    pub const IDENTITY: HeroFade = HeroFade {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Fade and shrink the hero as the page scrolls down
    pub fn at_scroll(scroll_y: f32) -> Self {
        let scroll_y = scroll_y.max(0.0);

        HeroFade {
            opacity: interpolate(scroll_y, (0.0, HERO_FADE_END), (1.0, 0.0)),
            scale: interpolate(scroll_y, (0.0, HERO_FADE_END), (1.0, HERO_MIN_SCALE)),
        }
    }
}

impl Default for HeroFade {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Ease-out cubic, used by every duration-based transition
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_interpolate_clamps_both_ends() {
        assert!(close(interpolate(-1.0, (0.0, 1.0), (10.0, 20.0)), 10.0));
        assert!(close(interpolate(0.5, (0.0, 1.0), (10.0, 20.0)), 15.0));
        assert!(close(interpolate(3.0, (0.0, 1.0), (10.0, 20.0)), 20.0));
    }

    #[test]
    fn test_interpolate_descending_output() {
        assert!(close(interpolate(-0.5, (-0.5, 0.5), (10.0, -10.0)), 10.0));
        assert!(close(interpolate(0.0, (-0.5, 0.5), (10.0, -10.0)), 0.0));
        assert!(close(interpolate(0.25, (-0.5, 0.5), (10.0, -10.0)), -5.0));
    }

    #[test]
    fn test_interpolate_degenerate_range() {
        assert!(close(interpolate(4.0, (1.0, 1.0), (3.0, 7.0)), 3.0));
        assert!(close(interpolate(f32::NAN, (0.0, 1.0), (3.0, 7.0)), 3.0));
    }

    #[test]
    fn test_hero_fade_endpoints() {
        assert_eq!(HeroFade::at_scroll(0.0), HeroFade { opacity: 1.0, scale: 1.0 });

        let end = HeroFade::at_scroll(200.0);
        assert!(close(end.opacity, 0.0));
        assert!(close(end.scale, 0.8));

        let past = HeroFade::at_scroll(500.0);
        assert!(close(past.opacity, 0.0));
        assert!(close(past.scale, 0.8));
    }

    #[test]
    fn test_hero_fade_midpoint_and_negative() {
        let mid = HeroFade::at_scroll(100.0);
        assert!(close(mid.opacity, 0.5));
        assert!(close(mid.scale, 0.9));

        assert_eq!(HeroFade::at_scroll(-40.0), HeroFade::IDENTITY);
    }

    #[test]
    fn test_ease_out_bounds() {
        assert!(close(ease_out(0.0), 0.0));
        assert!(close(ease_out(1.0), 1.0));
        assert!(close(ease_out(2.0), 1.0));
        assert!(ease_out(0.5) > 0.5);
    }
}
