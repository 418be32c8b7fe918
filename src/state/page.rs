/// Scroll position, viewport and entrance timelines of the home page

use iced::Size;
use std::time::{Duration, Instant};

use super::settings::HomeVariant;
use crate::motion::{Entrance, EntranceFrame, HeroFade, Reveal};
use crate::ui::layout::{PageLayout, GRID_REVEAL_MARGIN};

/// Hero title block on mount
pub const HERO_ENTRANCE: Entrance = Entrance::new(Duration::from_millis(800), 20.0);

/// Search bar follows the title after this delay
pub const SEARCH_DELAY: Duration = Duration::from_millis(200);

/// Featured section header
pub const HEADER_ENTRANCE: Entrance = Entrance::new(Duration::from_millis(800), 20.0);

/// Each grid cell, staggered by `STAGGER`
pub const CARD_ENTRANCE: Entrance = Entrance::new(Duration::from_millis(500), 20.0);

/// Each tag chip, staggered by `STAGGER`
pub const TAG_ENTRANCE: Entrance = Entrance::new(Duration::from_millis(300), 10.0);

pub const STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct PageState {
    variant: HomeVariant,
    mounted_at: Instant,
    now: Instant,
    scroll_y: f32,
    layout: PageLayout,
    card_count: usize,
    header: Reveal,
    grid: Reveal,
}

impl PageState {
    pub fn new(variant: HomeVariant, viewport: Size, card_count: usize, now: Instant) -> Self {
        let mut page = Self {
            variant,
            mounted_at: now,
            now,
            scroll_y: 0.0,
            layout: PageLayout::new(viewport, card_count),
            card_count,
            header: Reveal::Unrevealed,
            grid: Reveal::Unrevealed,
        };
        page.observe();
        page
    }

    pub fn variant(&self) -> HomeVariant {
        self.variant
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Time since the page was mounted
    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.mounted_at)
    }

    #[cfg(test)]
    pub fn header_revealed(&self) -> bool {
        self.header.is_revealed()
    }

    #[cfg(test)]
    pub fn grid_revealed(&self) -> bool {
        self.grid.is_revealed()
    }

    /// Scroll events arrive while no frames are running, so they carry
    /// their own timestamp for any reveal they trigger.
    pub fn scrolled(&mut self, offset_y: f32, now: Instant) {
        self.scroll_y = offset_y.max(0.0);
        self.advance(now);
        self.observe();
    }

    pub fn resized(&mut self, viewport: Size, now: Instant) {
        self.layout = PageLayout::new(viewport, self.card_count);
        self.advance(now);
        self.observe();
    }

    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
        self.observe();
    }

    /// Frame timestamps can predate an event handled just before them
    fn advance(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    /// Latch reveals for sections that are now on screen
    fn observe(&mut self) {
        let viewport_height = self.layout.viewport.height;

        if !self.variant.is_animated() {
            self.header.observe(true, self.now);
            self.grid.observe(true, self.now);
            return;
        }

        let header_visible = self
            .layout
            .header
            .intersects(self.scroll_y, viewport_height, 0.0);
        if self.header.observe(header_visible, self.now) {
            tracing::debug!("Section header revealed at scroll {}", self.scroll_y);
        }

        let grid_visible =
            self.layout
                .grid
                .intersects(self.scroll_y, viewport_height, GRID_REVEAL_MARGIN);
        if self.grid.observe(grid_visible, self.now) {
            tracing::debug!("Property grid revealed at scroll {}", self.scroll_y);
        }
    }

    pub fn hero_fade(&self) -> HeroFade {
        if self.variant.is_animated() {
            HeroFade::at_scroll(self.scroll_y)
        } else {
            HeroFade::IDENTITY
        }
    }

    /// Entrance frames for the hero title block and the search bar
    pub fn hero_frames(&self) -> (EntranceFrame, EntranceFrame) {
        if !self.variant.is_animated() {
            return (EntranceFrame::SETTLED, EntranceFrame::SETTLED);
        }

        let elapsed = Some(self.elapsed());
        (
            HERO_ENTRANCE.sample(elapsed),
            HERO_ENTRANCE.with_delay(SEARCH_DELAY).sample(elapsed),
        )
    }

    pub fn header_frame(&self) -> EntranceFrame {
        self.frame(HEADER_ENTRANCE, self.header.elapsed(self.now))
    }

    pub fn card_frame(&self, index: usize) -> EntranceFrame {
        self.frame(CARD_ENTRANCE.staggered(index, STAGGER), self.grid.elapsed(self.now))
    }

    /// Tag chips run from mount, independent of the grid reveal
    pub fn tag_frame(&self, index: usize) -> EntranceFrame {
        self.frame(TAG_ENTRANCE.staggered(index, STAGGER), Some(self.elapsed()))
    }

    fn frame(&self, entrance: Entrance, elapsed: Option<Duration>) -> EntranceFrame {
        if self.variant.is_animated() {
            entrance.sample(elapsed)
        } else {
            EntranceFrame::SETTLED
        }
    }

    /// Whether the hero background is on screen and drifting
    pub fn hero_is_live(&self) -> bool {
        self.variant.is_animated() && self.hero_fade().opacity > 0.0
    }

    /// Whether any entrance timeline still needs frames
    pub fn is_animating(&self, max_tags: usize) -> bool {
        if !self.variant.is_animated() {
            return false;
        }

        let mounted = Some(self.elapsed());
        let hero = HERO_ENTRANCE.with_delay(SEARCH_DELAY).is_finished(mounted);
        let tags = max_tags == 0
            || TAG_ENTRANCE
                .staggered(max_tags - 1, STAGGER)
                .is_finished(mounted);

        // Unrevealed sections wait for scroll events, not frames
        let header = !self.header.is_revealed()
            || HEADER_ENTRANCE.is_finished(self.header.elapsed(self.now));
        let grid = !self.grid.is_revealed()
            || self.card_count == 0
            || CARD_ENTRANCE
                .staggered(self.card_count - 1, STAGGER)
                .is_finished(self.grid.elapsed(self.now));

        !(hero && tags && header && grid)
    }
}
