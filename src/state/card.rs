/// Per-card interaction state: hover flag, tilt springs and the elevation
/// of the content layer.

use iced::{Point, Rectangle};
use std::time::Duration;

use crate::motion::tilt::{self, Tilt};
use crate::motion::{Spring, SpringConfig};

/// Height the content layer rises to while hovered
pub const HOVER_ELEVATION: f32 = 50.0;

/// Cover image zoom while hovered
pub const HOVER_ZOOM: f32 = 1.1;

#[derive(Debug, Clone)]
pub struct CardState {
    hovered: bool,
    target: Tilt,
    rotate_x: Spring,
    rotate_y: Spring,
    elevation: Spring,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            hovered: false,
            target: Tilt::FLAT,
            rotate_x: Spring::new(SpringConfig::TILT, 0.0),
            rotate_y: Spring::new(SpringConfig::TILT, 0.0),
            elevation: Spring::new(SpringConfig::GENTLE, 0.0),
        }
    }
}

impl CardState {
    /// Pointer moved over the card. `rect` is the card's bounds at event
    /// time; without it there is nothing to measure against and the event
    /// is dropped.
    pub fn pointer_moved(&mut self, pointer: Point, rect: Option<Rectangle>) {
        let Some(offset) = rect.and_then(|rect| tilt::pointer_offset(pointer, rect)) else {
            return;
        };

        self.hovered = true;
        self.target = Tilt::from_offset(offset);
        self.rotate_x.set_target(self.target.rotate_x);
        self.rotate_y.set_target(self.target.rotate_y);
        self.elevation.set_target(HOVER_ELEVATION);
    }

    /// Pointer left the card: relax to flat and lower the content layer
    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.target = Tilt::FLAT;
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.elevation.set_target(0.0);
    }

    /// Advance the springs by one frame
    pub fn tick(&mut self, dt: Duration) {
        self.rotate_x.step(dt);
        self.rotate_y.step(dt);
        self.elevation.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_at_rest() && self.rotate_y.is_at_rest() && self.elevation.is_at_rest()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Rotation the springs are heading to
    #[cfg(test)]
    pub fn target(&self) -> Tilt {
        self.target
    }

    /// Smoothed rotation for the current frame
    pub fn tilt(&self) -> Tilt {
        Tilt {
            rotate_x: self.rotate_x.value(),
            rotate_y: self.rotate_y.value(),
        }
    }

    /// Current height of the content layer above the card plane
    pub fn elevation(&self) -> f32 {
        self.elevation.value()
    }

    /// Cover zoom, following the content layer
    pub fn zoom(&self) -> f32 {
        1.0 + (HOVER_ZOOM - 1.0) * (self.elevation() / HOVER_ELEVATION).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn rect() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(300.0, 400.0))
    }

    fn settle(card: &mut CardState) {
        for _ in 0..600 {
            card.tick(Duration::from_micros(16_667));
        }
    }

    #[test]
    fn test_move_sets_hover_and_target() {
        let mut card = CardState::default();
        card.pointer_moved(Point::new(300.0, 200.0), Some(rect()));

        assert!(card.is_hovered());
        assert_eq!(card.target(), Tilt { rotate_x: 0.0, rotate_y: 10.0 });
        assert!(!card.is_settled());
    }

    #[test]
    fn test_missing_rect_is_ignored() {
        let mut card = CardState::default();
        card.pointer_moved(Point::new(10.0, 10.0), None);

        assert!(!card.is_hovered());
        assert_eq!(card.target(), Tilt::FLAT);
        assert!(card.is_settled());
    }

    #[test]
    fn test_leave_resets_regardless_of_tilt() {
        for (x, y) in [(0.0, 0.0), (300.0, 400.0), (150.0, 10.0), (290.0, 390.0)] {
            let mut card = CardState::default();
            card.pointer_moved(Point::new(x, y), Some(rect()));
            settle(&mut card);
            card.pointer_left();

            assert!(!card.is_hovered());
            assert_eq!(card.target(), Tilt::FLAT);
        }
    }

    #[test]
    fn test_springs_follow_pointer_then_relax() {
        let mut card = CardState::default();
        card.pointer_moved(Point::new(0.0, 0.0), Some(rect()));
        settle(&mut card);

        assert_eq!(card.tilt(), Tilt { rotate_x: 10.0, rotate_y: -10.0 });
        assert_eq!(card.elevation(), HOVER_ELEVATION);
        assert!((card.zoom() - HOVER_ZOOM).abs() < 1e-6);

        card.pointer_left();
        settle(&mut card);

        assert_eq!(card.tilt(), Tilt::FLAT);
        assert_eq!(card.elevation(), 0.0);
        assert_eq!(card.zoom(), 1.0);
        assert!(card.is_settled());
    }

    #[test]
    fn test_last_move_wins() {
        let mut card = CardState::default();
        card.pointer_moved(Point::new(0.0, 0.0), Some(rect()));
        card.pointer_moved(Point::new(150.0, 200.0), Some(rect()));

        assert_eq!(card.target(), Tilt::FLAT);
        assert!(card.is_hovered());
    }
}
