/// Property card
///
/// The whole card is a canvas so it can be drawn as a tilted plane: the
/// cover is painted cell by cell through the perspective projection, and
/// the content block floats above the plane at the hover elevation.
use iced::alignment;
use iced::font::Weight;
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Frame, Path, Program, Stroke};
use iced::widget::{canvas as canvas_widget, Canvas};
use iced::{Color, Font, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

use crate::assets::CoverTexture;
use crate::motion::tilt::{Projection, Tilt};
use crate::motion::EntranceFrame;
use crate::state::card::HOVER_ELEVATION;
use crate::state::listing::Listing;
use crate::ui::layout::CARD_MARGIN;
use crate::ui::palette::{self, fade, mix};
use crate::Message;

/// Corner radius of the card and its controls
const RADIUS: f32 = 8.0;
const BUTTON_RADIUS: f32 = 6.0;

/// Inner padding of the content block
const PADDING: f32 = 16.0;

const LABEL_SIZE: f32 = 14.0;
const PRICE_SIZE: f32 = 24.0;
const TITLE_SIZE: f32 = 20.0;
const LOCATION_SIZE: f32 = 16.0;
const CHIP_TEXT_SIZE: f32 = 12.0;

const BUTTON_SIZE: Size = Size {
    width: 104.0,
    height: 36.0,
};

const CHIP_HEIGHT: f32 = 24.0;
const CHIP_PADDING: f32 = 8.0;
const CHIP_GAP: f32 = 8.0;

/// Rough advance of proportional text, as a fraction of its size
const GLYPH_WIDTH: f32 = 0.55;

/// Pointer events reported by a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// Pointer moved over the card. `rect` is the card's bounds at event
    /// time, absent when the card has no area.
    PointerMoved {
        pointer: Point,
        rect: Option<Rectangle>,
    },
    PointerLeft,
    ViewDetails,
}

/// Everything needed to draw one card for one frame
#[derive(Debug, Clone)]
pub struct PropertyCard<'a> {
    pub index: usize,
    pub listing: &'a Listing,
    pub cover: &'a CoverTexture,
    pub tilt: Tilt,
    pub elevation: f32,
    pub zoom: f32,
    pub entrance: EntranceFrame,
    pub tags: Vec<EntranceFrame>,
}

impl<'a> PropertyCard<'a> {
    pub fn view(self, cell: Size) -> Canvas<Self, Message> {
        canvas_widget(self)
            .width(Length::Fixed(cell.width))
            .height(Length::Fixed(cell.height))
    }
}

/// Card bounds inside a canvas cell
pub fn card_rect(cell: Rectangle) -> Option<Rectangle> {
    let width = cell.width - 2.0 * CARD_MARGIN;
    let height = cell.height - 2.0 * CARD_MARGIN;

    (width > 0.0 && height > 0.0).then(|| {
        Rectangle::new(
            Point::new(cell.x + CARD_MARGIN, cell.y + CARD_MARGIN),
            Size::new(width, height),
        )
    })
}

/// Card parts in card-local coordinates (origin at the card center)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub body: Rectangle,
    pub cover: Rectangle,
    pub details: Rectangle,
    pub button: Rectangle,
    pub title: Point,
    pub location: Point,
    pub price_label: Point,
    pub price: Point,
    pub tags: Point,
}

impl CardGeometry {
    pub fn new(size: Size) -> Self {
        let left = -size.width / 2.0;
        let top = -size.height / 2.0;
        let cover_height = size.width * 3.0 / 4.0;

        let body = Rectangle::new(Point::new(left, top), size);
        let cover = Rectangle::new(Point::new(left, top), Size::new(size.width, cover_height));
        let details = Rectangle::new(
            Point::new(left, top + cover_height),
            Size::new(size.width, (size.height - cover_height).max(0.0)),
        );

        let location = Point::new(
            left + PADDING,
            cover.y + cover.height - PADDING - LOCATION_SIZE * 1.5,
        );
        let title = Point::new(location.x, location.y - TITLE_SIZE * 1.4);

        let price_label = Point::new(left + PADDING, details.y + PADDING);
        let price = Point::new(price_label.x, price_label.y + LABEL_SIZE * 1.4 + 4.0);
        let price_block = LABEL_SIZE * 1.4 + 4.0 + PRICE_SIZE * 1.3;

        let button = Rectangle::new(
            Point::new(
                left + size.width - PADDING - BUTTON_SIZE.width,
                details.y + PADDING + (price_block - BUTTON_SIZE.height) / 2.0,
            ),
            BUTTON_SIZE,
        );

        let tags = Point::new(left + PADDING, details.y + PADDING + price_block + PADDING);

        Self {
            body,
            cover,
            details,
            button,
            title,
            location,
            price_label,
            price,
            tags,
        }
    }

    /// Width available to the tag row
    pub fn tags_width(&self) -> f32 {
        (self.body.width - 2.0 * PADDING).max(0.0)
    }
}

/// Lay tag chips out left to right, wrapping when a row is full
pub fn layout_tags(tags: &[&str], origin: Point, max_width: f32) -> Vec<Rectangle> {
    let mut chips = Vec::with_capacity(tags.len());
    let mut x = origin.x;
    let mut y = origin.y;

    for tag in tags {
        let width = (tag.chars().count() as f32 * CHIP_TEXT_SIZE * GLYPH_WIDTH
            + 2.0 * CHIP_PADDING)
            .min(max_width);

        if x > origin.x && x + width > origin.x + max_width {
            x = origin.x;
            y += CHIP_HEIGHT + CHIP_GAP;
        }

        chips.push(Rectangle::new(Point::new(x, y), Size::new(width, CHIP_HEIGHT)));
        x += width + CHIP_GAP;
    }

    chips
}

/// Local pointer tracking so leaving the card can be reported once
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    inside: bool,
}

impl<'a> Program<Message> for PropertyCard<'a> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let card = card_rect(bounds);

        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let over = cursor
                    .position()
                    .filter(|p| card.is_some_and(|card| card.contains(*p)));

                match over {
                    Some(pointer) => {
                        state.inside = true;
                        let event = CardEvent::PointerMoved {
                            pointer,
                            rect: card,
                        };
                        return (
                            canvas::event::Status::Ignored,
                            Some(Message::Card(self.index, event)),
                        );
                    }
                    None if state.inside => {
                        state.inside = false;
                        return (
                            canvas::event::Status::Ignored,
                            Some(Message::Card(self.index, CardEvent::PointerLeft)),
                        );
                    }
                    None => {}
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                return (
                    canvas::event::Status::Ignored,
                    Some(Message::Card(self.index, CardEvent::PointerLeft)),
                );
            }

            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let (Some(card), Some(pointer)) = (card, cursor.position()) {
                    if button_bounds(card).contains(pointer) {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::Card(self.index, CardEvent::ViewDetails)),
                        );
                    }
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let opacity = self.entrance.opacity;

        let Some(card) = card_rect(Rectangle::with_size(bounds.size())) else {
            return vec![frame.into_geometry()];
        };
        if opacity <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let origin = card.center() + Vector::new(0.0, self.entrance.offset_y);
        let projection = Projection::new(self.tilt, origin);
        let geometry = CardGeometry::new(card.size());
        let lift = (self.elevation / HOVER_ELEVATION).clamp(0.0, 1.0);

        // Shadow grows with the content layer
        for (spread, alpha) in [(2.0, 0.05), (6.0, 0.04), (12.0, 0.03)] {
            let shadow = grow(geometry.body, spread);
            frame.fill(
                &rounded(&projection, shadow, RADIUS + spread, 0.0, Vector::new(0.0, 6.0 + 6.0 * lift)),
                fade(Color::BLACK, (alpha + 0.03 * lift) * opacity),
            );
        }

        frame.fill(
            &rounded(&projection, geometry.body, RADIUS, 0.0, Vector::ZERO),
            fade(palette::CARD, opacity),
        );

        self.draw_cover(&mut frame, &projection, &geometry, opacity);
        self.draw_details(&mut frame, &projection, &geometry, opacity, cursor.position_in(bounds), card);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        let over_button = card_rect(bounds)
            .zip(cursor.position())
            .is_some_and(|(card, p)| button_bounds(card).contains(p));

        if over_button {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> PropertyCard<'a> {
    fn draw_cover(&self, frame: &mut Frame, projection: &Projection, geometry: &CardGeometry, opacity: f32) {
        let cover = geometry.cover;
        let columns = self.cover.columns().max(1);
        let rows = self.cover.rows().max(1);
        let cell = Size::new(cover.width / columns as f32, cover.height / rows as f32);
        let zoom = self.zoom.max(1.0);

        for row in 0..rows {
            for col in 0..columns {
                let u = (col as f32 + 0.5) / columns as f32;
                let v = (row as f32 + 0.5) / rows as f32;

                // Zoom samples toward the center, like scaling the image up
                let sample = self.cover.sample(0.5 + (u - 0.5) / zoom, 0.5 + (v - 0.5) / zoom);
                // Bottom-up darkening so the title stays readable
                let shaded = mix(sample, Color::BLACK, 0.5 * v);

                let local = Rectangle::new(
                    Point::new(cover.x + col as f32 * cell.width, cover.y + row as f32 * cell.height),
                    cell,
                );

                // Round only the cells sitting in the card's top corners
                let radius = if row == 0 && (col == 0 || col == columns - 1) {
                    RADIUS.min(cell.width).min(cell.height)
                } else {
                    0.0
                };
                let path = if radius > 0.0 {
                    corner_cell(projection, local, radius, col == 0)
                } else {
                    quad(projection, grow(local, 0.35), 0.0)
                };

                frame.fill(&path, fade(shaded, opacity));
            }
        }

        let (title, scale) = projection.project(geometry.title.x, geometry.title.y, 0.0);
        frame.fill_text(text(
            self.listing.title,
            title,
            TITLE_SIZE * scale,
            fade(palette::WHITE, opacity),
            Weight::Semibold,
        ));

        let (location, scale) = projection.project(geometry.location.x, geometry.location.y, 0.0);
        frame.fill_text(text(
            self.listing.location,
            location,
            LOCATION_SIZE * scale,
            fade(palette::WHITE, 0.9 * opacity),
            Weight::Normal,
        ));
    }

    fn draw_details(
        &self,
        frame: &mut Frame,
        projection: &Projection,
        geometry: &CardGeometry,
        opacity: f32,
        cursor: Option<Point>,
        card: Rectangle,
    ) {
        let z = self.elevation;

        let (label, scale) = projection.project(geometry.price_label.x, geometry.price_label.y, z);
        frame.fill_text(text(
            "Starting from",
            label,
            LABEL_SIZE * scale,
            fade(palette::MUTED_FOREGROUND, opacity),
            Weight::Normal,
        ));

        let (price, scale) = projection.project(geometry.price.x, geometry.price.y, z);
        frame.fill_text(text(
            &self.listing.formatted_price(),
            price,
            PRICE_SIZE * scale,
            fade(palette::FOREGROUND, opacity),
            Weight::Bold,
        ));

        // Outline button
        let hovered = cursor.is_some_and(|p| button_bounds(card).contains(p));
        let button = rounded(projection, geometry.button, BUTTON_RADIUS, z, Vector::ZERO);
        let fill = if hovered { palette::MUTED } else { palette::CARD };
        frame.fill(&button, fade(fill, opacity));
        frame.stroke(
            &button,
            Stroke::default()
                .with_color(fade(palette::BORDER, opacity))
                .with_width(1.0),
        );

        let (center, scale) = projection.project(geometry.button.center_x(), geometry.button.center_y(), z);
        frame.fill_text(canvas::Text {
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..text("View Details", center, LABEL_SIZE * scale, fade(palette::FOREGROUND, opacity), Weight::Medium)
        });

        // Tag chips, each with its own entrance
        let chips = layout_tags(self.listing.tags, geometry.tags, geometry.tags_width());
        for (i, (tag, chip)) in self.listing.tags.iter().zip(chips).enumerate() {
            let entrance = self.tags.get(i).copied().unwrap_or(EntranceFrame::SETTLED);
            let alpha = opacity * entrance.opacity;
            if alpha <= 0.0 {
                continue;
            }

            let chip = Rectangle {
                y: chip.y + entrance.offset_y,
                ..chip
            };
            let path = rounded(projection, chip, BUTTON_RADIUS, z, Vector::ZERO);
            frame.fill(&path, fade(palette::CHIP_FILL, alpha));
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(fade(palette::CHIP_RING, alpha))
                    .with_width(1.0),
            );

            let (anchor, scale) = projection.project(chip.x + CHIP_PADDING, chip.center_y(), z);
            frame.fill_text(canvas::Text {
                vertical_alignment: alignment::Vertical::Center,
                ..text(tag, anchor, CHIP_TEXT_SIZE * scale, fade(palette::CHIP_TEXT, alpha), Weight::Medium)
            });
        }
    }
}

/// Screen-space bounds of the "View Details" button, ignoring tilt
pub fn button_bounds(card: Rectangle) -> Rectangle {
    let local = CardGeometry::new(card.size()).button;
    let center = card.center();
    Rectangle {
        x: center.x + local.x,
        y: center.y + local.y,
        ..local
    }
}

fn text(content: &str, position: Point, size: f32, color: Color, weight: Weight) -> canvas::Text {
    canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(size),
        font: Font {
            weight,
            ..Font::DEFAULT
        },
        ..canvas::Text::default()
    }
}

fn grow(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x - amount, rect.y - amount),
        Size::new(rect.width + 2.0 * amount, rect.height + 2.0 * amount),
    )
}

/// Projected quadrilateral for a local rectangle at height `z`
fn quad(projection: &Projection, rect: Rectangle, z: f32) -> Path {
    let corners = [
        projection.point(rect.x, rect.y, z),
        projection.point(rect.x + rect.width, rect.y, z),
        projection.point(rect.x + rect.width, rect.y + rect.height, z),
        projection.point(rect.x, rect.y + rect.height, z),
    ];
    polygon(&corners)
}

/// Projected rounded rectangle, shifted on screen by `offset`
fn rounded(projection: &Projection, rect: Rectangle, radius: f32, z: f32, offset: Vector) -> Path {
    let points: Vec<Point> = rounded_outline(rect, [radius; 4])
        .into_iter()
        .map(|(x, y)| projection.point(x, y, z) + offset)
        .collect();
    polygon(&points)
}

/// Top corner cell of the cover, rounded on its outer corner only
fn corner_cell(projection: &Projection, rect: Rectangle, radius: f32, left: bool) -> Path {
    let radii = if left {
        [radius, 0.0, 0.0, 0.0]
    } else {
        [0.0, radius, 0.0, 0.0]
    };
    let points: Vec<Point> = rounded_outline(rect, radii)
        .into_iter()
        .map(|(x, y)| projection.point(x, y, 0.0))
        .collect();
    polygon(&points)
}

/// Outline of a rectangle with per-corner radii
/// (top-left, top-right, bottom-right, bottom-left), clockwise
fn rounded_outline(rect: Rectangle, radii: [f32; 4]) -> Vec<(f32, f32)> {
    const SEGMENTS: usize = 4;
    let max = rect.width.min(rect.height) / 2.0;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);

    // Arc centers and start angles, clockwise from top-left in y-down space
    let corners = [
        (left, top, 1.0, 1.0, std::f32::consts::PI),
        (right, top, -1.0, 1.0, 1.5 * std::f32::consts::PI),
        (right, bottom, -1.0, -1.0, 0.0),
        (left, bottom, 1.0, -1.0, 0.5 * std::f32::consts::PI),
    ];

    let mut points = Vec::with_capacity(4 * (SEGMENTS + 1));
    for ((x, y, dx, dy, start), radius) in corners.into_iter().zip(radii) {
        let r = radius.clamp(0.0, max);
        if r == 0.0 {
            points.push((x, y));
            continue;
        }

        let (cx, cy) = (x + dx * r, y + dy * r);
        for step in 0..=SEGMENTS {
            let angle = start + std::f32::consts::FRAC_PI_2 * step as f32 / SEGMENTS as f32;
            points.push((cx + r * angle.cos(), cy + r * angle.sin()));
        }
    }

    points
}

fn polygon(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::listing::FEATURED;

    fn card_size() -> Size {
        Size::new(362.0, 362.0 * 0.75 + crate::ui::layout::CARD_DETAILS_HEIGHT)
    }

    #[test]
    fn test_card_rect_removes_margin() {
        let cell = Rectangle::new(Point::new(10.0, 20.0), Size::new(200.0, 300.0));
        let card = card_rect(cell).unwrap();

        assert_eq!(card.x, 10.0 + CARD_MARGIN);
        assert_eq!(card.width, 200.0 - 2.0 * CARD_MARGIN);

        let tiny = Rectangle::new(Point::ORIGIN, Size::new(20.0, 20.0));
        assert_eq!(card_rect(tiny), None);
    }

    #[test]
    fn test_geometry_stacks_cover_over_details() {
        let size = card_size();
        let geometry = CardGeometry::new(size);

        assert_eq!(geometry.cover.y, -size.height / 2.0);
        assert_eq!(geometry.details.y, geometry.cover.y + geometry.cover.height);
        assert!((geometry.details.y + geometry.details.height - size.height / 2.0).abs() < 1e-3);

        // Title sits above location, both inside the cover
        assert!(geometry.title.y < geometry.location.y);
        assert!(geometry.location.y < geometry.details.y);
    }

    #[test]
    fn test_button_is_inside_details() {
        let geometry = CardGeometry::new(card_size());
        let details = geometry.details;
        let button = geometry.button;

        assert!(button.x > details.x);
        assert!(button.x + button.width < details.x + details.width);
        assert!(button.y > details.y);
        assert!(button.y + button.height < details.y + details.height);
    }

    #[test]
    fn test_featured_tags_fit_the_details_block() {
        let geometry = CardGeometry::new(card_size());

        for listing in &FEATURED {
            let chips = layout_tags(listing.tags, geometry.tags, geometry.tags_width());
            assert_eq!(chips.len(), listing.tags.len());

            let bottom = chips.iter().map(|c| c.y + c.height).fold(f32::MIN, f32::max);
            assert!(bottom <= geometry.details.y + geometry.details.height);
        }
    }

    #[test]
    fn test_tags_wrap_when_row_is_full() {
        let chips = layout_tags(&["Pool", "Beach Access", "24/7 Security"], Point::ORIGIN, 150.0);

        assert_eq!(chips[0].y, 0.0);
        assert_eq!(chips[1].y, 0.0);
        assert_eq!(chips[2].y, CHIP_HEIGHT + CHIP_GAP);
        assert_eq!(chips[2].x, 0.0);
    }

    #[test]
    fn test_button_bounds_in_screen_space() {
        let card = Rectangle::new(Point::new(100.0, 100.0), card_size());
        let button = button_bounds(card);

        assert!(card.contains(Point::new(button.x, button.y)));
        assert_eq!(button.width, BUTTON_SIZE.width);
    }

    #[test]
    fn test_rounded_outline_point_count() {
        let rect = Rectangle::new(Point::ORIGIN, Size::new(40.0, 20.0));

        assert_eq!(rounded_outline(rect, [0.0; 4]).len(), 4);
        assert_eq!(rounded_outline(rect, [4.0; 4]).len(), 20);

        // Radius is capped by the shorter side
        let points = rounded_outline(rect, [50.0, 0.0, 0.0, 0.0]);
        assert!(points.iter().all(|(x, y)| *x >= -1e-4 && *y >= -1e-4));
    }
}
