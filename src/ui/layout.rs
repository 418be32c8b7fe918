/// Page geometry.
///
/// iced does not report where a widget ended up, so intersection tests
/// work from the same constants the view uses to build the page.

use iced::Size;

/// Widest the page content gets
pub const CONTAINER_MAX_WIDTH: f32 = 1280.0;

/// Horizontal padding inside the content container
pub const CONTAINER_PADDING: f32 = 16.0;

/// Vertical padding of the featured section
pub const SECTION_PADDING: f32 = 96.0;

/// Height of the featured section title and blurb
pub const HEADER_HEIGHT: f32 = 104.0;

/// Space between the section header and the grid
pub const HEADER_GAP: f32 = 48.0;

/// Gap between grid cells
pub const GRID_GAP: f32 = 32.0;

/// Room around each card so tilted edges are not clipped
pub const CARD_MARGIN: f32 = 16.0;

/// Height of the card's content block under the cover
pub const CARD_DETAILS_HEIGHT: f32 = 156.0;

/// Viewport inset for the grid reveal; the grid triggers once it is this
/// far inside the viewport
pub const GRID_REVEAL_MARGIN: f32 = 100.0;

/// Breakpoints for 2 and 3 columns
pub const MEDIUM_BREAKPOINT: f32 = 768.0;
pub const LARGE_BREAKPOINT: f32 = 1024.0;

/// Number of grid columns for a viewport width
pub fn grid_columns(width: f32) -> usize {
    if width < MEDIUM_BREAKPOINT {
        1
    } else if width < LARGE_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Vertical extent of an element within the scrollable content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    /// Whether the span overlaps the viewport shrunk by `margin` on the top
    /// and bottom edges
    pub fn intersects(&self, scroll_y: f32, viewport_height: f32, margin: f32) -> bool {
        let view_top = scroll_y + margin;
        let view_bottom = scroll_y + viewport_height - margin;

        view_top < view_bottom && self.top < view_bottom && self.bottom > view_top
    }
}

/// Resolved geometry of the home page for one viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport: Size,
    pub columns: usize,
    pub content_width: f32,
    /// Visible card size
    pub card: Size,
    /// Size of one canvas cell, card plus its margin on every side
    pub cell: Size,
    pub header: Span,
    pub grid: Span,
}

impl PageLayout {
    pub fn new(viewport: Size, card_count: usize) -> Self {
        let columns = grid_columns(viewport.width);
        let content_width =
            (viewport.width.min(CONTAINER_MAX_WIDTH) - 2.0 * CONTAINER_PADDING).max(0.0);

        let gaps = GRID_GAP * (columns - 1) as f32;
        let card_width = ((content_width - gaps) / columns as f32).max(0.0);
        let card = Size::new(card_width, card_width * 3.0 / 4.0 + CARD_DETAILS_HEIGHT);
        let cell = Size::new(
            card.width + 2.0 * CARD_MARGIN,
            card.height + 2.0 * CARD_MARGIN,
        );

        // The hero fills the first screen
        let header_top = viewport.height + SECTION_PADDING;
        let header = Span {
            top: header_top,
            bottom: header_top + HEADER_HEIGHT,
        };

        let rows = card_count.div_ceil(columns);
        let grid_top = header.bottom + HEADER_GAP;
        let grid_height = rows as f32 * card.height + rows.saturating_sub(1) as f32 * GRID_GAP;
        let grid = Span {
            top: grid_top,
            bottom: grid_top + grid_height,
        };

        Self {
            viewport,
            columns,
            content_width,
            card,
            cell,
            header,
            grid,
        }
    }

    /// Spacing between neighbouring cells; margins already provide part
    /// of the visual gap
    pub fn cell_spacing(&self) -> f32 {
        (GRID_GAP - 2.0 * CARD_MARGIN).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(375.0), 1);
        assert_eq!(grid_columns(767.9), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1024.0), 3);
        assert_eq!(grid_columns(2560.0), 3);
    }

    #[test]
    fn test_layout_below_the_hero() {
        let layout = PageLayout::new(Size::new(1280.0, 800.0), 3);

        assert_eq!(layout.columns, 3);
        assert_eq!(layout.content_width, 1248.0);
        assert_eq!(layout.header.top, 800.0 + SECTION_PADDING);
        assert_eq!(layout.grid.top, layout.header.bottom + HEADER_GAP);
        assert_eq!(layout.grid.bottom - layout.grid.top, layout.card.height);
        assert_eq!(layout.cell.width, layout.card.width + 2.0 * CARD_MARGIN);
    }

    #[test]
    fn test_single_column_stacks_rows() {
        let layout = PageLayout::new(Size::new(400.0, 800.0), 3);

        assert_eq!(layout.columns, 1);
        let height = layout.grid.bottom - layout.grid.top;
        assert_eq!(height, 3.0 * layout.card.height + 2.0 * GRID_GAP);
        assert_eq!(layout.card.width, 400.0 - 2.0 * CONTAINER_PADDING);
    }

    #[test]
    fn test_span_intersection_with_margin() {
        let span = Span {
            top: 1000.0,
            bottom: 1400.0,
        };

        // Top edge 50px inside the viewport: visible, but not past the margin
        assert!(span.intersects(250.0, 800.0, 0.0));
        assert!(!span.intersects(250.0, 800.0, 100.0));

        // 150px inside clears the margin
        assert!(span.intersects(350.0, 800.0, 100.0));

        // Scrolled past
        assert!(!span.intersects(1500.0, 800.0, 0.0));
    }
}
