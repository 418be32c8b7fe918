/// Featured property grid
use iced::widget::{Column, Row};
use iced::{Element, Length};

use crate::ui::card::PropertyCard;
use crate::ui::layout::PageLayout;
use crate::Message;

/// Split cards into rows of `columns`, preserving order
pub fn rows<T>(items: Vec<T>, columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut rows: Vec<Vec<T>> = Vec::new();

    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < columns => row.push(item),
            _ => rows.push(vec![item]),
        }
    }

    rows
}

pub fn view<'a>(cards: Vec<PropertyCard<'a>>, layout: &PageLayout) -> Element<'a, Message> {
    let spacing = layout.cell_spacing();

    let grid = rows(cards, layout.columns)
        .into_iter()
        .map(|row| -> Element<'a, Message> {
            let cells = row
                .into_iter()
                .map(|card| -> Element<'a, Message> { card.view(layout.cell).into() });
            Row::with_children(cells).spacing(spacing).into()
        });

    Column::with_children(grid)
        .spacing(spacing)
        .width(Length::Fixed(
            layout.columns as f32 * layout.cell.width + (layout.columns - 1) as f32 * spacing,
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CoverTexture;
    use crate::motion::{EntranceFrame, Tilt};
    use crate::state::listing::FEATURED;

    #[test]
    fn test_rows_keep_order() {
        assert_eq!(rows(vec![1, 2, 3], 3), vec![vec![1, 2, 3]]);
        assert_eq!(rows(vec![1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
        assert_eq!(rows(vec![1, 2, 3], 1), vec![vec![1], vec![2], vec![3]]);
        assert_eq!(rows(Vec::<u8>::new(), 3), Vec::<Vec<u8>>::new());
        assert_eq!(rows(vec![1, 2], 0), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_featured_cards_render_in_order() {
        let cover = CoverTexture::placeholder();
        let cards: Vec<_> = FEATURED
            .iter()
            .enumerate()
            .map(|(index, listing)| PropertyCard {
                index,
                listing,
                cover: &cover,
                tilt: Tilt::FLAT,
                elevation: 0.0,
                zoom: 1.0,
                entrance: EntranceFrame::SETTLED,
                tags: vec![EntranceFrame::SETTLED; listing.tags.len()],
            })
            .collect();

        let laid_out = rows(cards, 3);
        assert_eq!(laid_out.len(), 1);

        let row = &laid_out[0];
        assert_eq!(row.len(), 3);
        let shown: Vec<_> = row
            .iter()
            .map(|c| (c.index, c.listing.title, c.listing.location, c.listing.tags))
            .collect();
        assert_eq!(
            shown,
            vec![
                (0, "Luxury Apartment", "New York, NY", FEATURED[0].tags),
                (1, "Modern Loft", "San Francisco, CA", FEATURED[1].tags),
                (2, "Waterfront Villa", "Miami, FL", FEATURED[2].tags),
            ]
        );
    }
}
