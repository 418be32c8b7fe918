/// Home page: hero on top, featured properties below, all in one
/// scrollable column
use iced::font::Weight;
use iced::widget::{column, container, scrollable, text, Space};
use iced::{
    gradient, Alignment, Background, Element, Font, Gradient, Length, Padding, Radians, Theme,
};

use crate::state::page::PageState;
use crate::state::search::SearchForm;
use crate::ui::card::PropertyCard;
use crate::ui::layout::{
    CARD_MARGIN, CONTAINER_PADDING, HEADER_GAP, HEADER_HEIGHT, SECTION_PADDING,
};
use crate::ui::palette::{self, fade};
use crate::ui::{grid, hero};
use crate::Message;

const BLURB: &str = "Explore our handpicked selection of premium properties, each offering \
                     unique features and exceptional value.";

pub fn view<'a>(
    page: &'a PageState,
    search: &'a SearchForm,
    cards: Vec<PropertyCard<'a>>,
) -> Element<'a, Message> {
    let layout = page.layout();

    let hero = hero::view(
        search,
        page.hero_fade(),
        page.hero_frames(),
        layout.viewport,
        page.elapsed().as_secs_f32(),
    );

    let content = column![
        hero,
        featured(page, cards),
    ]
    .width(Length::Fill);

    scrollable(content)
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn featured<'a>(page: &'a PageState, cards: Vec<PropertyCard<'a>>) -> Element<'a, Message> {
    let layout = page.layout();
    let frame = page.header_frame();

    let header = column![
        text("Featured Properties")
            .size(30)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .color(fade(palette::FOREGROUND, frame.opacity)),
        container(
            text(BLURB)
                .size(16)
                .color(fade(palette::MUTED_FOREGROUND, frame.opacity))
                .center(),
        )
        .max_width(672.0),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    // Entrance offset eats into the fixed header height from the top
    let header = container(header)
        .padding(Padding {
            top: frame.offset_y,
            right: CONTAINER_PADDING,
            bottom: 0.0,
            left: CONTAINER_PADDING,
        })
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .center_x(Length::Fill);

    let section = column![
        header,
        Space::with_height(Length::Fixed(HEADER_GAP - CARD_MARGIN)),
        grid::view(cards, layout),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let backdrop = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, palette::BACKGROUND)
        .add_stop(1.0, palette::MUTED);

    container(section)
        .padding(Padding {
            top: SECTION_PADDING,
            right: 0.0,
            bottom: SECTION_PADDING - CARD_MARGIN,
            left: 0.0,
        })
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(Gradient::Linear(backdrop))),
            ..container::Style::default()
        })
        .into()
}
