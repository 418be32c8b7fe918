/// Hero block: headline, tagline and the search bar
///
/// iced widgets have no opacity of their own, so the scroll fade is pushed
/// into every color the hero draws and the scale into its sizes.
use iced::font::Weight;
use iced::widget::{
    button, column, container, pick_list, stack, text, text_input, Column, Row, Space,
};
use iced::{
    gradient, Alignment, Background, Border, Color, Element, Font, Gradient, Length, Padding,
    Radians, Shadow, Size, Theme, Vector,
};

use crate::motion::{EntranceFrame, HeroFade};
use crate::state::search::{PropertyType, SearchForm};
use crate::ui::layout::MEDIUM_BREAKPOINT;
use crate::ui::palette::{self, fade};
use crate::Message;

const TITLE_SIZE: f32 = 60.0;
const TAGLINE_SIZE: f32 = 20.0;
const SEARCH_MAX_WIDTH: f32 = 896.0;
const TAGLINE_MAX_WIDTH: f32 = 672.0;

/// Seconds per revolution of the background accent gradient
const GRADIENT_PERIOD: f32 = 15.0;

pub fn view<'a>(
    search: &'a SearchForm,
    hero_fade: HeroFade,
    (title_frame, search_frame): (EntranceFrame, EntranceFrame),
    viewport: Size,
    elapsed: f32,
) -> Element<'a, Message> {
    let HeroFade { opacity, scale } = hero_fade;
    let title_alpha = opacity * title_frame.opacity;
    let search_alpha = title_alpha * search_frame.opacity;

    let headline = text("Find Your Perfect Home")
        .size(TITLE_SIZE * scale)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .color(fade(palette::WHITE, title_alpha));

    let tagline = container(
        text("Discover exceptional properties with our AI-powered rental platform")
            .size(TAGLINE_SIZE * scale)
            .color(fade(palette::WHITE, 0.9 * title_alpha))
            .center(),
    )
    .max_width(TAGLINE_MAX_WIDTH * scale);

    let search_row = container(search_bar(search, search_alpha, viewport.width))
        .padding(shift_down(search_frame.offset_y));

    let content = column![headline, tagline, search_row]
        .spacing(24.0 * scale)
        .align_x(Alignment::Center);

    let foreground = container(content)
        .padding(shift_down(title_frame.offset_y))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    stack![
        accent_layer(opacity, elapsed),
        shade_layer(opacity),
        foreground,
    ]
    .width(Length::Fill)
    .height(Length::Fixed(viewport.height))
    .into()
}

/// Slowly rotating blue-purple-pink wash
fn accent_layer<'a>(opacity: f32, elapsed: f32) -> Element<'a, Message> {
    let angle = std::f32::consts::TAU * (elapsed / GRADIENT_PERIOD).fract();
    let wash = gradient::Linear::new(Radians(angle))
        .add_stop(0.0, fade(palette::ACCENT_BLUE, opacity))
        .add_stop(0.5, fade(palette::ACCENT_PURPLE, opacity))
        .add_stop(1.0, fade(palette::ACCENT_PINK, opacity));

    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(Gradient::Linear(wash))),
            ..container::Style::default()
        })
        .into()
}

/// Left-to-right dark overlay
fn shade_layer<'a>(opacity: f32) -> Element<'a, Message> {
    let shade = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, fade(Color::BLACK, 0.5 * opacity))
        .add_stop(1.0, fade(Color::BLACK, 0.25 * opacity));

    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(Gradient::Linear(shade))),
            ..container::Style::default()
        })
        .into()
}

fn search_bar<'a>(search: &'a SearchForm, alpha: f32, width: f32) -> Element<'a, Message> {
    let location = text_input("Location", &search.location)
        .on_input(Message::LocationChanged)
        .on_submit(Message::Search)
        .padding(10)
        .style(move |theme: &Theme, status| {
            let base = text_input::default(theme, status);
            text_input::Style {
                background: fade_background(base.background, alpha),
                border: fade_border(base.border, alpha),
                icon: fade(base.icon, alpha),
                placeholder: fade(base.placeholder, alpha),
                value: fade(base.value, alpha),
                selection: fade(base.selection, alpha),
            }
        });

    let move_in = text_input("Move-in Date (YYYY-MM-DD)", &search.move_in)
        .on_input(Message::MoveInChanged)
        .on_submit(Message::Search)
        .padding(10)
        .style(move |theme: &Theme, status| {
            let base = text_input::default(theme, status);
            text_input::Style {
                background: fade_background(base.background, alpha),
                border: fade_border(base.border, alpha),
                icon: fade(base.icon, alpha),
                placeholder: fade(base.placeholder, alpha),
                value: fade(base.value, alpha),
                selection: fade(base.selection, alpha),
            }
        });

    let property_type = pick_list(
        PropertyType::ALL,
        search.property_type,
        Message::PropertyTypeSelected,
    )
    .placeholder("Property Type")
    .padding(10)
    .width(Length::Fill)
    .style(move |theme: &Theme, status| {
        let base = pick_list::default(theme, status);
        pick_list::Style {
            text_color: fade(base.text_color, alpha),
            placeholder_color: fade(base.placeholder_color, alpha),
            handle_color: fade(base.handle_color, alpha),
            background: fade_background(base.background, alpha),
            border: fade_border(base.border, alpha),
        }
    });

    let submit = button(text("Search").size(16).center())
        .on_press(Message::Search)
        .padding(12)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let base = button::primary(theme, status);
            button::Style {
                background: base.background.map(|b| fade_background(b, alpha)),
                text_color: fade(base.text_color, alpha),
                border: fade_border(base.border, alpha),
                ..base
            }
        });

    // Four across on wide windows, stacked on narrow ones
    let fields: Element<'a, Message> = if width < MEDIUM_BREAKPOINT {
        Column::with_children([
            location.into(),
            move_in.into(),
            property_type.into(),
            submit.into(),
        ])
        .spacing(16)
        .into()
    } else {
        Row::with_children([
            location.width(Length::Fill).into(),
            move_in.width(Length::Fill).into(),
            property_type.into(),
            submit.into(),
        ])
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
    };

    let mut panel = column![fields].spacing(12);
    if let Some(error) = &search.error {
        panel = panel.push(
            text(error.to_string())
                .size(14)
                .color(fade(Color::from_rgb(0.86, 0.15, 0.15), alpha)),
        );
    }

    container(panel)
        .padding(16)
        .max_width(SEARCH_MAX_WIDTH)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(fade(palette::WHITE, alpha))),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: fade(Color::BLACK, 0.25 * alpha),
                offset: Vector::new(0.0, 25.0),
                blur_radius: 50.0,
            },
            ..container::Style::default()
        })
        .into()
}

/// Top padding that pushes a vertically centered block down by `offset`
fn shift_down(offset: f32) -> Padding {
    Padding {
        top: 2.0 * offset.max(0.0),
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    }
}

fn fade_background(background: Background, alpha: f32) -> Background {
    match background {
        Background::Color(color) => Background::Color(fade(color, alpha)),
        other => other,
    }
}

fn fade_border(border: Border, alpha: f32) -> Border {
    Border {
        color: fade(border.color, alpha),
        ..border
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_down_doubles_offset() {
        let padding = shift_down(20.0);
        assert_eq!(padding.top, 40.0);
        assert_eq!(padding.bottom, 0.0);
        assert_eq!(shift_down(-5.0).top, 0.0);
    }

    #[test]
    fn test_fade_background_only_touches_colors() {
        let faded = fade_background(Background::Color(Color::WHITE), 0.25);
        assert_eq!(faded, Background::Color(Color { a: 0.25, ..Color::WHITE }));
    }
}
