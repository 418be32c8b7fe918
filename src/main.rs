use iced::widget::scrollable;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod assets;
mod motion;
mod state;
mod ui;

use assets::{AssetError, CoverTexture, ImageSource};
use state::card::CardState;
use state::listing::FEATURED;
use state::page::PageState;
use state::search::{PropertyType, SearchForm};
use state::settings::Settings;
use ui::card::{CardEvent, PropertyCard};

/// Frame length assumed when there is no usable previous tick
const NOMINAL_FRAME: Duration = Duration::from_micros(16_667);

/// Main application state
struct HomeFinder {
    /// Scroll, viewport and entrance timelines
    page: PageState,
    /// Hero search bar input
    search: SearchForm,
    /// One entry per featured listing, same order
    cards: Vec<CardState>,
    covers: Vec<CoverTexture>,
    last_tick: Option<Instant>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Display refresh while something is animating
    Tick(Instant),
    /// The page was scrolled
    Scrolled(scrollable::Viewport),
    WindowResized(Size),
    /// Pointer activity on the card at this index
    Card(usize, CardEvent),
    LocationChanged(String),
    MoveInChanged(String),
    PropertyTypeSelected(PropertyType),
    /// User pressed "Search" or hit enter in a field
    Search,
    /// Background cover decode finished
    CoverLoaded(usize, Result<CoverTexture, AssetError>),
}

impl HomeFinder {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let viewport = Size::new(settings.window.width, settings.window.height);
        let page = PageState::new(settings.variant, viewport, FEATURED.len(), Instant::now());

        let mut tasks = vec![window::get_latest()
            .and_then(window::get_size)
            .map(Message::WindowResized)];

        for (index, listing) in FEATURED.iter().enumerate() {
            if let ImageSource::File(path) = ImageSource::resolve(listing, &settings) {
                debug!("Loading cover for {} from {}", listing.title, path.display());
                tasks.push(Task::perform(assets::load_cover(path), move |result| {
                    Message::CoverLoaded(index, result)
                }));
            }
        }

        info!("🏠 HomeFinder ready with {} featured listings", FEATURED.len());

        (
            HomeFinder {
                page,
                search: SearchForm::default(),
                cards: vec![CardState::default(); FEATURED.len()],
                covers: vec![CoverTexture::placeholder(); FEATURED.len()],
                last_tick: None,
            },
            Task::batch(tasks),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .filter(|dt| *dt <= Duration::from_millis(100))
                    .unwrap_or(NOMINAL_FRAME);
                self.last_tick = Some(now);

                self.page.tick(now);
                for card in &mut self.cards {
                    card.tick(dt);
                }
            }
            Message::Scrolled(viewport) => {
                let now = Instant::now();
                let size = viewport.bounds().size();
                if size != self.page.layout().viewport {
                    self.page.resized(size, now);
                }
                self.page.scrolled(viewport.absolute_offset().y, now);
            }
            Message::WindowResized(size) => {
                debug!("Viewport resized to {}x{}", size.width, size.height);
                self.page.resized(size, Instant::now());
            }
            Message::Card(index, event) => {
                let Some(card) = self.cards.get_mut(index) else {
                    warn!("⚠️  Event for unknown card {}", index);
                    return Task::none();
                };

                match event {
                    CardEvent::PointerMoved { pointer, rect } => card.pointer_moved(pointer, rect),
                    CardEvent::PointerLeft => card.pointer_left(),
                    CardEvent::ViewDetails => {
                        info!("Details requested for {}", FEATURED[index].title);
                    }
                }
            }
            Message::LocationChanged(location) => self.search.set_location(location),
            Message::MoveInChanged(move_in) => self.search.set_move_in(move_in),
            Message::PropertyTypeSelected(property_type) => {
                self.search.select_property_type(property_type);
            }
            Message::Search => match self.search.submit() {
                Some(query) => info!("🔎 Search submitted: {:?}", query),
                None => {
                    if let Some(err) = &self.search.error {
                        warn!("Search rejected: {}", err);
                    }
                }
            },
            Message::CoverLoaded(index, result) => match result {
                Ok(cover) => {
                    if let Some(slot) = self.covers.get_mut(index) {
                        *slot = cover;
                    }
                }
                Err(err) => warn!("⚠️  {}, keeping placeholder", err),
            },
        }

        Task::none()
    }

    /// Whether the next frame differs from the current one
    fn is_animating(&self) -> bool {
        let max_tags = FEATURED.iter().map(|l| l.tags.len()).max().unwrap_or(0);

        self.page.is_animating(max_tags)
            || self.page.hero_is_live()
            || self.cards.iter().any(|card| !card.is_settled())
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.is_animating() {
            Subscription::batch([resize, window::frames().map(Message::Tick)])
        } else {
            resize
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let cards = FEATURED
            .iter()
            .zip(&self.cards)
            .zip(&self.covers)
            .enumerate()
            .map(|(index, ((listing, card), cover))| PropertyCard {
                index,
                listing,
                cover,
                tilt: card.tilt(),
                elevation: card.elevation(),
                zoom: card.zoom(),
                entrance: self.page.card_frame(index),
                tags: (0..listing.tags.len())
                    .map(|i| self.page.tag_frame(i))
                    .collect(),
            })
            .collect();

        ui::home::view(&self.page, &self.search, cards)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homefinder=info")),
        )
        .init();

    let settings = Settings::load();
    let window_settings = settings.window;
    info!("🎨 Starting with the {:?} home page", settings.variant);

    iced::application("HomeFinder", HomeFinder::update, HomeFinder::view)
        .theme(HomeFinder::theme)
        .subscription(HomeFinder::subscription)
        .window_size(Size::new(window_settings.width, window_settings.height))
        .centered()
        .run_with(move || HomeFinder::new(settings))
}
