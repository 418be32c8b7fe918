/// State management module
///
/// This module holds everything the view reads from:
/// - The literal featured listings (listing.rs)
/// - Hero search form input (search.rs)
/// - User settings on disk (settings.rs)
/// - Per-card pointer and spring state (card.rs)
/// - Scroll position and entrance timelines (page.rs)

pub mod listing;
pub mod search;
pub mod settings;
pub mod card;
pub mod page;
