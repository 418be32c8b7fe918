/// User interface module
///
/// - Page geometry shared by the view and intersection tests (layout.rs)
/// - Colors (palette.rs)
/// - Hero block with the search bar (hero.rs)
/// - Tilted property card canvas (card.rs)
/// - Responsive card grid (grid.rs)
/// - Page composition (home.rs)

pub mod layout;
pub mod palette;
pub mod hero;
pub mod card;
pub mod grid;
pub mod home;
