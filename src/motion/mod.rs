/// Motion primitives for the landing page
///
/// Everything in here is plain numeric code with no dependency on iced's
/// widget tree, so it can be driven from `update` and tested directly:
/// - Clamped range mapping and the scroll-linked hero fade (transform.rs)
/// - Damped springs stepped once per display frame (spring.rs)
/// - One-shot reveal state and entrance timelines (entrance.rs)
/// - Pointer-to-rotation mapping and perspective projection (tilt.rs)

pub mod transform;
pub mod spring;
pub mod entrance;
pub mod tilt;

pub use entrance::{Entrance, EntranceFrame, Reveal};
pub use spring::{Spring, SpringConfig};
pub use tilt::Tilt;
pub use transform::HeroFade;
