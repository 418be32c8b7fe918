/// Pointer-driven card tilt
///
/// The pointer position is normalized against the card rectangle, mapped
/// to a pair of rotations, and the rotated card plane is projected back to
/// the screen with a fixed perspective distance.

use cgmath::{Deg, Matrix3, Vector3};
use iced::{Point, Rectangle, Vector};

use super::transform::interpolate;

/// Rotation reached at the card edges, in degrees
pub const MAX_TILT_DEG: f32 = 10.0;

/// Distance from the viewer to the card plane, in logical pixels
pub const PERSPECTIVE: f32 = 1000.0;

/// Rotation of the card plane, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Map a normalized pointer offset to a rotation.
    ///
    /// The edge under the pointer recedes: pointer on the right half gives a
    /// positive `rotate_y`, on the bottom half a negative `rotate_x`.
    pub fn from_offset(offset: Vector) -> Self {
        Tilt {
            rotate_x: interpolate(offset.y, (-0.5, 0.5), (MAX_TILT_DEG, -MAX_TILT_DEG)),
            rotate_y: interpolate(offset.x, (-0.5, 0.5), (-MAX_TILT_DEG, MAX_TILT_DEG)),
        }
    }
}

/// Pointer offset from the center of `rect`, as a fraction of its size.
///
/// Pointers inside the rectangle land in [-0.5, 0.5] on both axes. Returns
/// `None` when the rectangle has no area to measure against.
pub fn pointer_offset(pointer: Point, rect: Rectangle) -> Option<Vector> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }

    let center = rect.center();
    Some(Vector::new(
        (pointer.x - center.x) / rect.width,
        (pointer.y - center.y) / rect.height,
    ))
}

/// Rotate-then-project transform for one frame of a tilted card
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    rotation: Matrix3<f32>,
    origin: Point,
}

impl Projection {
    /// Projection of a plane centered on `origin` (screen coordinates)
    pub fn new(tilt: Tilt, origin: Point) -> Self {
        // Screen space: x right, y down, z toward the viewer
        let rotation = Matrix3::from_angle_x(Deg(tilt.rotate_x))
            * Matrix3::from_angle_y(Deg(tilt.rotate_y));

        Self { rotation, origin }
    }

    /// Project a point given relative to the card center.
    /// Returns the screen position and the local magnification there.
    pub fn project(&self, x: f32, y: f32, z: f32) -> (Point, f32) {
        let rotated = self.rotation * Vector3::new(x, y, z);
        let depth = (PERSPECTIVE - rotated.z).max(1.0);
        let scale = PERSPECTIVE / depth;

        (
            Point::new(
                self.origin.x + rotated.x * scale,
                self.origin.y + rotated.y * scale,
            ),
            scale,
        )
    }

    pub fn point(&self, x: f32, y: f32, z: f32) -> Point {
        self.project(x, y, z).0
    }
}
