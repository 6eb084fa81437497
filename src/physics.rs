//! Axis-separated rectangle-vs-grid collision.
//!
//! Movement is resolved one axis at a time, X before Y, against the level's
//! static solid rectangles. Every function is pure: it takes a rectangle and a
//! velocity component and hands back corrected values.

use crate::config::GRAVITY;
use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Outcome of resolving one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    /// Velocity along the resolved axis; zero after any collision.
    pub velocity: f32,
    /// Set only by a downward (positive) Y collision.
    pub on_ground: bool,
    pub collided: bool,
}

/// Move `rect` by `velocity` along `axis` only.
pub fn integrate(rect: Rect, velocity: f32, axis: Axis) -> Rect {
    match axis {
        Axis::X => Rect {
            x: rect.x + velocity,
            ..rect
        },
        Axis::Y => Rect {
            y: rect.y + velocity,
            ..rect
        },
    }
}

/// Push `rect` out of every overlapping solid along `axis`.
///
/// The travel direction is taken from `velocity` once up front; solids are
/// tested in order against the progressively corrected rectangle, so when
/// several overlap the last one wins. A zero velocity corrects nothing.
pub fn collide(rect: Rect, velocity: f32, axis: Axis, solids: &[Rect]) -> Resolution {
    let mut rect = rect;
    let mut collided = false;
    let mut on_ground = false;

    if velocity != 0.0 {
        for solid in solids {
            if !rect.intersects(solid) {
                continue;
            }
            collided = true;
            match (axis, velocity > 0.0) {
                (Axis::X, true) => rect.set_right(solid.left()),
                (Axis::X, false) => rect.set_left(solid.right()),
                (Axis::Y, true) => {
                    rect.set_bottom(solid.top());
                    on_ground = true;
                }
                (Axis::Y, false) => rect.set_top(solid.bottom()),
            }
        }
    }

    Resolution {
        rect,
        velocity: if collided { 0.0 } else { velocity },
        on_ground,
        collided,
    }
}

/// Integrate then collide.
pub fn resolve(rect: Rect, velocity: f32, axis: Axis, solids: &[Rect]) -> Resolution {
    collide(integrate(rect, velocity, axis), velocity, axis, solids)
}

/// Keep `rect` inside `[0, width]` horizontally.
pub fn clamp_horizontal(rect: Rect, width: f32) -> Rect {
    let mut rect = rect;
    if rect.left() < 0.0 {
        rect.set_left(0.0);
    }
    if rect.right() > width {
        rect.set_right(width);
    }
    rect
}

/// One tick of gravity. There is no terminal velocity.
pub fn apply_gravity(vy: f32) -> f32 {
    vy + GRAVITY
}

/// True once the rectangle's top edge has dropped below `height`.
pub fn fell_out(rect: &Rect, height: f32) -> bool {
    rect.top() > height
}
