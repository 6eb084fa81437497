//! Game entity types. Pure data; per-frame behaviour lives in `actors`.

use std::rc::Rc;

use crate::level::Level;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world pixels, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: shared edges and zero-area rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

// ── Animation ─────────────────────────────────────────────────────────────────

/// Two-frame sprite cycle driven by a tick counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Animation {
    pub frame_index: u32,
    pub timer: u32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub is_dead: bool,
    pub anim: Animation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    /// +1 walks right, -1 walks left.
    pub direction: f32,
    pub anim: Animation,
}

/// What the presentation layer should draw, and where. Entities never draw
/// themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawIntent {
    pub sprite: String,
    pub pos: Point,
}

impl DrawIntent {
    pub fn new(sprite: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            sprite: sprite.into(),
            pos: Point::new(x, y),
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    Win,
    Lose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioState {
    pub sound_enabled: bool,
    /// Whether a music start has been requested and not yet stopped.
    pub music_playing: bool,
}

/// The entire game session. Cloneable so the update functions in
/// `compute` can return a new copy without mutating the original.
///
/// The level is shared and immutable; a clone only bumps its refcount.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub mode: Mode,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub level: Rc<Level>,
    pub audio: AudioState,
    pub frame: u64,
}
