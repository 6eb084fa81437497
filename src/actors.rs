//! Per-frame behaviour of the two moving entity types.
//!
//! Both share the [`Actor`] contract but little else: the player runs the full
//! axis-separated resolver, while enemies only bounce off whatever they touch.

use crate::config::{
    ENEMY_ANIM_PERIOD, ENEMY_BOUNCE_NUDGE, ENEMY_SIZE, ENEMY_SPEED, HEIGHT, JUMP_FORCE,
    PLAYER_ANIM_PERIOD, PLAYER_DRAW_OFFSET, PLAYER_SIZE, PLAYER_SPAWN, WIDTH,
};
use crate::entities::{Animation, DrawIntent, Enemy, Player, Rect};
use crate::physics::{self, Axis};

pub trait Actor {
    /// Advance one fixed tick against the level's solid rectangles.
    fn update(&mut self, solids: &[Rect]);

    fn draw_intent(&self) -> DrawIntent;

    fn hitbox(&self) -> Rect;
}

impl Animation {
    /// Count one tick; once the timer passes `period` the frame toggles.
    pub fn advance(&mut self, period: u32) {
        self.timer += 1;
        if self.timer > period {
            self.timer = 0;
            self.frame_index = (self.frame_index + 1) % 2;
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    pub fn spawn() -> Self {
        Self {
            rect: Rect::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, PLAYER_SIZE.0, PLAYER_SIZE.1),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            is_dead: false,
            anim: Animation::default(),
        }
    }

    /// Start a jump if standing on something. Returns whether it took effect.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vy = JUMP_FORCE;
        true
    }
}

impl Actor for Player {
    fn update(&mut self, solids: &[Rect]) {
        self.vy = physics::apply_gravity(self.vy);

        // Screen clamp sits between integration and tile collision.
        let moved = physics::integrate(self.rect, self.vx, Axis::X);
        let clamped = physics::clamp_horizontal(moved, WIDTH);
        let x = physics::collide(clamped, self.vx, Axis::X, solids);
        self.rect = x.rect;
        self.vx = x.velocity;

        let y = physics::resolve(self.rect, self.vy, Axis::Y, solids);
        self.rect = y.rect;
        self.vy = y.velocity;
        self.on_ground = y.on_ground;

        if physics::fell_out(&self.rect, HEIGHT) {
            self.is_dead = true;
        }

        self.anim.advance(PLAYER_ANIM_PERIOD);
    }

    fn draw_intent(&self) -> DrawIntent {
        let prefix = if self.vx == 0.0 { "hero_idle" } else { "player_run" };
        DrawIntent::new(
            format!("{prefix}_{}", self.anim.frame_index),
            self.rect.x - PLAYER_DRAW_OFFSET.0,
            self.rect.y - PLAYER_DRAW_OFFSET.1,
        )
    }

    fn hitbox(&self) -> Rect {
        self.rect
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            speed: ENEMY_SPEED,
            direction: 1.0,
            anim: Animation::default(),
        }
    }
}

impl Actor for Enemy {
    fn update(&mut self, solids: &[Rect]) {
        self.rect.x += self.speed * self.direction;

        // Blunt bounce: flip and nudge, no position correction. A nudge that
        // is too small leaves the enemy overlapping and it flips again.
        for solid in solids {
            if self.rect.intersects(solid) {
                self.direction = -self.direction;
                self.rect.x += self.direction * ENEMY_BOUNCE_NUDGE;
            }
        }

        if self.rect.right() >= WIDTH {
            self.direction = -1.0;
        }
        if self.rect.left() <= 0.0 {
            self.direction = 1.0;
        }

        self.anim.advance(ENEMY_ANIM_PERIOD);
    }

    fn draw_intent(&self) -> DrawIntent {
        let pos = self.rect.top_left();
        DrawIntent::new(format!("enemy_{}", self.anim.frame_index), pos.x, pos.y)
    }

    fn hitbox(&self) -> Rect {
        self.rect
    }
}
