//! Compiled-in tuning values.
//!
//! All physics values are per-tick deltas: the game runs on a fixed timestep
//! and nothing here is scaled by elapsed time.

// ── Window ───────────────────────────────────────────────────────────────────

pub const TITLE: &str = "ALIEN ADVENTURE";
pub const WIDTH: f32 = 825.0;
pub const HEIGHT: f32 = 512.0;
pub const TILE_SIZE: f32 = 64.0;

// ── Physics ──────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.8;
pub const JUMP_FORCE: f32 = -14.0;
pub const PLAYER_SPEED: f32 = 5.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN: (f32, f32) = (100.0, 50.0);
pub const PLAYER_SIZE: (f32, f32) = (40.0, 50.0);
/// Sprite art is larger than the hitbox; the draw position is shifted
/// up-left by this much.
pub const PLAYER_DRAW_OFFSET: (f32, f32) = (12.0, 66.0);
pub const PLAYER_ANIM_PERIOD: u32 = 10;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SPAWNS: [(f32, f32); 2] = [(200.0, 190.0), (600.0, 250.0)];
pub const ENEMY_SIZE: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_BOUNCE_NUDGE: f32 = 5.0;
pub const ENEMY_ANIM_PERIOD: u32 = 15;

// ── Menu layout ──────────────────────────────────────────────────────────────

pub const BUTTON_SIZE: (f32, f32) = (200.0, 50.0);
pub const BUTTON_X: f32 = 312.0; // WIDTH / 2 - 100, integer division
pub const START_BUTTON_Y: f32 = 200.0;
pub const SOUND_BUTTON_Y: f32 = 270.0;
pub const EXIT_BUTTON_Y: f32 = 340.0;

// ── Audio ────────────────────────────────────────────────────────────────────

pub const SOUND_JUMP: &str = "jump";
pub const SOUND_HIT: &str = "hit";
pub const MUSIC_TRACK: &str = "music";
pub const MUSIC_VOLUME: f32 = 0.2;
