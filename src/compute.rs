//! Game-mode state machine.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` and returns a brand-new one. Side effects are limited to the
//! injected [`AudioSink`].

use std::rc::Rc;

use crate::actors::Actor;
use crate::audio::AudioSink;
use crate::config::{
    BUTTON_SIZE, BUTTON_X, ENEMY_SPAWNS, EXIT_BUTTON_Y, HEIGHT, MUSIC_TRACK, MUSIC_VOLUME,
    PLAYER_SPEED, SOUND_BUTTON_Y, SOUND_HIT, SOUND_JUMP, START_BUTTON_Y, WIDTH,
};
use crate::entities::{AudioState, DrawIntent, Enemy, GameSession, Mode, Player, Point, Rect};
use crate::level::Level;

/// Movement keys currently held, sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

/// Discrete key presses the core cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Jump,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleSound,
    Exit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuButton {
    pub action: MenuAction,
    pub rect: Rect,
    pub label: String,
}

/// Result of a pointer click: either keep going with the new session or
/// shut the process down.
#[derive(Debug)]
pub enum Flow {
    Continue(GameSession),
    Exit,
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn spawn_enemies() -> Vec<Enemy> {
    ENEMY_SPAWNS.iter().map(|&(x, y)| Enemy::new(x, y)).collect()
}

/// A session sitting in the menu with freshly spawned entities.
pub fn new_session(level: Rc<Level>, sound_enabled: bool) -> GameSession {
    GameSession {
        mode: Mode::Menu,
        player: Player::spawn(),
        enemies: spawn_enemies(),
        level,
        audio: AudioState {
            sound_enabled,
            music_playing: false,
        },
        frame: 0,
    }
}

/// Replace every entity wholesale; nothing survives a reset.
pub fn reset(state: &GameSession) -> GameSession {
    log::info!("resetting entities at frame {}", state.frame);
    GameSession {
        player: Player::spawn(),
        enemies: spawn_enemies(),
        ..state.clone()
    }
}

fn with_mode(state: &GameSession, mode: Mode) -> GameSession {
    if state.mode != mode {
        log::info!("mode {:?} -> {:?}", state.mode, mode);
    }
    GameSession {
        mode,
        ..state.clone()
    }
}

// ── Menu ─────────────────────────────────────────────────────────────────────

pub fn menu_buttons(audio: &AudioState) -> [MenuButton; 3] {
    let (w, h) = BUTTON_SIZE;
    let sound = if audio.sound_enabled { "ON" } else { "OFF" };
    [
        MenuButton {
            action: MenuAction::Start,
            rect: Rect::new(BUTTON_X, START_BUTTON_Y, w, h),
            label: "START GAME".to_string(),
        },
        MenuButton {
            action: MenuAction::ToggleSound,
            rect: Rect::new(BUTTON_X, SOUND_BUTTON_Y, w, h),
            label: format!("SOUND: {sound}"),
        },
        MenuButton {
            action: MenuAction::Exit,
            rect: Rect::new(BUTTON_X, EXIT_BUTTON_Y, w, h),
            label: "EXIT".to_string(),
        },
    ]
}

/// Which menu button, if any, sits under `pos`.
pub fn menu_action_at(audio: &AudioState, pos: Point) -> Option<MenuAction> {
    menu_buttons(audio)
        .iter()
        .find(|b| b.rect.contains(pos))
        .map(|b| b.action)
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Only a jump while playing does anything, and only from the ground.
pub fn on_key_down(state: &GameSession, key: Key, audio: &mut impl AudioSink) -> GameSession {
    if state.mode != Mode::Playing || key != Key::Jump {
        return state.clone();
    }

    let mut player = state.player.clone();
    if player.jump() {
        log::debug!("jump at frame {}", state.frame);
        if state.audio.sound_enabled {
            audio.play_sound(SOUND_JUMP);
        }
    }
    GameSession {
        player,
        ..state.clone()
    }
}

pub fn on_mouse_down(state: &GameSession, pos: Point) -> Flow {
    match state.mode {
        Mode::Menu => match menu_action_at(&state.audio, pos) {
            Some(MenuAction::Start) => Flow::Continue(with_mode(&reset(state), Mode::Playing)),
            Some(MenuAction::ToggleSound) => {
                let sound_enabled = !state.audio.sound_enabled;
                log::info!("sound {}", if sound_enabled { "enabled" } else { "disabled" });
                Flow::Continue(GameSession {
                    audio: AudioState {
                        sound_enabled,
                        ..state.audio
                    },
                    ..state.clone()
                })
            }
            Some(MenuAction::Exit) => {
                log::info!("exit requested from menu");
                Flow::Exit
            }
            None => Flow::Continue(state.clone()),
        },
        Mode::Win | Mode::Lose => Flow::Continue(with_mode(state, Mode::Menu)),
        Mode::Playing => Flow::Continue(state.clone()),
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Start music when sound is on and nothing is playing; stop it when sound
/// is off and something is.
pub fn sync_music(current: AudioState, audio: &mut impl AudioSink) -> AudioState {
    if current.sound_enabled && !current.music_playing {
        audio.play_music(MUSIC_TRACK);
        audio.set_music_volume(MUSIC_VOLUME);
        AudioState {
            music_playing: true,
            ..current
        }
    } else if !current.sound_enabled && current.music_playing {
        audio.stop_music();
        AudioState {
            music_playing: false,
            ..current
        }
    } else {
        current
    }
}

/// Advance the session by one frame. Music sync runs in every mode; the
/// simulation itself only runs while playing.
pub fn tick(state: &GameSession, controls: Controls, audio: &mut impl AudioSink) -> GameSession {
    let next = GameSession {
        audio: sync_music(state.audio, audio),
        frame: state.frame + 1,
        ..state.clone()
    };

    if next.mode != Mode::Playing {
        return next;
    }
    play_frame(next, controls, audio)
}

fn play_frame(
    mut state: GameSession,
    controls: Controls,
    audio: &mut impl AudioSink,
) -> GameSession {
    let level = Rc::clone(&state.level);
    let solids = level.solids();

    // ── 1. Horizontal intent (right wins over left) ──────────────────────────
    state.player.vx = 0.0;
    if controls.left {
        state.player.vx = -PLAYER_SPEED;
    }
    if controls.right {
        state.player.vx = PLAYER_SPEED;
    }

    // ── 2. Physics ───────────────────────────────────────────────────────────
    state.player.update(solids);

    // ── 3. Enemies, each checked against the player right after it moves ─────
    let mut mode = Mode::Playing;
    for enemy in &mut state.enemies {
        enemy.update(solids);
        if state.player.hitbox().intersects(&enemy.hitbox()) {
            if state.audio.sound_enabled {
                audio.play_sound(SOUND_HIT);
            }
            mode = Mode::Lose;
        }
    }

    // ── 4. Goal, then fall death; later checks overwrite earlier ones ────────
    if let Some(goal) = level.goal() {
        if state.player.hitbox().intersects(&goal) {
            mode = Mode::Win;
        }
    }
    if state.player.is_dead {
        mode = Mode::Lose;
    }

    with_mode(&state, mode)
}

// ── Draw pass ────────────────────────────────────────────────────────────────

/// Everything the playing screen shows, back to front: sky, tiles, player,
/// enemies. Pure read; nothing in the session changes.
pub fn scene(state: &GameSession) -> Vec<DrawIntent> {
    let mut intents = state.level.draw_intents(WIDTH, HEIGHT);
    intents.push(state.player.draw_intent());
    intents.extend(state.enemies.iter().map(Actor::draw_intent));
    intents
}
