//! Terminal rendering. All drawing I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session. No game logic is performed; this module only turns draw intents
//! into terminal commands. One tile covers `COLS_PER_TILE` × `ROWS_PER_TILE`
//! cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use alien_platformer::compute::{self, menu_buttons};
use alien_platformer::config::{HEIGHT, TILE_SIZE, TITLE, WIDTH};
use alien_platformer::entities::{DrawIntent, GameSession, Mode, Point};

// ── Viewport ──────────────────────────────────────────────────────────────────

pub const COLS_PER_TILE: f32 = 6.0;
pub const ROWS_PER_TILE: f32 = 3.0;

const PX_PER_COL: f32 = TILE_SIZE / COLS_PER_TILE;
const PX_PER_ROW: f32 = TILE_SIZE / ROWS_PER_TILE;

/// Terminal cells that show some part of the world.
fn world_cols() -> u16 {
    (WIDTH / PX_PER_COL).ceil() as u16
}

fn world_rows() -> u16 {
    (HEIGHT / PX_PER_ROW).ceil() as u16
}

/// Cell containing a world point. May be negative or off-screen.
pub fn world_to_cell(p: Point) -> (i32, i32) {
    (
        (p.x / PX_PER_COL).floor() as i32,
        (p.y / PX_PER_ROW).floor() as i32,
    )
}

/// World-space centre of a cell; used to turn mouse clicks into points.
pub fn cell_to_world(col: u16, row: u16) -> Point {
    Point::new(
        (f32::from(col) + 0.5) * PX_PER_COL,
        (f32::from(row) + 0.5) * PX_PER_ROW,
    )
}

/// Terminal dimensions, used for clipping.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub cols: u16,
    pub rows: u16,
}

impl Screen {
    fn holds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < i32::from(self.cols) && row < i32::from(self.rows)
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_MENU_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };
const C_BUTTON: Color = Color::Rgb { r: 50, g: 50, b: 150 };
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_WIN: Color = Color::Green;
const C_LOSE: Color = Color::Red;

// ── Sprite glyphs ─────────────────────────────────────────────────────────────

type Art = &'static [(&'static str, Color)];

const GRASS: Art = &[
    ("▄▄▄▄▄▄", Color::Green),
    ("▓▓▓▓▓▓", Color::DarkYellow),
    ("▓▓▓▓▓▓", Color::DarkYellow),
];
const GROUND: Art = &[
    ("▓▓▓▓▓▓", Color::DarkYellow),
    ("▓▓▒▓▓▓", Color::DarkYellow),
    ("▓▓▓▓▒▓", Color::DarkYellow),
];
const ISLE: Art = &[
    ("▄▄▄▄▄▄", Color::Green),
    ("▓▓▓▓▓▓", Color::DarkYellow),
    (" ▀▀▀▀ ", Color::DarkYellow),
];
const FENCE: Art = &[
    ("", C_TEXT),
    ("┬─┬─┬─", Color::DarkYellow),
    ("│ │ │ ", Color::DarkYellow),
];
const FENCE_BROKEN: Art = &[
    ("", C_TEXT),
    ("┬─┬  ┬", Color::DarkYellow),
    ("│ │  │", Color::DarkYellow),
];
const PLANT: Art = &[("", C_TEXT), ("  ♣   ", Color::Green), ("  │   ", Color::Green)];
const DOOR: Art = &[
    ("┌────┐", Color::Yellow),
    ("│ ·  │", Color::Yellow),
    ("│    │", Color::Yellow),
];
const NOTHING: Art = &[];

// Hero art is drawn from the offset draw position, so the figure sits in
// the bottom three rows.
const HERO_IDLE_0: Art = &[
    ("", C_TEXT),
    ("", C_TEXT),
    ("", C_TEXT),
    ("  o", C_TEXT),
    (" /|\\", C_TEXT),
    (" / \\", C_TEXT),
];
const HERO_IDLE_1: Art = &[
    ("", C_TEXT),
    ("", C_TEXT),
    ("", C_TEXT),
    ("  o", C_TEXT),
    (" (|)", C_TEXT),
    (" / \\", C_TEXT),
];
const PLAYER_RUN_0: Art = &[
    ("", C_TEXT),
    ("", C_TEXT),
    ("", C_TEXT),
    ("  o", Color::Cyan),
    (" /|\\_", Color::Cyan),
    ("  /\\", Color::Cyan),
];
const PLAYER_RUN_1: Art = &[
    ("", C_TEXT),
    ("", C_TEXT),
    ("", C_TEXT),
    ("  o", Color::Cyan),
    (" _|\\", Color::Cyan),
    (" / |", Color::Cyan),
];

const ENEMY_0: Art = &[("<Ö>", Color::Magenta)];
const ENEMY_1: Art = &[(">Ö<", Color::Magenta)];

fn art_for(sprite: &str) -> Option<Art> {
    let art = match sprite {
        "bg_sky" => NOTHING,
        "grass1" | "grass2" | "grass3" => GRASS,
        "ground1" | "ground2" | "ground3" => GROUND,
        "isle1" | "isle2" | "isle3" => ISLE,
        "fence" => FENCE,
        "fence_broken" => FENCE_BROKEN,
        "plant" => PLANT,
        "door" => DOOR,
        "hero_idle_0" => HERO_IDLE_0,
        "hero_idle_1" => HERO_IDLE_1,
        "player_run_0" => PLAYER_RUN_0,
        "player_run_1" => PLAYER_RUN_1,
        "enemy_0" => ENEMY_0,
        "enemy_1" => ENEMY_1,
        _ => return None,
    };
    Some(art)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameSession, screen: Screen) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.mode {
        Mode::Menu => draw_menu(out, state, screen)?,
        Mode::Playing => draw_game(out, state, screen)?,
        Mode::Win | Mode::Lose => draw_game_over(out, state, screen)?,
    }
    draw_controls_hint(out, state, screen)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Print `text` starting at a cell, skipping spaces (transparent) and any
/// cell outside the screen.
fn blit<W: Write>(
    out: &mut W,
    screen: Screen,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (i, ch) in text.chars().enumerate() {
        let c = col + i as i32;
        if ch == ' ' || !screen.holds(c, row) {
            continue;
        }
        out.queue(cursor::MoveTo(c as u16, row as u16))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    screen: Screen,
    center: Point,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let (col, row) = world_to_cell(center);
    let start = col - text.chars().count() as i32 / 2;
    blit(out, screen, start, row, text, color)
}

fn fill_background<W: Write>(out: &mut W, screen: Screen, color: Color) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(color))?;
    let blank = " ".repeat(screen.cols as usize);
    for row in 0..screen.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn draw_intent<W: Write>(out: &mut W, screen: Screen, intent: &DrawIntent) -> std::io::Result<()> {
    let (col, row) = world_to_cell(intent.pos);
    match art_for(&intent.sprite) {
        Some(art) => {
            for (dy, (line, color)) in art.iter().enumerate() {
                blit(out, screen, col, row + dy as i32, line, *color)?;
            }
        }
        None => blit(out, screen, col, row, "?", Color::Red)?,
    }
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &GameSession, screen: Screen) -> std::io::Result<()> {
    fill_background(out, screen, C_MENU_BG)?;
    print_centered(out, screen, Point::new(WIDTH / 2.0, 100.0), TITLE, C_TEXT)?;

    // A cell belongs to a button when its centre does, which keeps drawing
    // and click hit-testing in agreement.
    for button in menu_buttons(&state.audio) {
        out.queue(style::SetBackgroundColor(C_BUTTON))?;
        for row in 0..world_rows().min(screen.rows) {
            for col in 0..world_cols().min(screen.cols) {
                if button.rect.contains(cell_to_world(col, row)) {
                    out.queue(cursor::MoveTo(col, row))?;
                    out.queue(Print(' '))?;
                }
            }
        }
        print_centered(out, screen, button.rect.center(), &button.label, C_TEXT)?;
        out.queue(style::SetBackgroundColor(C_MENU_BG))?;
    }
    Ok(())
}

fn draw_game<W: Write>(out: &mut W, state: &GameSession, screen: Screen) -> std::io::Result<()> {
    for intent in compute::scene(state) {
        draw_intent(out, screen, &intent)?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameSession,
    screen: Screen,
) -> std::io::Result<()> {
    let (msg, color) = if state.mode == Mode::Win {
        ("VICTORY!", C_WIN)
    } else {
        ("GAME OVER", C_LOSE)
    };
    let mid = Point::new(WIDTH / 2.0, HEIGHT / 2.0);
    print_centered(out, screen, mid, msg, color)?;
    print_centered(
        out,
        screen,
        Point::new(mid.x, mid.y + 60.0),
        "Click to Return to Menu",
        C_TEXT,
    )
}

// ── Controls hint (row below the world) ───────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: &GameSession,
    screen: Screen,
) -> std::io::Result<()> {
    let row = world_rows();
    if row >= screen.rows {
        return Ok(());
    }
    let hint = match state.mode {
        Mode::Menu => "Click a button   ENTER : Start   S : Sound   Q : Exit",
        Mode::Playing => "← → / A D : Move   ↑ / W / SPACE : Jump   Ctrl-C : Quit",
        Mode::Win | Mode::Lose => "Click or ENTER : Menu",
    };
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    blit(out, screen, 1, i32::from(row), hint, C_HINT)
}
