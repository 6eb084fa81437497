use alien_platformer::entities::Rect;
use alien_platformer::level::*;

// ── classification ────────────────────────────────────────────────────────────

#[test]
fn classify_covers_every_category() {
    assert_eq!(classify(0), Some(TileKind::Empty));
    for code in SOLID_TILES {
        assert_eq!(classify(code), Some(TileKind::Solid), "code {code}");
    }
    for code in DECORATIVE_TILES {
        assert_eq!(classify(code), Some(TileKind::Decoration), "code {code}");
    }
    assert_eq!(classify(DOOR), Some(TileKind::Goal));
    assert_eq!(classify(10), None);
    assert_eq!(classify(42), None);
}

#[test]
fn sprite_table_names_tiles() {
    assert_eq!(sprite_name(1), Some("grass1"));
    assert_eq!(sprite_name(6), Some("ground3"));
    assert_eq!(sprite_name(9), Some("isle3"));
    assert_eq!(sprite_name(12), Some("fence_broken"));
    assert_eq!(sprite_name(DOOR), Some("door"));
    assert_eq!(sprite_name(EMPTY), None);
}

// ── standard level ────────────────────────────────────────────────────────────

#[test]
fn standard_level_geometry() {
    let level = Level::standard().expect("standard level builds");
    assert_eq!(level.rows(), 8);
    assert_eq!(level.cols(), 13);
    assert_eq!(level.tile_size(), 64.0);
    assert_eq!(level.solids().len(), 26);
    assert_eq!(level.goal(), Some(Rect::new(768.0, 192.0, 64.0, 64.0)));
}

#[test]
fn solids_are_emitted_in_row_major_order() {
    let level = Level::standard().expect("standard level builds");
    // First solid cells are the floating isle on row 4, columns 11 and 12
    assert_eq!(level.solids()[0], Rect::new(704.0, 256.0, 64.0, 64.0));
    assert_eq!(level.solids()[1], Rect::new(768.0, 256.0, 64.0, 64.0));
    // Then the start of row 5
    assert_eq!(level.solids()[2], Rect::new(0.0, 320.0, 64.0, 64.0));
}

#[test]
fn decorative_tiles_do_not_collide() {
    let level = Level::standard().expect("standard level builds");
    // Row 4, column 0 is a fence
    assert_eq!(level.tile(4, 0), Some(11));
    let fence = Rect::new(0.0, 256.0, 64.0, 64.0);
    assert!(!level.solids().contains(&fence));
}

#[test]
fn tile_lookup_out_of_range_is_none() {
    let level = Level::standard().expect("standard level builds");
    assert_eq!(level.tile(3, 12), Some(DOOR));
    assert_eq!(level.tile(8, 0), None);
    assert_eq!(level.tile(0, 13), None);
}

#[test]
fn draw_intents_sky_then_tiles() {
    let level = Level::standard().expect("standard level builds");
    let intents = level.draw_intents(825.0, 512.0);

    // 13 × 8 background tiles, then the 31 cells that have a sprite
    let sky = intents.iter().filter(|i| i.sprite == BACKGROUND_SPRITE).count();
    assert_eq!(sky, 104);
    assert_eq!(intents.len(), 104 + 31);
    assert_eq!(intents[0].sprite, BACKGROUND_SPRITE);

    let door = intents.iter().find(|i| i.sprite == "door").expect("door is drawn");
    assert_eq!((door.pos.x, door.pos.y), (768.0, 192.0));
}

// ── construction errors ───────────────────────────────────────────────────────

#[test]
fn empty_grid_is_rejected() {
    assert_eq!(Level::build(vec![], 64.0).unwrap_err(), LevelError::Empty);
    assert_eq!(Level::build(vec![vec![]], 64.0).unwrap_err(), LevelError::Empty);
}

#[test]
fn ragged_grid_is_rejected() {
    let err = Level::build(vec![vec![0, 0], vec![0]], 64.0).unwrap_err();
    assert_eq!(
        err,
        LevelError::Ragged {
            row: 1,
            expected: 2,
            found: 1
        }
    );
    assert_eq!(err.to_string(), "row 1 has 1 columns, expected 2");
}

#[test]
fn unknown_tile_is_rejected() {
    let err = Level::build(vec![vec![0, 42]], 64.0).unwrap_err();
    assert_eq!(
        err,
        LevelError::UnknownTile {
            code: 42,
            row: 0,
            col: 1
        }
    );
}

// ── goal handling ─────────────────────────────────────────────────────────────

#[test]
fn level_without_door_has_no_goal() {
    let level = Level::build(vec![vec![1, 0], vec![2, 2]], 32.0).expect("valid grid");
    assert_eq!(level.goal(), None);
    assert_eq!(level.solids().len(), 3);
    assert_eq!(level.solids()[0], Rect::new(0.0, 0.0, 32.0, 32.0));
}

#[test]
fn last_door_in_scan_order_wins() {
    let grid = vec![vec![99, 0, 0], vec![0, 0, 99]];
    let level = Level::build(grid, 64.0).expect("valid grid");
    assert_eq!(level.goal(), Some(Rect::new(128.0, 64.0, 64.0, 64.0)));
}
