//! Clear-cell engine integration tests.
//!
//! These drive `BoardEngine` only through its public API, the way a render
//! loop would.

use clear_cell::{BoardEngine, Cell, ClickOutcome, EngineConfig, EngineError, GameRng, PuzzleRules};

/// Read a row back as symbols.
fn row_symbols(engine: &BoardEngine, row: usize) -> String {
    (0..engine.cols())
        .map(|col| engine.board_cell(row, col).unwrap().symbol())
        .collect()
}

/// Rows the engine is expected to inject, drawn from an identically seeded RNG.
fn expected_rows(seed: u64, cols: usize, count: usize) -> Vec<String> {
    let mut rng = GameRng::new(seed);
    (0..count)
        .map(|_| {
            (0..cols)
                .map(|_| Cell::COLORS[rng.gen_range_usize(0..Cell::COLORS.len())].symbol())
                .collect()
        })
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_fresh_board() {
    let engine = BoardEngine::new(6, 4, GameRng::new(42)).unwrap();

    assert_eq!(engine.rows(), 6);
    assert_eq!(engine.cols(), 4);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.ticks(), 0);
    assert_eq!(engine.palette(), &Cell::COLORS);
    assert!(!engine.is_game_over());

    for row in 0..6 {
        assert_eq!(row_symbols(&engine, row), "....");
    }
}

#[test]
fn test_zero_rows_rejected() {
    let result = BoardEngine::new(0, 5, GameRng::new(42));
    assert_eq!(result.unwrap_err(), EngineError::InvalidDimension { rows: 0, cols: 5 });
}

#[test]
fn test_bad_palette_rejected() {
    let config = EngineConfig::new(4, 4).with_palette([Cell::Empty]);
    let result = BoardEngine::with_config(config, GameRng::new(42));
    assert_eq!(result.unwrap_err(), EngineError::EmptyInPalette);
}

// =============================================================================
// Advance
// =============================================================================

/// Four ticks on a 4x4 board: each tick injects the next seeded row and
/// pushes the earlier ones down.
#[test]
fn test_advance_four_ticks() {
    let seed = 2024;
    let expected = expected_rows(seed, 4, 4);
    let mut engine = BoardEngine::new(4, 4, GameRng::new(seed)).unwrap();

    for tick in 0..4 {
        engine.advance();

        for row in 0..=tick {
            assert_eq!(row_symbols(&engine, row), expected[tick - row], "tick {tick} row {row}");
        }
        for row in tick + 1..4 {
            assert_eq!(row_symbols(&engine, row), "....");
        }
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.ticks(), 4);

    // Over: further ticks change nothing.
    let before = engine.grid().clone();
    engine.advance();
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.ticks(), 4);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = BoardEngine::new(10, 7, GameRng::new(99)).unwrap();
    let mut b = BoardEngine::new(10, 7, GameRng::new(99)).unwrap();

    for _ in 0..5 {
        a.advance();
        b.advance();
    }
    a.process_click(2, 3).unwrap();
    b.process_click(2, 3).unwrap();
    a.advance();
    b.advance();

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_advance_until_over() {
    let mut engine = BoardEngine::new(5, 3, GameRng::new(1)).unwrap();
    assert_eq!(engine.advance_until_over(100), 5);
    assert!(engine.is_game_over());
}

// =============================================================================
// Clicks
// =============================================================================

/// Clicking the center of a red cluster clears all four reds, empties row 1
/// and pulls the rows beneath it up.
#[test]
fn test_click_clears_cluster_and_collapses() {
    let mut engine = BoardEngine::new(5, 5, GameRng::new(42)).unwrap();
    for col in 0..5 {
        engine.set_board_cell(0, col, Cell::Blue).unwrap();
    }
    for (row, col) in [(2, 2), (1, 1), (1, 2), (1, 3)] {
        engine.set_board_cell(row, col, Cell::Red).unwrap();
    }
    engine.set_board_cell(3, 0, Cell::Green).unwrap();

    let outcome = engine.process_click(2, 2).unwrap();

    assert_eq!(outcome, ClickOutcome { cleared: 4, collapsed_rows: 2 });
    assert_eq!(engine.score(), 4);
    assert_eq!(row_symbols(&engine, 0), "BBBBB");
    assert_eq!(row_symbols(&engine, 1), "G....");
    for row in 2..5 {
        assert_eq!(row_symbols(&engine, row), ".....");
    }
}

#[test]
fn test_click_uses_original_color() {
    // Clearing the target last means every neighbor compares against red.
    let mut engine = BoardEngine::new(3, 3, GameRng::new(42)).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            engine.set_board_cell(row, col, Cell::Red).unwrap();
        }
    }

    let outcome = engine.process_click(1, 1).unwrap();
    assert_eq!(outcome.cleared, 9);
    assert_eq!(engine.score(), 9);
    assert!(engine.grid().iter().all(|c| c.is_empty()));
}

#[test]
fn test_click_empty_cell() {
    let mut engine = BoardEngine::new(4, 4, GameRng::new(42)).unwrap();
    engine.advance();
    let before = engine.grid().clone();

    let outcome = engine.process_click(3, 3).unwrap();

    assert!(outcome.is_noop());
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_click_can_reopen_finished_game() {
    let config = EngineConfig::new(2, 3).with_palette([Cell::Orange]);
    let mut engine = BoardEngine::with_config(config, GameRng::new(42)).unwrap();
    engine.advance();
    engine.advance();
    assert!(engine.is_game_over());

    // One click clears the whole single-color board.
    let outcome = engine.process_click(1, 1).unwrap();
    assert_eq!(outcome.cleared, 6);
    assert!(!engine.is_game_over());

    engine.advance();
    assert_eq!(engine.ticks(), 3);
}

#[test]
fn test_click_errors() {
    let mut engine = BoardEngine::new(5, 5, GameRng::new(42)).unwrap();

    assert!(matches!(engine.process_click(-1, 0), Err(EngineError::InvalidRow { .. })));
    assert!(matches!(engine.process_click(0, 99), Err(EngineError::InvalidColumn { .. })));
    assert!(matches!(engine.process_click(-1, 99), Err(EngineError::InvalidRow { .. })));
    assert!(matches!(engine.process_click(5, 0), Err(EngineError::InvalidRow { .. })));
    assert!(matches!(engine.process_click(0, 5), Err(EngineError::InvalidColumn { .. })));
}

// =============================================================================
// Trait objects
// =============================================================================

#[test]
fn test_drive_through_trait_object() {
    let mut game: Box<dyn PuzzleRules> =
        Box::new(BoardEngine::new(3, 3, GameRng::new(7)).unwrap());

    game.advance();
    assert!(!game.is_game_over());
    assert!(game.process_click(0, 0).unwrap().cleared >= 1);
}
