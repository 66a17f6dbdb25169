//! End-to-end tests of the game engine through its public API.

use slide2048::board::Board;
use slide2048::core::{Direction, EngineError, GameConfig, Position};
use slide2048::game::{Command, CommandOutcome, GameState, MoveOutcome, SelectOutcome};
use slide2048::persistence::{BestScoreStore, MemoryBestScore};
use slide2048::rules::GameStatus;

fn four_by_four(first_row: [u32; 4]) -> GameState {
    let mut rows = vec![vec![0; 4]; 4];
    rows[0] = first_row.to_vec();
    let board = Board::from_rows(rows).unwrap();
    GameState::from_board(GameConfig::default().with_seed(2024), board).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_lone_tile_slides_to_wall() {
    let mut game = four_by_four([2, 0, 0, 0]);
    game.select(Position::new(0, 0)).unwrap();

    let report = game.move_selected(Direction::Right).report().copied().unwrap();

    assert_eq!(report.to, Position::new(0, 3));
    assert_eq!(report.merged, None);
    assert_eq!(game.board().get(Position::new(0, 3)), Some(2));
    assert_eq!(game.board().tile_count(), 2, "one tile moved, one spawned");
    assert_eq!(game.score(), 0);
}

#[test]
fn test_equal_tiles_merge_once() {
    let mut game = four_by_four([2, 0, 2, 0]);
    game.select(Position::new(0, 0)).unwrap();

    let report = game.move_selected(Direction::Right).report().copied().unwrap();

    assert_eq!(report.to, Position::new(0, 2));
    assert_eq!(report.merged, Some(4));
    assert_eq!(game.board().get(Position::new(0, 2)), Some(4));
    assert_eq!(game.score(), 4);

    let origin = game.board().get(Position::new(0, 0)).unwrap();
    match report.spawned {
        Some(s) if s.position == Position::new(0, 0) => assert_eq!(origin, s.value),
        _ => assert_eq!(origin, 0),
    }
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    // 2 merges into the first 2 it meets; the 4 beyond is untouched.
    let mut game = four_by_four([2, 0, 2, 4]);
    game.select(Position::new(0, 0)).unwrap();

    let report = game.move_selected(Direction::Right).report().copied().unwrap();

    assert_eq!(report.merged, Some(4));
    assert_eq!(report.to, Position::new(0, 2));
    assert_eq!(game.board().get(Position::new(0, 3)), Some(4));
    assert_eq!(game.score(), 4);
}

#[test]
fn test_blocked_tile_changes_nothing() {
    let mut game = four_by_four([2, 4, 0, 0]);
    game.select(Position::new(0, 0)).unwrap();
    let before = game.clone();

    assert_eq!(game.move_selected(Direction::Right), MoveOutcome::Blocked);
    assert_eq!(game, before);
}

#[test]
fn test_wall_is_blocked() {
    let mut game = four_by_four([2, 0, 0, 0]);
    game.select(Position::new(0, 0)).unwrap();

    assert_eq!(game.move_selected(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(game.move_selected(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(game.selection(), Some(Position::new(0, 0)));
}

// =============================================================================
// Win / Lose
// =============================================================================

#[test]
fn test_target_is_threshold_not_exact() {
    let board = Board::from_rows(vec![vec![64, 0, 64], vec![0; 3], vec![0; 3]]).unwrap();
    let config = GameConfig::default().with_seed(5).with_target(100);
    let mut game = GameState::from_board(config, board).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    game.select(Position::new(0, 0)).unwrap();
    let report = game.move_selected(Direction::Right).report().copied().unwrap();

    assert_eq!(report.merged, Some(128));
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_full_board_with_merge_is_not_lost() {
    let board = Board::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
    let game = GameState::from_board(GameConfig::default(), board).unwrap();
    assert!(game.board().is_full());
    assert!(game.has_any_move());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_lost_board_reports_game_over() {
    let board = Board::from_rows(vec![
        vec![2, 4, 2],
        vec![4, 2, 4],
        vec![2, 4, 2],
    ])
    .unwrap();
    let mut game = GameState::from_board(GameConfig::default(), board).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);

    game.select(Position::new(1, 1)).unwrap();
    for dir in Direction::ALL {
        assert_eq!(game.move_selected(dir), MoveOutcome::GameOver);
    }

    game.restart();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().tile_count(), 1);
}

// =============================================================================
// Full Games
// =============================================================================

/// Pick the first tile that can move in some direction and move it.
fn play_one(game: &mut GameState) -> Option<MoveOutcome> {
    let tiles: Vec<Position> = game
        .board()
        .iter()
        .filter(|&(_, v)| v != 0)
        .map(|(p, _)| p)
        .collect();
    for pos in tiles {
        for dir in Direction::ALL {
            if game.selection() != Some(pos) {
                game.select(pos).unwrap();
            }
            let outcome = game.move_selected(dir);
            if outcome.moved() {
                return Some(outcome);
            }
        }
        game.deselect();
    }
    None
}

#[test]
fn test_play_until_game_ends() {
    let config = GameConfig::default()
        .with_seed(99)
        .with_board_size(slide2048::core::BoardSize::new(3).unwrap())
        .with_target(1 << 20);
    let mut game = GameState::new(config).unwrap();
    let mut store = MemoryBestScore::default();

    let mut moves = 0;
    while game.status() == GameStatus::InProgress {
        let outcome = play_one(&mut game).expect("an in-progress game always has a move");
        let report = outcome.report().unwrap();
        if report.new_best {
            store.save(game.best_score()).unwrap();
        }
        moves += 1;
        assert!(moves < 100_000, "game did not terminate");
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert!(game.board().is_full());
    assert!(!game.has_any_move());
    assert_eq!(game.moves(), moves);
    assert_eq!(store.load().unwrap(), game.best_score());
    assert_eq!(game.best_score(), game.score());
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = GameState::new(GameConfig::default().with_seed(seed)).unwrap();
        for _ in 0..50 {
            if play_one(&mut game).is_none() {
                break;
            }
        }
        game
    };
    assert_eq!(run(31), run(31));
    assert_ne!(run(31).board(), run(32).board());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_command_stream() {
    let mut game = four_by_four([2, 0, 0, 0]);
    let commands = [
        Command::select(0, 0),
        Command::select(0, 0),
        Command::select(0, 0),
        Command::slide(Direction::Down),
        Command::slide(Direction::Down),
    ];
    let outcomes: Vec<_> = commands
        .into_iter()
        .map(|c| game.apply(c).unwrap())
        .collect();

    assert_eq!(outcomes[0], CommandOutcome::Select(SelectOutcome::Selected(Position::new(0, 0))));
    assert_eq!(outcomes[1], CommandOutcome::Select(SelectOutcome::Deselected));
    assert!(matches!(outcomes[3], CommandOutcome::Move(MoveOutcome::Moved(_))));
    assert_eq!(outcomes[4], CommandOutcome::Move(MoveOutcome::NoSelection));
    assert_eq!(game.board().get(Position::new(3, 0)), Some(2));
}

#[test]
fn test_commands_from_json() {
    let mut game = four_by_four([2, 0, 0, 0]);
    let script = r#"[
        {"type": "select", "position": {"row": 0, "col": 0}},
        {"type": "move", "direction": "right"},
        {"type": "resize", "size": 5}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(script).unwrap();
    for command in commands {
        game.apply(command).unwrap();
    }
    assert_eq!(game.size().get(), 5);
    assert_eq!(game.board().tile_count(), 1);
}

#[test]
fn test_invalid_commands_leave_state_alone() {
    let mut game = four_by_four([2, 0, 0, 0]);
    let before = game.clone();

    assert_eq!(
        game.apply(Command::select(4, 0)).unwrap_err(),
        EngineError::InvalidPosition { row: 4, col: 0, size: 4 }
    );
    assert_eq!(
        game.apply(Command::Resize { size: 1 }).unwrap_err(),
        EngineError::InvalidBoardSize { size: 1 }
    );
    assert_eq!(game, before);
}
