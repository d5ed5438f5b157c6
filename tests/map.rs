use glam::{IVec2, Vec2};
use pacman_engine::constants::collider::ENTITY_HALF_WIDTH;
use pacman_engine::constants::PLAYER_START;
use pacman_engine::direction::Direction;
use pacman_engine::entity::ghost::GhostType;
use pacman_engine::error::ParseError;
use pacman_engine::map::builder::{CorridorMaze, GridProvider};
use pacman_engine::map::{Cell, Grid};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn sample() -> Grid {
    Grid::parse(&[
        "#####", //
        "#...#",
        "#.#.#",
        "#...#",
        "#####",
    ])
    .unwrap()
}

#[test]
fn test_can_occupy_floors_fractional_input() {
    let grid = sample();
    assert_that(&grid.can_occupy(Vec2::new(1.9, 1.2))).is_true();
    assert_that(&grid.can_occupy(Vec2::new(2.0, 2.0))).is_false();
    assert_that(&grid.can_occupy(Vec2::new(2.99, 2.5))).is_false();
    assert_that(&grid.can_occupy(Vec2::new(3.01, 2.5))).is_true();
}

#[test]
fn test_can_occupy_rejects_out_of_bounds() {
    let grid = sample();
    assert_that(&grid.can_occupy(Vec2::new(-0.5, 1.0))).is_false();
    assert_that(&grid.can_occupy(Vec2::new(5.0, 1.0))).is_false();
    assert_that(&grid.can_occupy(Vec2::new(1.0, 100.0))).is_false();
}

#[test]
fn test_safe_position_needs_all_corners() {
    let grid = sample();
    assert_that(&grid.is_safe_position(Vec2::new(1.5, 1.5), ENTITY_HALF_WIDTH)).is_true();
    // Straddles the open cell (1,1) and the pillar at (2,2).
    assert_that(&grid.is_safe_position(Vec2::new(2.0, 2.0), ENTITY_HALF_WIDTH)).is_false();
    // Between two open cells on the same row.
    assert_that(&grid.is_safe_position(Vec2::new(2.0, 1.5), ENTITY_HALF_WIDTH)).is_true();
}

#[test]
fn test_open_directions() {
    let grid = sample();
    let options = grid.open_directions(IVec2::new(1, 1));
    assert_eq!(options.as_slice(), &[Direction::Down, Direction::Right]);
    assert_that(&grid.open_directions(IVec2::new(2, 2)).len()).is_equal_to(4);
}

#[test]
fn test_parse_errors() {
    assert_eq!(Grid::parse(&[]), Err(ParseError::Empty));
    assert_eq!(
        Grid::parse(&["###", "##"]),
        Err(ParseError::RaggedRow {
            row: 1,
            found: 2,
            expected: 3
        })
    );
    assert_eq!(Grid::parse(&["#x#"]), Err(ParseError::UnknownCharacter('x')));
}

#[test]
fn test_parse_dimensions_and_cells() {
    let grid = sample();
    assert_eq!((grid.cols(), grid.rows()), (5, 5));
    assert_eq!(grid.get(IVec2::new(2, 2)), Some(Cell::Wall));
    assert_eq!(grid.get(IVec2::new(3, 3)), Some(Cell::Open));
    assert_eq!(grid.open_cells().count(), 8);
}

#[test]
fn test_corridor_maze_structure() {
    let grid = CorridorMaze.generate(20, 15);
    assert_eq!((grid.cols(), grid.rows()), (20, 15));

    for x in 0..20 {
        assert_that(&grid.is_open(IVec2::new(x, 0))).is_false();
        assert_that(&grid.is_open(IVec2::new(x, 14))).is_false();
        assert_that(&grid.is_open(IVec2::new(x, 1))).is_true();
        assert_that(&grid.is_open(IVec2::new(x.clamp(1, 18), 13))).is_true();
    }
    for y in 1..14 {
        assert_that(&grid.is_open(IVec2::new(1, y))).is_true();
        assert_that(&grid.is_open(IVec2::new(18, y))).is_true();
        assert_that(&grid.is_open(IVec2::new(4, y))).is_true();
    }
    for x in 1..19 {
        assert_that(&grid.is_open(IVec2::new(x, 4))).is_true();
    }
}

#[test]
fn test_corridor_maze_keeps_start_and_homes_open() {
    for (cols, rows) in [(7, 7), (10, 10), (20, 15), (31, 23)] {
        let grid = CorridorMaze.generate(cols, rows);
        assert_that(&grid.is_open(PLAYER_START)).is_true();
        for kind in GhostType::ALL {
            assert_that(&grid.is_open(kind.home(grid.center()))).is_true();
        }
    }
}

#[test]
fn test_corridor_maze_is_connected() {
    let grid = CorridorMaze.generate(20, 15);
    let mut seen = vec![PLAYER_START];
    let mut frontier = vec![PLAYER_START];
    while let Some(cell) = frontier.pop() {
        for direction in grid.open_directions(cell) {
            let next = direction.step(cell);
            if !seen.contains(&next) {
                seen.push(next);
                frontier.push(next);
            }
        }
    }
    assert_eq!(seen.len(), grid.open_cells().count());
}
