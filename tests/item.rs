mod common;

use common::{open_grid, ScriptedRandom};
use glam::IVec2;
use pacman_engine::constants::{PLAYER_START, START_SAFE_RADIUS};
use pacman_engine::entity::item::{Collectibles, Densities, ItemKind};
use pacman_engine::map::Grid;
use pacman_engine::random::SeededRandom;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

const DEFAULTS: Densities = Densities {
    power_pellet: 0.05,
    pellet: 0.8,
};

fn within_safe_radius(cell: IVec2) -> bool {
    let offset = (cell - PLAYER_START).abs();
    offset.x <= START_SAFE_RADIUS && offset.y <= START_SAFE_RADIUS
}

#[test]
fn test_placement_skips_start_area_and_walls() {
    let grid = open_grid(20, 15);
    let mut rng = SeededRandom::new(7);
    let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, DEFAULTS, &mut rng);

    assert_that(&items.is_empty()).is_false();
    for &cell in items.pellets().iter().chain(items.power_pellets()) {
        assert_that(&grid.is_open(cell)).is_true();
        assert_that(&within_safe_radius(cell)).is_false();
    }
}

#[test]
fn test_placement_never_doubles_up_a_cell() {
    let grid = open_grid(20, 15);
    let mut rng = SeededRandom::new(99);
    let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, DEFAULTS, &mut rng);

    let mut cells: Vec<IVec2> = items.pellets().iter().chain(items.power_pellets()).copied().collect();
    let total = cells.len();
    cells.sort_by_key(|c| (c.y, c.x));
    cells.dedup();
    assert_eq!(cells.len(), total);
}

#[test]
fn test_power_roll_comes_first() {
    let grid = open_grid(8, 8);
    let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, DEFAULTS, &mut ScriptedRandom::always());

    let eligible = grid.open_cells().filter(|&c| !within_safe_radius(c)).count();
    assert_that(&items.power_pellets().len()).is_equal_to(eligible);
    assert_that(&items.pellets().is_empty()).is_true();
}

#[test]
fn test_empty_roll_falls_back_to_single_pellet() {
    let grid = open_grid(8, 8);
    let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, DEFAULTS, &mut ScriptedRandom::never());

    assert_eq!(items.len(), 1);
    // First open cell in row-major order outside the start area.
    assert_eq!(items.pellets(), &[IVec2::new(4, 1)]);
}

#[test]
fn test_no_eligible_cell_places_nothing() {
    let grid = Grid::parse(&["#####", "#...#", "#####"]).unwrap();
    let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, DEFAULTS, &mut ScriptedRandom::always());
    assert_that(&items.is_empty()).is_true();
}

#[test]
fn test_at_reports_kind() {
    let mut items = Collectibles::new();
    items.place(ItemKind::Pellet, IVec2::new(4, 4));
    items.place(ItemKind::PowerPellet, IVec2::new(5, 4));

    assert_eq!(items.at(IVec2::new(4, 4)), Some(ItemKind::Pellet));
    assert_eq!(items.at(IVec2::new(5, 4)), Some(ItemKind::PowerPellet));
    assert_eq!(items.at(IVec2::new(6, 4)), None);
}
