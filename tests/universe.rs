//! Integration tests for the universe public API

use life_universe::{Cell, Seeding, Strategy, Universe, UniverseConfig, UniverseError, presets};

fn alive_set(universe: &Universe) -> Vec<(u32, u32)> {
    let width = universe.width();
    universe
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(i, _)| (i as u32 / width, i as u32 % width))
        .collect()
}

#[test]
fn test_blinker_flips() {
    let mut universe = Universe::empty(5, 5).unwrap();
    universe.set_cells(&[(2, 1), (2, 2), (2, 3)]);

    universe.tick();

    assert_eq!(alive_set(&universe), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_blinker_fills_three_by_three_torus() {
    // Every cell's eight wrapped neighbors are the whole rest of the grid
    let mut universe = Universe::empty(3, 3).unwrap();
    universe.set_cells(&[(1, 0), (1, 1), (1, 2)]);

    universe.tick();
    assert_eq!(universe.population(), 9);

    universe.tick();
    assert_eq!(universe.population(), 0);
}

#[test]
fn test_tick_is_deterministic() {
    let mut a = Universe::with_dimensions(40, 30).unwrap();
    let mut b = Universe::with_dimensions(40, 30).unwrap();
    for _ in 0..25 {
        a.tick();
        b.tick();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}

#[test]
fn test_corner_sees_opposite_corner() {
    let mut universe = Universe::empty(6, 4).unwrap();
    universe.toggle_cell(3, 5);
    assert_eq!(universe.live_neighbor_count(0, 0), 1);
}

#[test]
fn test_double_toggle_restores_cell() {
    let mut universe = Universe::new();
    let before = universe.get(10, 11);
    universe.toggle_cell(10, 11);
    assert_ne!(universe.get(10, 11), before);
    universe.toggle_cell(10, 11);
    assert_eq!(universe.get(10, 11), before);
    assert_eq!(universe.cells(), Universe::new().cells());
}

#[test]
fn test_buffer_length_invariant() {
    for (width, height) in [(1, 1), (1, 9), (9, 1), (3, 3), (17, 5), (64, 64)] {
        let mut universe = Universe::with_dimensions(width, height).unwrap();
        let expected = (width * height) as usize;
        assert_eq!(universe.cells().len(), expected);
        universe.tick_n(3);
        assert_eq!(universe.cells().len(), expected);
        assert_eq!(universe.as_bytes().len(), expected);
    }
}

#[test]
fn test_single_column_torus() {
    // The live cell sees itself twice and survives; the others see it three times
    let mut universe = Universe::empty(1, 3).unwrap();
    universe.toggle_cell(1, 0);

    universe.tick();
    assert_eq!(alive_set(&universe), vec![(0, 0), (1, 0), (2, 0)]);

    // Full column: 2 + 3 + 3 = 8 neighbors each
    universe.tick();
    assert_eq!(universe.population(), 0);
}

#[test]
fn test_single_row_torus() {
    let mut universe = Universe::empty(3, 1).unwrap();
    universe.toggle_cell(0, 1);

    universe.tick();
    assert_eq!(alive_set(&universe), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_single_cell_torus_overcrowds() {
    let mut universe = Universe::empty(1, 1).unwrap();
    universe.toggle_cell(0, 0);
    assert_eq!(universe.live_neighbor_count(0, 0), 8);

    universe.tick();
    assert_eq!(universe.population(), 0);
}

#[test]
fn test_two_by_two_torus() {
    // Lone cell: 0 neighbors, the rest see it 2 or 4 times
    let mut universe = Universe::empty(2, 2).unwrap();
    universe.toggle_cell(0, 0);
    universe.tick();
    assert_eq!(universe.population(), 0);

    // Full row: each live cell sees its partner twice, each dead cell sees 6
    let mut universe = Universe::empty(2, 2).unwrap();
    universe.set_cells(&[(0, 0), (0, 1)]);
    assert_eq!(universe.live_neighbor_count(0, 0), 2);
    assert_eq!(universe.live_neighbor_count(1, 0), 6);
    universe.tick();
    assert_eq!(alive_set(&universe), vec![(0, 0), (0, 1)]);
}

#[test]
fn test_default_seeding_small_width() {
    let universe = Universe::with_dimensions(5, 3).unwrap();
    let alive: Vec<usize> = universe
        .as_bytes()
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == 1)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(alive, vec![0, 2, 4, 6, 7, 8, 10, 12, 14]);
}

#[test]
fn test_rule_table_cases() {
    let mut universe = Universe::empty(5, 5).unwrap();
    // Three alive cells with 2 neighbors each, one dead corner with 3
    universe.set_cells(&[(1, 1), (1, 2), (2, 1)]);
    universe.tick();
    // L-tromino becomes a block: the dead corner is born, the others survive
    assert_eq!(alive_set(&universe), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);

    // Plus sign: center has 4 neighbors and dies
    let mut universe = Universe::empty(5, 5).unwrap();
    universe.set_cells(&[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
    universe.tick();
    assert_eq!(universe.get(2, 2), Cell::Dead);
}

#[test]
fn test_glider_returns_after_full_lap() {
    let mut universe = Universe::empty(8, 8).unwrap();
    presets::glider().place_on(&mut universe, 0, 0);
    let start = universe.cells().to_vec();

    // One diagonal step per 4 generations, 8 steps around an 8x8 torus
    universe.tick_n(4);
    assert_ne!(universe.cells(), start.as_slice());
    assert_eq!(universe.population(), 5);

    universe.tick_n(4 * 7);
    assert_eq!(universe.cells(), start.as_slice());
}

#[test]
fn test_strategies_agree() {
    let config = UniverseConfig::default()
        .with_dimensions(300, 250)
        .with_seeding(Seeding::Random { density: 0.4, seed: 99 });

    let mut grids: Vec<Universe> = Strategy::all()
        .into_iter()
        .map(|strategy| Universe::from_config(&config.clone().with_strategy(strategy)).unwrap())
        .collect();

    for _ in 0..5 {
        grids.iter_mut().for_each(Universe::tick);
        assert!(grids.windows(2).all(|pair| pair[0].cells() == pair[1].cells()));
    }
}

#[test]
fn test_invalid_construction() {
    assert_eq!(
        Universe::with_dimensions(0, 3).unwrap_err(),
        UniverseError::ZeroDimension { width: 0, height: 3 }
    );
    assert!(matches!(
        Universe::random(4, 4, 2.0, 0),
        Err(UniverseError::InvalidDensity(_))
    ));
}

#[test]
fn test_resize_is_hard_reset() {
    let mut universe = Universe::new();
    universe.set_height(12).unwrap();
    assert_eq!((universe.width(), universe.height()), (64, 12));
    assert!(universe.as_bytes().iter().all(|b| *b == 0));
}
