use super::{fate, neighbors, Engine, NaiveEngine, SparseEngine};
use crate::{Coord, Grid};

const SEED: u64 = 42;

fn engine_with(height: usize, width: usize, alive: &[Coord]) -> SparseEngine {
    SparseEngine::from_grid(Grid::from_alive_cells(height, width, alive.iter().copied()).unwrap())
}

fn sorted_alive(engine: &SparseEngine) -> Vec<Coord> {
    let mut v = engine.alive_cells().to_vec();
    v.sort_unstable();
    v
}

fn assert_alive_set_consistent(engine: &SparseEngine) {
    let alive = sorted_alive(engine);
    let mut dedup = alive.clone();
    dedup.dedup();
    assert_eq!(alive, dedup, "duplicates in alive-set");
    assert_eq!(alive, engine.grid().alive_cells().collect::<Vec<_>>());
}

#[test]
fn test_neighbor_counts() {
    let count = |cell| neighbors(5, 7, cell).count();
    assert_eq!(count((0, 0)), 3);
    assert_eq!(count((4, 6)), 3);
    assert_eq!(count((0, 3)), 5);
    assert_eq!(count((2, 0)), 5);
    assert_eq!(count((2, 3)), 8);
    assert!(!neighbors(5, 7, (2, 3)).any(|c| c == (2, 3)));
    assert_eq!(neighbors(1, 1, (0, 0)).count(), 0);
    assert_eq!(
        neighbors(2, 2, (0, 0)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 0), (1, 1)]
    );
}

#[test]
fn test_fate() {
    for n in 0..=8 {
        assert_eq!(fate(true, n), n == 2 || n == 3, "alive, n={}", n);
        assert_eq!(fate(false, n), n == 3, "dead, n={}", n);
    }
}

#[test]
fn test_initialize_builds_alive_set() {
    let grid = Grid::random(17, 23, Some(SEED), 0.4).unwrap();
    let engine = SparseEngine::from_grid(grid.clone());
    assert_eq!(engine.grid(), &grid);
    assert_eq!(engine.population(), grid.population());
    assert_eq!(engine.generation(), 0);
    assert_alive_set_consistent(&engine);
}

#[test]
fn test_dead_field_stays_dead() {
    let mut engine = engine_with(8, 9, &[]);
    for _ in 0..3 {
        assert_eq!(engine.step().population(), 0);
    }
    assert_eq!(engine.generation(), 3);
}

#[test]
fn test_isolated_cell_dies() {
    let mut engine = engine_with(5, 5, &[(2, 2)]);
    engine.step();
    assert_eq!(engine.population(), 0);
    assert!(engine.alive_cells().is_empty());
}

#[test]
fn test_block_is_still_life() {
    let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
    let mut engine = engine_with(10, 10, &block);
    let initial = engine.grid().clone();
    for _ in 0..5 {
        assert_eq!(engine.step(), &initial);
        assert_alive_set_consistent(&engine);
    }
}

#[test]
fn test_blinker_period_2() {
    let horizontal = [(5, 4), (5, 5), (5, 6)];
    let vertical = [(4, 5), (5, 5), (6, 5)];
    let mut engine = engine_with(11, 11, &horizontal);

    engine.step();
    assert_eq!(sorted_alive(&engine), vertical);
    assert_eq!(
        engine.grid(),
        &Grid::from_alive_cells(11, 11, vertical).unwrap()
    );

    engine.step();
    assert_eq!(sorted_alive(&engine), horizontal);
}

#[test]
fn test_corner_cell_sees_three_neighbors() {
    // (0, 0) keeps exactly 3 live neighbors and survives; its
    // out-of-field "neighbors" must not count.
    let mut engine = engine_with(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    engine.step();
    assert_eq!(engine.population(), 4);

    // two neighbors: survives
    let mut engine = engine_with(3, 3, &[(0, 0), (0, 1), (1, 0)]);
    engine.step();
    assert!(engine.grid().get(0, 0));
    // the L-tromino completes into a block
    assert!(engine.grid().get(1, 1));
}

#[test]
fn test_birth_on_edge() {
    // (0, 1) is dead with exactly 3 live neighbors along the top edge
    let mut engine = engine_with(3, 3, &[(0, 0), (0, 2), (1, 1)]);
    engine.step();
    assert!(engine.grid().get(0, 1));
}

#[test]
fn test_dimensions_preserved() {
    let mut engine = SparseEngine::random(13, 31, Some(SEED), 0.5).unwrap();
    for _ in 0..20 {
        let grid = engine.step();
        assert_eq!((grid.height(), grid.width()), (13, 31));
    }
}

#[test]
fn test_single_row_and_column() {
    for (h, w) in [(1, 1), (1, 9), (9, 1)] {
        let mut sparse = SparseEngine::random(h, w, Some(SEED), 0.7).unwrap();
        let mut naive = NaiveEngine::from_grid(sparse.grid().clone());
        for _ in 0..5 {
            assert_eq!(sparse.step(), naive.step());
        }
        // no births on a line, and every run shrinks from both ends
        assert_eq!(sparse.population(), 0);
    }
}

#[test]
fn test_consistency_with_naive() {
    for (h, w, fill_rate) in [(32, 32, 0.3), (20, 45, 0.5), (64, 17, 0.1), (10, 10, 0.9)] {
        let mut sparse = SparseEngine::random(h, w, Some(SEED), fill_rate).unwrap();
        let mut naive = NaiveEngine::from_grid(sparse.grid().clone());
        for gen in 1..=50 {
            assert_eq!(sparse.step(), naive.step(), "{}x{} gen={}", h, w, gen);
            assert_alive_set_consistent(&sparse);
        }
        assert_eq!(sparse.generation(), naive.generation());
    }
}

#[test]
fn test_alive_set_discovery_order() {
    // dead neighbors that are born precede the alive cell whose scan found them
    let mut engine = engine_with(11, 11, &[(5, 4), (5, 5), (5, 6)]);
    engine.step();
    assert_eq!(engine.alive_cells(), &[(4, 5), (6, 5), (5, 5)]);
}
