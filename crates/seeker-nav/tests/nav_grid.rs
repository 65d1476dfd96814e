use seeker_nav::{Cell, Direction, Grid, NavError};

#[test]
fn empty_grids_are_rejected() {
    assert_eq!(
        Grid::new(0, 5),
        Err(NavError::EmptyGrid {
            width: 0,
            height: 5
        })
    );
    assert!(Grid::new(3, 0).is_err());
}

#[test]
fn neighbors_wrap_in_canonical_order() {
    let grid = Grid::new(4, 3).unwrap();
    let n: Vec<Cell> = grid.neighbors(Cell::new(0, 0)).collect();
    assert_eq!(
        n,
        vec![
            Cell::new(1, 0), // right
            Cell::new(3, 0), // left, wrapped
            Cell::new(0, 1), // down
            Cell::new(0, 2), // up, wrapped
        ]
    );

    let n: Vec<Cell> = grid.neighbors(Cell::new(3, 2)).collect();
    assert_eq!(
        n,
        vec![
            Cell::new(0, 2),
            Cell::new(2, 2),
            Cell::new(3, 0),
            Cell::new(3, 1),
        ]
    );
}

#[test]
fn every_cell_has_four_neighbors_under_wraparound() {
    let grid = Grid::new(5, 4).unwrap();
    for cell in grid.cells() {
        let n: Vec<Cell> = grid.neighbors(cell).collect();
        assert_eq!(n.len(), 4);
        assert!(n.iter().all(|&c| grid.contains(c)));
    }
}

#[test]
fn one_by_one_grid_is_its_own_neighbor() {
    let grid = Grid::new(1, 1).unwrap();
    let origin = Cell::new(0, 0);
    assert!(grid.neighbors(origin).all(|c| c == origin));
    assert_eq!(grid.step(origin, Direction::Up), Some(origin));
}

#[test]
fn bounded_grid_drops_off_edge_steps() {
    let grid = Grid::with_wrap(3, 3, false).unwrap();
    assert_eq!(grid.step(Cell::new(0, 0), Direction::Left), None);
    assert_eq!(grid.step(Cell::new(0, 0), Direction::Right), Some(Cell::new(1, 0)));
    assert_eq!(grid.neighbors(Cell::new(0, 0)).count(), 2);
    assert_eq!(grid.neighbors(Cell::new(1, 1)).count(), 4);
}

#[test]
fn direction_between_understands_wraparound() {
    let grid = Grid::new(4, 4).unwrap();
    assert_eq!(
        grid.direction_between(Cell::new(0, 0), Cell::new(3, 0)),
        Some(Direction::Left)
    );
    assert_eq!(
        grid.direction_between(Cell::new(0, 3), Cell::new(0, 0)),
        Some(Direction::Down)
    );
    assert_eq!(grid.direction_between(Cell::new(0, 0), Cell::new(2, 0)), None);
    assert!(grid.are_adjacent(Cell::new(3, 3), Cell::new(0, 3)));
}

#[test]
fn distance_takes_the_short_way_round() {
    let grid = Grid::new(4, 4).unwrap();
    assert_eq!(grid.distance(Cell::new(0, 0), Cell::new(3, 3)), 2);
    let bounded = Grid::with_wrap(4, 4, false).unwrap();
    assert_eq!(bounded.distance(Cell::new(0, 0), Cell::new(3, 3)), 6);
}

#[test]
fn validate_reports_out_of_bounds_cells() {
    let grid = Grid::new(2, 2).unwrap();
    assert_eq!(grid.validate(Cell::new(1, 1)), Ok(Cell::new(1, 1)));
    let err = grid.validate(Cell::new(2, 0)).unwrap_err();
    assert_eq!(err.to_string(), "cell (2, 0) is outside the 2x2 grid");
}
