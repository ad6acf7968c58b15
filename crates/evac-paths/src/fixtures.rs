//! Floor plans shared by the search tests.

use evac_core::{Grid, Position};

/// 5×5 single room with an exit on the west side.
pub(crate) fn room() -> Grid {
    Grid::from_floors(&["\
#####
#...#
#E..#
#...#
#####"])
    .unwrap()
}

/// Two open 5×5 floors joined only by a stair column at (2, 2).
pub(crate) fn two_floors() -> Grid {
    let floor = "\
.....
.....
..S..
.....
.....";
    Grid::from_floors(&[floor, floor]).unwrap()
}

/// Goal at (3, 3, 0) sealed inside a wall ring; (1, 1, 0) outside.
pub(crate) fn enclosed_goal() -> Grid {
    Grid::from_floors(&["\
#######
#.....#
#.###.#
#.#.#.#
#.###.#
#.....#
#######"])
    .unwrap()
}

pub(crate) const ENCLOSED_START: Position = Position::new(1, 1, 0);
pub(crate) const ENCLOSED_GOAL: Position = Position::new(3, 3, 0);

/// Start at (3, 3, 0) with all eight neighbors burning.
pub(crate) fn ringed_by_fire() -> Grid {
    Grid::from_floors(&["\
#######
#.....#
#.FFF.#
#.F.F.#
#.FFF.#
#.....#
#######"])
    .unwrap()
}

pub(crate) const RINGED_START: Position = Position::new(3, 3, 0);
pub(crate) const RINGED_GOAL: Position = Position::new(1, 1, 0);

/// Single floor with a few obstacles.
pub(crate) fn maze() -> Grid {
    Grid::from_floors(&["\
#########
#.......#
#.####..#
#....#..#
###..#.##
#....#..#
#.##....#
#.......#
#########"])
    .unwrap()
}

/// Three floors with stairs at opposite corners, forcing long detours.
pub(crate) fn tower() -> Grid {
    Grid::from_floors(&[
        "\
########
#E....S#
#......#
#......#
########",
        "\
########
#S....S#
#..##..#
#......#
########",
        "\
########
#S.....#
#......#
#...F..#
########",
    ])
    .unwrap()
}

/// Whether consecutive positions of `path` are legal single moves.
pub(crate) fn is_connected(grid: &Grid, path: &[Position]) -> bool {
    path.windows(2)
        .all(|w| crate::neighbors::neighbors(grid, w[0]).contains(&w[1]))
}
