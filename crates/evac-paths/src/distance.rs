use evac_core::Position;

/// Scale applied to the floor difference inside the heuristic.
pub const FLOOR_HEURISTIC_FACTOR: f64 = 10.0;

/// Cost of a straight same-floor step.
pub const STRAIGHT_COST: f64 = 1.0;

/// Cost of a diagonal same-floor step.
pub const DIAGONAL_COST: f64 = 1.414;

/// Flat penalty added to any move that changes floor.
pub const FLOOR_CHANGE_PENALTY: f64 = 5.0;

/// Euclidean distance with the floor axis scaled by
/// [`FLOOR_HEURISTIC_FACTOR`]: `sqrt(dx² + dy² + (10·dfloor)²)`.
///
/// This is not a lower bound on [`movement_cost`] for floor changes (a
/// single stair step costs 6 but estimates 10).
#[inline]
pub fn heuristic(a: Position, b: Position) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    let df = FLOOR_HEURISTIC_FACTOR * (f64::from(b.floor) - f64::from(a.floor));
    (dx * dx + dy * dy + df * df).sqrt()
}

/// Cost of moving between two adjacent positions.
#[inline]
pub fn movement_cost(a: Position, b: Position) -> f64 {
    let base = if a.is_diagonal_to(b) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    };
    if a.floor != b.floor {
        base + FLOOR_CHANGE_PENALTY
    } else {
        base
    }
}

/// Sum of [`movement_cost`] over consecutive pairs of `path`.
pub fn path_cost(path: &[Position]) -> f64 {
    path.windows(2).map(|w| movement_cost(w[0], w[1])).sum()
}

/// Number of consecutive pairs of `path` on different floors.
pub fn floor_changes(path: &[Position]) -> usize {
    path.windows(2).filter(|w| w[0].floor != w[1].floor).count()
}
