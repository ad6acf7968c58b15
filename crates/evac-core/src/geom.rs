//! Geometry primitives: [`Position`] and [`Extent`].
//!
//! A building is addressed by an integer triple `(x, y, floor)`. X grows
//! right, Y grows down, floor 0 is the ground floor.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate inside a multi-floor building.
///
/// The canonical textual key is `"x,y,floor"` (see the [`Display`](fmt::Display)
/// and [`FromStr`] impls).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub floor: i32,
}

impl Position {
    /// Origin (0, 0) on the ground floor.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        floor: 0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, floor: i32) -> Self {
        Self { x, y, floor }
    }

    /// Return a position shifted horizontally by (dx, dy) on the same floor.
    /// Coordinates saturate at the `i32` bounds.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            floor: self.floor,
        }
    }

    /// Same (x, y) on another floor.
    #[inline]
    pub const fn on_floor(self, floor: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            floor,
        }
    }

    /// Whether the position is inside the extent.
    #[inline]
    pub fn in_extent(self, e: &Extent) -> bool {
        e.contains(self)
    }

    /// Whether a move from `self` to `other` changes both x and y.
    #[inline]
    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// All eight same-floor neighbours (cardinal + diagonal), clockwise
    /// starting north.
    #[inline]
    pub fn neighbors_8(self) -> [Position; 8] {
        [
            self.shift(0, -1),
            self.shift(1, -1),
            self.shift(1, 0),
            self.shift(1, 1),
            self.shift(0, 1),
            self.shift(-1, 1),
            self.shift(-1, 0),
            self.shift(-1, -1),
        ]
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.floor
            .cmp(&other.floor)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.floor)
    }
}

/// Error returned when parsing a `"x,y,floor"` key fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position key \u{201c}{0}\u{201d}, expected \"x,y,floor\"")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let mut parts = s.split(',').map(|part| part.trim().parse::<i32>());
        let (Some(Ok(x)), Some(Ok(y)), Some(Ok(floor)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        Ok(Self::new(x, y, floor))
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.floor + rhs.floor)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.floor - rhs.floor)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// Dimensions of a building grid: `[0, width) × [0, height) × [0, floors)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: i32,
    pub height: i32,
    pub floors: i32,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: i32, height: i32, floors: i32) -> Self {
        Self {
            width,
            height,
            floors,
        }
    }

    /// Whether any dimension is non-positive.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0 || self.floors <= 0
    }

    /// Number of cells (0 for empty extents).
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width as usize * self.height as usize * self.floors as usize
    }

    /// Number of cells on a single floor.
    #[inline]
    pub fn floor_len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Whether `p` lies inside the extent.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.floor >= 0
            && p.x < self.width
            && p.y < self.height
            && p.floor < self.floors
    }

    /// Whether `p` lies on the outer ring of its floor.
    #[inline]
    pub fn on_perimeter(self, p: Position) -> bool {
        self.contains(p)
            && (p.x == 0 || p.y == 0 || p.x == self.width - 1 || p.y == self.height - 1)
    }

    /// Flat index of `p` (floor-major, then row-major), or `None` if outside.
    #[inline]
    pub fn idx(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let w = self.width as usize;
        let h = self.height as usize;
        Some(p.floor as usize * w * h + p.y as usize * w + p.x as usize)
    }

    /// Inverse of [`idx`](Self::idx). `idx` must be `< len()`.
    #[inline]
    pub fn position(self, idx: usize) -> Position {
        let w = self.width as usize;
        let plane = self.floor_len();
        let floor = idx / plane;
        let rem = idx % plane;
        Position::new((rem % w) as i32, (rem / w) as i32, floor as i32)
    }

    /// Iterate over all positions, floor by floor in row-major order.
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.floors)
    }
}

/// Iterator over every position of an [`Extent`].
pub struct ExtentIter {
    extent: Extent,
    next: usize,
    len: usize,
}

impl Iterator for ExtentIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.len {
            return None;
        }
        let p = self.extent.position(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ExtentIter {}

impl IntoIterator for Extent {
    type Item = Position;
    type IntoIter = ExtentIter;

    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}
