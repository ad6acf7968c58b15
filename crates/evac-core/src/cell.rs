//! Cell kinds of the building grid.

use std::fmt;

/// What occupies a single grid cell.
///
/// The discriminants match the integer codes used by building maps
/// (`0` walkable, `1` wall, `2` fire, `3` stairs, `4` exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Walkable = 0,
    Wall = 1,
    Fire = 2,
    Stairs = 3,
    Exit = 4,
}

impl CellKind {
    /// Every kind, in code order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Walkable,
        CellKind::Wall,
        CellKind::Fire,
        CellKind::Stairs,
        CellKind::Exit,
    ];

    /// Whether an agent may step onto a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Walkable | Self::Stairs | Self::Exit)
    }

    /// Integer map code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Kind for an integer map code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Walkable),
            1 => Some(Self::Wall),
            2 => Some(Self::Fire),
            3 => Some(Self::Stairs),
            4 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Floor-plan rune.
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            Self::Walkable => '.',
            Self::Wall => '#',
            Self::Fire => 'F',
            Self::Stairs => 'S',
            Self::Exit => 'E',
        }
    }

    /// Kind for a floor-plan rune.
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Walkable),
            '#' => Some(Self::Wall),
            'F' => Some(Self::Fire),
            'S' => Some(Self::Stairs),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Walkable => "walkable",
            Self::Wall => "wall",
            Self::Fire => "fire",
            Self::Stairs => "stairs",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}
