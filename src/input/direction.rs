//! Resize handle directions and the anchor rule they imply.

/// One of the eight resize handles, named by compass direction.
///
/// The unit vector of each handle points away from the fixed anchor:
/// `NorthWest` is `(-1, -1)`, `SouthEast` is `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// Which origin coordinates must be recomputed after a size change so that
/// the edge opposite the handle stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorShift {
    pub left: bool,
    pub top: bool,
}

impl ResizeDirection {
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Parse the `(dx, dy)` pair reported by a pointer handle.
    ///
    /// Returns `None` for `(0, 0)` and for components outside `-1..=1`.
    pub fn from_vector(dx: i8, dy: i8) -> Option<Self> {
        match (dx, dy) {
            (-1, -1) => Some(Self::NorthWest),
            (0, -1) => Some(Self::North),
            (1, -1) => Some(Self::NorthEast),
            (-1, 0) => Some(Self::West),
            (1, 0) => Some(Self::East),
            (-1, 1) => Some(Self::SouthWest),
            (0, 1) => Some(Self::South),
            (1, 1) => Some(Self::SouthEast),
            _ => None,
        }
    }

    pub fn vector(self) -> (i8, i8) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
            Self::SouthWest => (-1, 1),
            Self::South => (0, 1),
            Self::SouthEast => (1, 1),
        }
    }

    /// Origin coordinates to recompute for this handle.
    ///
    /// `West` and `North` recompute both axes; the unchanged axis has a zero
    /// size delta so its origin stays where it was.
    pub fn anchor_shift(self) -> AnchorShift {
        match self {
            Self::NorthWest | Self::West | Self::North => AnchorShift {
                left: true,
                top: true,
            },
            Self::NorthEast => AnchorShift {
                left: false,
                top: true,
            },
            Self::SouthWest => AnchorShift {
                left: true,
                top: false,
            },
            Self::East | Self::South | Self::SouthEast => AnchorShift {
                left: false,
                top: false,
            },
        }
    }

    /// True when the handle moves the horizontal extent.
    pub fn moves_horizontally(self) -> bool {
        self.vector().0 != 0
    }

    /// True when the handle moves the vertical extent.
    pub fn moves_vertically(self) -> bool {
        self.vector().1 != 0
    }

    pub fn is_corner(self) -> bool {
        self.moves_horizontally() && self.moves_vertically()
    }
}
