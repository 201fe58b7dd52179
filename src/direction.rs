use crate::error::SearchError;

/// One of the eight compass moves on the grid. The discriminant is the raw value accepted by
/// [Direction::from_raw]; y grows southwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    NorthEast = 4,
    NorthWest = 5,
    SouthEast = 6,
    SouthWest = 7,
}

/// Expansion order on a 4-grid. Changing it changes which of several equal-cost paths is found.
pub const CARDINAL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Expansion order on an 8-grid: the cardinal directions followed by the diagonals.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    pub fn from_raw(raw: u8) -> Result<Direction, SearchError> {
        ALL_DIRECTIONS
            .get(raw as usize)
            .copied()
            .ok_or(SearchError::UnknownDirection(raw))
    }

    /// The `(dx, dy)` offset of a single step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub fn diagonal(self) -> bool {
        (self as u8) >= 4
    }
}

impl TryFrom<u8> for Direction {
    type Error = SearchError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Direction::from_raw(raw)
    }
}

/// Whether diagonal moves are allowed in addition to orthogonal ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    #[default]
    Four,
    Eight,
}

impl Connectivity {
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Connectivity::Four => &CARDINAL_DIRECTIONS,
            Connectivity::Eight => &ALL_DIRECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(Direction::from_raw(dir as u8), Ok(dir));
        }
    }

    #[test]
    fn unknown_direction_is_rejected() {
        assert_eq!(Direction::from_raw(8), Err(SearchError::UnknownDirection(8)));
        assert_eq!(
            Direction::try_from(255),
            Err(SearchError::UnknownDirection(255))
        );
    }

    #[test]
    fn diagonals_move_on_both_axes() {
        for dir in ALL_DIRECTIONS {
            let (dx, dy) = dir.offset();
            assert_eq!(dir.diagonal(), dx != 0 && dy != 0);
        }
    }

    #[test]
    fn connectivity_selects_direction_table() {
        assert_eq!(Connectivity::Four.directions().len(), 4);
        assert_eq!(Connectivity::Eight.directions().len(), 8);
        assert_eq!(
            &Connectivity::Eight.directions()[..4],
            Connectivity::Four.directions()
        );
    }
}
