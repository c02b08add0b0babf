/*
 * BOARD GEOMETRY
 * Index 0 is the top-left square (a8, black side), rows run left to right.
 * Row 0 is black's back rank, row 7 is white's.
 */

pub const BOARD_SIZE: usize = 64;
pub const ROW_SIZE: i32 = 8;

/// Transient (x, y) pair, both axes 0..7 on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates shifted by (dx, dy); may leave the board
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        coordinates_out_of_range(self.x, self.y)
    }

    /// Board index, or `None` when the pair lies off the board
    pub fn to_index(&self) -> Option<usize> {
        if self.is_out_of_range() {
            return None;
        }
        Some(from_coordinates(self.x, self.y) as usize)
    }
}

pub fn to_coordinates(index: usize) -> Coordinates {
    let index = index as i32;
    Coordinates {
        x: index % ROW_SIZE,
        y: index / ROW_SIZE,
    }
}

/// Inverse of [`to_coordinates`] over the valid domain.
/// No bounds check: pair it with [`coordinates_out_of_range`].
pub fn from_coordinates(x: i32, y: i32) -> i32 {
    y * ROW_SIZE + x
}

pub fn index_out_of_range(index: i32) -> bool {
    index < 0 || index >= BOARD_SIZE as i32
}

pub fn coordinates_out_of_range(x: i32, y: i32) -> bool {
    x < 0 || x >= ROW_SIZE || y < 0 || y >= ROW_SIZE
}
