//! D4 symmetry group of the 3×3 board.
//!
//! Rotations and reflections of a position never change who wins it, so
//! the least image under all eight transforms is a sound cache key.

use serde::{Deserialize, Serialize};

use super::board::{Cell, CELLS, SIZE};

/// One element of the dihedral group of the square.
///
/// Applied as an optional left-right reflection followed by a clockwise
/// rotation of `quarter_turns × 90°`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    pub quarter_turns: u8,
    pub reflect: bool,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry {
        quarter_turns: 0,
        reflect: false,
    };

    /// All eight transforms, identity first.
    #[must_use]
    pub fn all() -> [Symmetry; 8] {
        let mut out = [Self::IDENTITY; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = Symmetry {
                quarter_turns: (i / 2) as u8,
                reflect: i % 2 == 1,
            };
        }
        out
    }

    /// Where the cell at row-major `index` lands.
    #[must_use]
    pub fn map_index(self, index: usize) -> usize {
        let (mut row, mut col) = (index / SIZE, index % SIZE);

        if self.reflect {
            col = SIZE - 1 - col;
        }
        for _ in 0..self.quarter_turns % 4 {
            let new_row = col;
            col = SIZE - 1 - row;
            row = new_row;
        }

        row * SIZE + col
    }

    /// Image of a whole board.
    #[must_use]
    pub fn apply(self, cells: &[Cell; CELLS]) -> [Cell; CELLS] {
        let mut out = [Cell::Empty; CELLS];
        for (i, &cell) in cells.iter().enumerate() {
            out[self.map_index(i)] = cell;
        }
        out
    }
}

/// The lexicographically least image of `cells` under D4.
#[must_use]
pub fn canonical_cells(cells: &[Cell; CELLS]) -> [Cell; CELLS] {
    Symmetry::all()
        .iter()
        .map(|s| s.apply(cells))
        .min()
        .unwrap_or(*cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_transform_is_a_permutation() {
        for s in Symmetry::all() {
            let images: HashSet<usize> = (0..CELLS).map(|i| s.map_index(i)).collect();
            assert_eq!(images.len(), CELLS, "{s:?} is not a bijection");
            assert_eq!(s.map_index(4), 4, "center must be fixed");
        }
    }

    #[test]
    fn test_transforms_are_distinct() {
        let images: HashSet<Vec<usize>> = Symmetry::all()
            .iter()
            .map(|s| (0..CELLS).map(|i| s.map_index(i)).collect())
            .collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_quarter_turn_moves_top_left_to_top_right() {
        let turn = Symmetry {
            quarter_turns: 1,
            reflect: false,
        };
        assert_eq!(turn.map_index(0), 2);
        assert_eq!(turn.map_index(2), 8);
    }

    #[test]
    fn test_canonical_cells_collapses_corner_openings() {
        let mut boards = Vec::new();
        for corner in [0, 2, 6, 8] {
            let mut cells = [Cell::Empty; CELLS];
            cells[corner] = Cell::X;
            boards.push(canonical_cells(&cells));
        }
        assert!(boards.windows(2).all(|w| w[0] == w[1]));

        let mut edge = [Cell::Empty; CELLS];
        edge[1] = Cell::X;
        assert_ne!(canonical_cells(&edge), boards[0]);
    }
}
