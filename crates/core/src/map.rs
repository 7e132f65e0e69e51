//! Map module - the square terrain grid
//!
//! The map is a `size x size` grid where each cell holds a [`CellType`].
//! Uses a flat vector in row-major order (`row * size + col`).
//! Coordinates: (row, col), both 0-based in `[0, size)`.
//! Valid sizes are `1..=MAX_MAP_SIZE`.
//!
//! A map is immutable once built. The constructors only decide what the
//! cells start out as.

use std::collections::BTreeMap;
use std::ops::Index;

use thiserror::Error;

use crate::types::{CellType, MAX_MAP_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} map")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("map must have at least one row")]
    Empty,
    #[error("map size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{0} is not a valid cell type id")]
    InvalidCellId(u32),
}

/// The game map - `size x size` cells using flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    size: usize,
    /// Row-major cells (row * size + col)
    cells: Vec<CellType>,
}

impl Map {
    /// Check that `size` is a valid edge length.
    pub fn check_size(size: usize) -> Result<(), MapError> {
        if size == 0 {
            return Err(MapError::Empty);
        }
        if size > MAX_MAP_SIZE {
            return Err(MapError::TooLarge {
                size,
                max: MAX_MAP_SIZE,
            });
        }
        Ok(())
    }

    /// Create a map of `size x size` floor cells.
    pub fn try_new(size: usize) -> Result<Self, MapError> {
        Self::check_size(size)?;
        Ok(Self {
            size,
            cells: vec![CellType::Floor; size * size],
        })
    }

    /// Create a map of `size x size` floor cells.
    ///
    /// Panics if `size` is 0 or above `MAX_MAP_SIZE`, like [`Map::from_rows`]
    /// rejects them. Use [`Map::try_new`] to get an error instead.
    pub fn new(size: usize) -> Self {
        Self::try_new(size).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a map whose cell at `(row, col)` is `f(row, col)`.
    ///
    /// Panics on the same sizes as [`Map::new`].
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> CellType) -> Self {
        if let Err(e) = Self::check_size(size) {
            panic!("{}", e);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Create a map from nested rows. Every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[CellType]>>(rows: &[R]) -> Result<Self, MapError> {
        let size = rows.len();
        Self::check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(MapError::NotSquare {
                    row,
                    len: r.len(),
                    expected: size,
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self { size, cells })
    }

    /// Create a map from numeric cell ids (see [`CellType::from_id`]).
    pub fn from_ids<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, MapError> {
        let converted = rows
            .iter()
            .map(|r| {
                r.as_ref()
                    .iter()
                    .map(|&id| CellType::from_id(id).ok_or(MapError::InvalidCellId(id)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&converted)
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Edge length of the map
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row_count(&self) -> usize {
        self.size
    }

    pub fn col_count(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Result<CellType, MapError> {
        self.offset(row, col)
            .map(|i| self.cells[i])
            .ok_or(MapError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
    }

    /// Iterate all cells as `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellType)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }

    /// Number of cells per cell type.
    pub fn census(&self) -> BTreeMap<CellType, usize> {
        let mut counts = BTreeMap::new();
        for &cell in &self.cells {
            *counts.entry(cell).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<(usize, usize)> for Map {
    type Output = CellType;

    /// Panics when `(row, col)` is out of bounds. Use [`Map::cell`] to get an error instead.
    fn index(&self, (row, col): (usize, usize)) -> &CellType {
        match self.offset(row, col) {
            Some(i) => &self.cells[i],
            None => panic!(
                "{}",
                MapError::OutOfBounds {
                    row,
                    col,
                    size: self.size
                }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_all_floor() {
        let map = Map::new(4);
        assert_eq!(map.row_count(), 4);
        assert_eq!(map.col_count(), 4);
        assert!(map.cells().all(|(_, _, c)| c == CellType::Floor));
        assert_eq!(map.cells().count(), 16);
    }

    #[test]
    fn cell_reports_bounds() {
        let map = Map::new(3);
        assert_eq!(
            map.cell(3, 0),
            Err(MapError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(map.cell(0, 3).is_err());
        assert_eq!(map.cell(2, 2), Ok(CellType::Floor));
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 map")]
    fn index_panics_out_of_bounds() {
        let map = Map::new(2);
        let _ = map[(0, 2)];
    }

    #[test]
    fn size_limits_are_checked() {
        assert_eq!(Map::try_new(0), Err(MapError::Empty));
        assert_eq!(
            Map::try_new(MAX_MAP_SIZE + 1),
            Err(MapError::TooLarge {
                size: MAX_MAP_SIZE + 1,
                max: MAX_MAP_SIZE
            })
        );
        assert!(Map::check_size(usize::MAX).is_err());
        assert_eq!(Map::try_new(MAX_MAP_SIZE).unwrap().size(), MAX_MAP_SIZE);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn new_rejects_zero_size() {
        let _ = Map::new(0);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn from_fn_rejects_oversized_map() {
        let _ = Map::from_fn(usize::MAX, |_, _| CellType::Floor);
    }

    #[test]
    fn from_fn_places_cells_row_major() {
        let map = Map::from_fn(3, |row, col| {
            if row == 0 && col == 2 {
                CellType::Water
            } else {
                CellType::Floor
            }
        });
        assert_eq!(map[(0, 2)], CellType::Water);
        assert_eq!(map[(2, 0)], CellType::Floor);
        let (row, col, _) = map.cells().nth(2).unwrap();
        assert_eq!((row, col), (0, 2));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![CellType::Floor, CellType::Wall],
            vec![CellType::Rock],
        ];
        assert_eq!(
            Map::from_rows(&rows),
            Err(MapError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_wide_rectangle() {
        let rows = [[CellType::Floor; 3]; 2];
        assert!(matches!(
            Map::from_rows(&rows),
            Err(MapError::NotSquare { row: 0, .. })
        ));
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<CellType>> = Vec::new();
        assert_eq!(Map::from_rows(&rows), Err(MapError::Empty));
    }

    #[test]
    fn from_ids_maps_custom_and_rejects_reserved() {
        let map = Map::from_ids(&[[0u32, 1], [4, 1000]]).unwrap();
        assert_eq!(map[(0, 1)], CellType::Clay);
        assert_eq!(map[(1, 0)], CellType::Water);
        assert_eq!(map[(1, 1)], CellType::Custom(1000));

        assert_eq!(
            Map::from_ids(&[[0u32, 7], [0, 0]]),
            Err(MapError::InvalidCellId(7))
        );
    }

    #[test]
    fn census_counts_each_type() {
        let map = Map::from_fn(2, |row, _| if row == 0 { CellType::Wall } else { CellType::Floor });
        let census = map.census();
        assert_eq!(census.get(&CellType::Wall), Some(&2));
        assert_eq!(census.get(&CellType::Floor), Some(&2));
        assert_eq!(census.get(&CellType::Rock), None);
    }
}
