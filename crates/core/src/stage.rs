//! Built-in demo stage.
//!
//! A symmetric layout in the spirit of a BattleCity stage: rock corners, brick
//! pillars, a river through the middle and clay around the base at the
//! bottom centre. Works for any size; small maps just get fewer features.

use crate::map::Map;
use crate::types::CellType;

/// Build the demo stage for a `size x size` map.
pub fn demo_stage(size: usize) -> Map {
    Map::from_fn(size, |row, col| demo_cell(size, row, col))
}

fn demo_cell(size: usize, row: usize, col: usize) -> CellType {
    if size < 5 {
        return CellType::Floor;
    }

    let mid = size / 2;
    let last = size - 1;
    // Mirror columns so the stage is left/right symmetric.
    let c = col.min(last - col);

    // Base: the eagle sits at row 0 (bottom), surrounded by clay.
    if row <= 1 && col.abs_diff(mid) <= 1 {
        return if row == 0 && col == mid {
            CellType::Rock
        } else {
            CellType::Clay
        };
    }

    // River across the middle with a ford in the centre.
    if row == mid && c >= 1 && col != mid {
        return CellType::Water;
    }

    // Rock blocks in the top corners.
    if row == last && c == 0 {
        return CellType::Rock;
    }

    // Brick pillars on every other column, broken around the river.
    if c % 2 == 1 && row >= 2 && row < last && row.abs_diff(mid) > 1 {
        return CellType::Wall;
    }

    CellType::Floor
}
