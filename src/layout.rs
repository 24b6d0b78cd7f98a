//! Complete-binary-tree placement of array indices on a fixed canvas.
//!
//! The canvas is split into a grid of `2^H` columns and `H + 1` rows, where
//! `H` is the height of the tree holding `count` nodes. The y axis grows
//! upwards, so the root sits on the highest occupied row.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(&self, target: &Point, fraction: f32) -> Point {
        Point {
            x: self.x + (target.x - self.x) * fraction,
            y: self.y + (target.y - self.y) * fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// `floor(log2(n)) + 1` for `n >= 1`.
fn levels(n: usize) -> u32 {
    usize::BITS - n.leading_zeros()
}

/// Height of a tree holding `count` nodes. `count` must be non-zero.
pub fn tree_height(count: usize) -> u32 {
    debug_assert!(count > 0);
    levels(count)
}

/// 1-based level of `index`, the root being on level 1.
pub fn node_height(index: usize) -> u32 {
    levels(index + 1)
}

/// Position of `index` among the nodes of its own level, starting at 0.
pub fn rank_in_level(index: usize) -> usize {
    index + 1 - (1 << (node_height(index) - 1))
}

/// Maps `index` of a `count`-node tree to its slot on `canvas`.
///
/// Every node on level `h` lands on grid row `H - h`: leaves on row 0, the
/// root on row `H - 1`. Columns follow `2^(H-h) + r * 2^(H-h-1)`, which
/// yields half-column offsets on the leaf level.
pub fn position(index: usize, count: usize, canvas: Size) -> Point {
    let tree_h = tree_height(count) as i32;
    let h = node_height(index) as i32;
    let r = rank_in_level(index) as f32;

    let columns = 2f32.powi(tree_h);
    let cell_width = canvas.width / columns;
    let cell_height = canvas.height / (tree_h + 1) as f32;

    // Leaves sit on row 0; `H - h - 1` would push them below the canvas.
    let grid_row = (tree_h - h) as f32;
    let grid_col = 2f32.powi(tree_h - h) + r * 2f32.powi(tree_h - h - 1);

    Point::new(cell_width * grid_col, cell_height * grid_row)
}
