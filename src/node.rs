use crate::layout::Point;

/// Stable identity of a node for the rendering surface. Ids are never
/// reused by a store, even after it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Color::Black => [0.0, 0.0, 0.0, 1.0],
            Color::White => [1.0, 1.0, 1.0, 1.0],
        }
    }

    fn complement(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Foreground/background pair of a node. The two fields are private so the
/// pair can only ever be one of the two complementary combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    foreground: Color,
    background: Color,
}

impl ColorPair {
    /// Black text on white.
    pub const NORMAL: ColorPair = ColorPair {
        foreground: Color::Black,
        background: Color::White,
    };
    /// White text on black.
    pub const HIGHLIGHTED: ColorPair = ColorPair {
        foreground: Color::White,
        background: Color::Black,
    };

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn inverted(&self) -> ColorPair {
        ColorPair {
            foreground: self.foreground.complement(),
            background: self.background.complement(),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        *self == ColorPair::HIGHLIGHTED
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair::NORMAL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeapNode {
    id: NodeId,
    value: i64,
    pub current: Point,
    pub target: Point,
    pub colors: ColorPair,
}

impl HeapNode {
    pub fn new(id: NodeId, value: i64, slot: Point) -> Self {
        Self {
            id,
            value,
            current: slot,
            target: slot,
            colors: ColorPair::NORMAL,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Snaps the node onto `slot` without any transition.
    pub fn place(&mut self, slot: Point) {
        self.current = slot;
        self.target = slot;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_pair_is_complementary() {
        assert_eq!(ColorPair::NORMAL.inverted(), ColorPair::HIGHLIGHTED);
        assert_eq!(ColorPair::HIGHLIGHTED.inverted(), ColorPair::NORMAL);
        let pair = ColorPair::default();
        assert_ne!(pair.foreground(), pair.background());
        assert_eq!(Color::White.rgba(), [1.0; 4]);
    }

    #[test]
    fn test_place_settles() {
        let mut node = HeapNode::new(NodeId(3), -4, Point::new(1.0, 2.0));
        node.current = Point::new(5.0, 5.0);
        assert!(!node.is_settled());
        node.place(Point::new(7.0, 8.0));
        assert!(node.is_settled());
        assert_eq!(node.value(), -4);
        assert_eq!(node.colors, ColorPair::NORMAL);
    }
}
