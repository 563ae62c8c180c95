//=========================================================================
// Geometry
//=========================================================================
//
// Integer screen-space primitives shared by every subsystem.
//
// Coordinates are in buffer pixels with a top-left origin. Rectangles
// use half-open containment so adjacent rectangles never both claim the
// same pixel.
//
//=========================================================================

//=== Position ============================================================

/// A point in buffer pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `dx`, `dy`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

//=== Size ================================================================

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Multiplies both dimensions by `factor`, truncating to whole pixels.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            width: (self.width as f32 * factor) as u32,
            height: (self.height as f32 * factor) as u32,
        }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rectangle of `size` centered on `center`.
    ///
    /// Odd sizes bias the extra pixel to the right/bottom edge.
    pub const fn from_center(center: Position, size: Size) -> Self {
        Self {
            x: center.x - (size.width / 2) as i32,
            y: center.y - (size.height / 2) as i32,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn center(&self) -> Position {
        Position::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// Half-open containment test: `x <= p.x < right`, `y <= p.y < bottom`.
    pub const fn contains(&self, point: Position) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_center_even_size() {
        let rect = Rect::from_center(Position::new(100, 50), Size::new(40, 20));
        assert_eq!(rect, Rect::new(80, 40, 40, 20));
        assert_eq!(rect.center(), Position::new(100, 50));
    }

    #[test]
    fn rect_from_center_odd_size() {
        let rect = Rect::from_center(Position::new(10, 10), Size::new(5, 3));
        assert_eq!(rect.origin(), Position::new(8, 9));
        assert_eq!(rect.right(), 13);
        assert_eq!(rect.bottom(), 12);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);

        assert!(rect.contains(Position::new(0, 0)));
        assert!(rect.contains(Position::new(9, 9)));
        assert!(!rect.contains(Position::new(10, 5)), "Right edge is exclusive");
        assert!(!rect.contains(Position::new(5, 10)), "Bottom edge is exclusive");
        assert!(!rect.contains(Position::new(-1, 5)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(5, 5, 0, 0);
        assert!(!rect.contains(Position::new(5, 5)));
    }

    #[test]
    fn size_scaled_truncates() {
        assert_eq!(Size::new(235, 99).scaled(1.1), Size::new(258, 108));
        assert_eq!(Size::new(100, 50).scaled(1.1), Size::new(110, 55));
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }
}
