use nalgebra::Vector2;

/// An axis aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rectangle {
    /// Create a rectangle from its top left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `point` lies inside. The right and bottom edges are exclusive.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

impl From<Rectangle> for vello::kurbo::Rect {
    fn from(rect: Rectangle) -> Self {
        vello::kurbo::Rect::new(
            rect.x as f64,
            rect.y as f64,
            (rect.x + rect.width) as f64,
            (rect.y + rect.height) as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vector2::new(10.0, 20.0)));
        assert!(rect.contains(Vector2::new(39.9, 59.9)));
        assert!(!rect.contains(Vector2::new(40.0, 30.0)));
        assert!(!rect.contains(Vector2::new(20.0, 60.0)));
        assert!(!rect.contains(Vector2::new(9.0, 30.0)));
    }

    #[test]
    fn zero_sized_contains_nothing() {
        let rect = Rectangle::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains(Vector2::new(5.0, 5.0)));
    }

    #[test]
    fn kurbo_conversion_uses_corners() {
        let rect: vello::kurbo::Rect = Rectangle::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (1.0, 2.0, 4.0, 6.0));
    }
}
