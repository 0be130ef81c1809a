//! Viewport-relative bounding rectangles
//!
//! Only the vertical extent matters to the controller; horizontal scrolling
//! is out of scope. Container and item bounds must share one coordinate
//! space.

/// Vertical extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True if `other` lies fully inside this extent.
    pub fn contains(&self, other: Bounds) -> bool {
        other.top >= self.top && other.bottom <= self.bottom
    }

    /// This extent shifted down by `dy` (up when negative).
    pub fn translated(&self, dy: f32) -> Self {
        Self::new(self.top + dy, self.bottom + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height() {
        assert_eq!(Bounds::new(10.0, 50.0).height(), 40.0);
    }

    #[test]
    fn test_contains() {
        let viewport = Bounds::new(0.0, 400.0);
        assert!(viewport.contains(Bounds::new(0.0, 400.0)));
        assert!(viewport.contains(Bounds::new(100.0, 140.0)));
        assert!(!viewport.contains(Bounds::new(-10.0, 30.0)));
        assert!(!viewport.contains(Bounds::new(390.0, 430.0)));
    }

    #[test]
    fn test_translated() {
        let b = Bounds::new(100.0, 140.0).translated(-120.0);
        assert_eq!(b, Bounds::new(-20.0, 20.0));
    }
}
