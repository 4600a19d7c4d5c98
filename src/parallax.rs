/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of the region the pointer moves over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Pointer position relative to the centre, in `-0.5..=0.5` per axis
    /// while the pointer is inside the region.
    fn relative(&self, pointer: Point) -> Point {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Point::default();
        }
        Point {
            x: (pointer.x - self.left) / self.width - 0.5,
            y: (pointer.y - self.top) / self.height - 0.5,
        }
    }
}

/// Translation applied to a parallax layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn to_transform(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

pub fn parallax_offset(pointer: Point, region: Region, speed: f64, scale: f64) -> Offset {
    let rel = region.relative(pointer);
    Offset {
        x: rel.x * scale * speed,
        y: rel.y * scale * speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARALLAX_SCALE;

    const HERO: Region = Region {
        left: 0.0,
        top: 0.0,
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn test_center_is_zero_for_any_speed() {
        for speed in [-0.2, 0.0, 0.05, 0.3, 0.6, 1.0, 12.5] {
            let offset = parallax_offset(HERO.center(), HERO, speed, PARALLAX_SCALE);
            assert_eq!(offset.x, 0.0);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn test_corner_scales_with_speed() {
        let top_left = Point { x: 0.0, y: 0.0 };
        let offset = parallax_offset(top_left, HERO, 0.5, PARALLAX_SCALE);
        assert_eq!(offset, Offset { x: -5.0, y: -5.0 });

        // negative speed moves against the pointer
        let bottom_right = Point { x: 1200.0, y: 800.0 };
        let offset = parallax_offset(bottom_right, HERO, -0.2, PARALLAX_SCALE);
        assert!((offset.x + 2.0).abs() < 1e-9);
        assert!((offset.y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_region() {
        let region = Region {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(region.center(), Point { x: 200.0, y: 100.0 });
        let offset = parallax_offset(region.center(), region, 1.0, PARALLAX_SCALE);
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn test_degenerate_region() {
        let offset = parallax_offset(Point { x: 10.0, y: 10.0 }, Region::default(), 1.0, 20.0);
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn test_transform() {
        let offset = Offset { x: -2.5, y: 4.0 };
        assert_eq!(offset.to_transform(), "translate(-2.5px, 4px)");
    }
}
