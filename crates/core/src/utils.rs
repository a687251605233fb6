//! Geometry helpers shared by the layout model.

/// A rectangle (x0, y0, x1, y1) in page space, origin bottom-left.
pub type Rect = (f64, f64, f64, f64);

/// Returns true when `value` lies strictly between `low` and `high`.
#[inline]
pub fn strictly_between(low: f64, value: f64, high: f64) -> bool {
    low < value && value < high
}

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_bands_exclude_endpoints() {
        assert!(strictly_between(7.0, 8.5, 10.0));
        assert!(!strictly_between(7.0, 7.0, 10.0));
        assert!(!strictly_between(7.0, 10.0, 10.0));
    }

    #[test]
    fn rect_bbox_accessors() {
        let r: Rect = (1.0, 2.0, 11.0, 14.0);
        assert_eq!((r.x0(), r.y1()), (1.0, 14.0));
        assert_eq!(r.bbox(), r);
    }
}
