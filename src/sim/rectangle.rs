//! Axis-aligned rectangles with precomputed edges

use super::line::Line;
use super::point::Point;

/// An axis-aligned box. Immutable: moving one means building a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    upper_left: Point,
    width: f64,
    height: f64,
    top: Line,
    bottom: Line,
    left: Line,
    right: Line,
}

impl Rectangle {
    pub fn new(upper_left: Point, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rectangle must have positive size");

        let upper_right = upper_left.offset(width, 0.0);
        let bottom_left = upper_left.offset(0.0, height);
        let bottom_right = upper_left.offset(width, height);

        Self {
            upper_left,
            width,
            height,
            top: Line::new(upper_left, upper_right),
            bottom: Line::new(bottom_left, bottom_right),
            left: Line::new(upper_left, bottom_left),
            right: Line::new(upper_right, bottom_right),
        }
    }

    #[inline]
    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top(&self) -> &Line {
        &self.top
    }

    pub fn bottom(&self) -> &Line {
        &self.bottom
    }

    pub fn left(&self) -> &Line {
        &self.left
    }

    pub fn right(&self) -> &Line {
        &self.right
    }

    /// Edges in scan order: top, left, right, bottom
    pub fn edges(&self) -> [&Line; 4] {
        [&self.top, &self.left, &self.right, &self.bottom]
    }

    /// Every point where `line` meets an edge, in edge scan order
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        self.edges()
            .into_iter()
            .filter_map(|edge| line.intersection_point(edge))
            .collect()
    }

    /// Inclusive containment test (points on an edge count as inside)
    pub fn contains(&self, p: Point) -> bool {
        let Point { x, y } = self.upper_left;
        p.x >= x && p.x <= x + self.width && p.y >= y && p.y <= y + self.height
    }

    /// A copy of this rectangle shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.upper_left.offset(dx, dy), self.width, self.height)
    }

    /// A copy of this rectangle with its upper-left corner at `upper_left`
    pub fn moved_to(&self, upper_left: Point) -> Self {
        Self::new(upper_left, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges_bound_the_rectangle() {
        let r = Rectangle::new(Point::new(10.0, 20.0), 30.0, 40.0);
        assert_eq!(*r.top(), Line::from_coords(10.0, 20.0, 40.0, 20.0));
        assert_eq!(*r.bottom(), Line::from_coords(10.0, 60.0, 40.0, 60.0));
        assert_eq!(*r.left(), Line::from_coords(10.0, 20.0, 10.0, 60.0));
        assert_eq!(*r.right(), Line::from_coords(40.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_intersection_points_through() {
        let r = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let line = Line::from_coords(5.0, -5.0, 5.0, 15.0);
        let points = r.intersection_points(&line);
        assert_eq!(points, vec![Point::new(5.0, 0.0), Point::new(5.0, 10.0)]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(r.contains(Point::new(0.0, 10.0)));
        assert!(!r.contains(Point::new(10.01, 5.0)));
    }

    #[test]
    fn test_translated_builds_new_edges() {
        let r = Rectangle::new(Point::new(0.0, 0.0), 10.0, 5.0);
        let moved = r.translated(3.0, -1.0);
        assert_eq!(moved.upper_left(), Point::new(3.0, -1.0));
        assert_eq!(*moved.right(), Line::from_coords(13.0, -1.0, 13.0, 4.0));
        // Original untouched
        assert_eq!(r.upper_left(), Point::new(0.0, 0.0));
        assert_eq!(r.moved_to(Point::new(3.0, -1.0)), moved);
    }

    proptest! {
        #[test]
        fn prop_segments_outside_bounds_miss(
            x in -500.0..500.0f64,
            y in -500.0..500.0f64,
            w in 1.0..200.0f64,
            h in 1.0..200.0f64,
            dx in -300.0..300.0f64,
            dy in -300.0..300.0f64,
            len in 0.0..50.0f64,
        ) {
            let r = Rectangle::new(Point::new(x, y), w, h);
            // Segment entirely to the right of the rectangle
            let start = Point::new(x + w + 1.0 + len, y + dy);
            let end = Point::new(start.x + dx.abs(), start.y + dx);
            prop_assert_eq!(Line::new(start, end).closest_intersection(&r), None);

            // Segment entirely above the rectangle
            let start = Point::new(x + dx, y - 1.0 - len);
            let end = Point::new(start.x + dy, start.y - dy.abs());
            prop_assert_eq!(Line::new(start, end).closest_intersection(&r), None);
        }
    }
}
