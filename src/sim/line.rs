//! Line segments and segment/segment intersection
//!
//! Every segment is either a ball trajectory or an axis-aligned rectangle
//! edge, so the routines below favour exact answers for those shapes:
//! - vertical segments are detected with `EPSILON` and never get a slope
//! - crossing points are validated against both finite segments
//! - colinear overlaps resolve to a single representative point

use super::point::Point;
use super::rectangle::Rectangle;
use crate::{approx_eq, ranges_overlap, within_range};

/// A segment from `start` to `end`
#[derive(Debug, Clone, Copy)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Both endpoints share an x coordinate (zero-length segments included)
    #[inline]
    pub fn is_vertical(&self) -> bool {
        approx_eq(self.start.x, self.end.x)
    }

    /// Slope of the segment, `None` when vertical
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some((self.end.y - self.start.y) / (self.end.x - self.start.x))
        }
    }

    /// `(m, b)` of the infinite line `y = m·x + b`, `None` when vertical
    fn slope_intercept(&self) -> Option<(f64, f64)> {
        let m = self.slope()?;
        Some((m, self.start.y - m * self.start.x))
    }

    /// Axis-aligned bounding ranges of both segments overlap on x and on y
    fn bounds_overlap(&self, other: &Line) -> bool {
        ranges_overlap(self.start.x, self.end.x, other.start.x, other.end.x)
            && ranges_overlap(self.start.y, self.end.y, other.start.y, other.end.y)
    }

    /// Whether `point` lies on this finite segment (within `EPSILON`)
    pub fn on_segment(&self, point: Point) -> bool {
        match self.slope_intercept() {
            None => {
                approx_eq(point.x, self.start.x)
                    && within_range(point.y, self.start.y, self.end.y)
            }
            Some((m, b)) => {
                within_range(point.x, self.start.x, self.end.x) && approx_eq(m * point.x + b, point.y)
            }
        }
    }

    /// Whether the two segments touch
    ///
    /// - identical segments always intersect
    /// - if either is vertical, overlapping bounding ranges on both axes count as a hit
    /// - equal slopes intersect only when colinear with overlapping ranges
    /// - differing slopes intersect when the crossing lies on both segments
    pub fn intersects(&self, other: &Line) -> bool {
        if self == other {
            return true;
        }

        match (self.slope_intercept(), other.slope_intercept()) {
            (Some((m1, b1)), Some((m2, b2))) => {
                if approx_eq(m1, m2) {
                    approx_eq(b1, b2) && self.bounds_overlap(other)
                } else {
                    let p = crossing((m1, b1), (m2, b2));
                    self.on_segment(p) && other.on_segment(p)
                }
            }
            _ => self.bounds_overlap(other),
        }
    }

    /// The point where the two segments meet, if there is a single one to report
    ///
    /// Identical non-degenerate segments share infinitely many points and
    /// return `None`. Colinear overlaps (including two vertical segments)
    /// return one representative point, see `colinear_representative`.
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        if self == other && self.start != self.end {
            return None;
        }
        if !self.intersects(other) {
            return None;
        }

        let candidate = match (self.slope_intercept(), other.slope_intercept()) {
            (Some(a), Some(b)) => {
                if approx_eq(a.0, b.0) {
                    return Some(self.colinear_representative(other));
                }
                // `intersects` already placed the crossing on both segments
                return Some(crossing(a, b));
            }
            (Some((m, b)), None) => Point::new(other.start.x, m * other.start.x + b),
            (None, Some((m, b))) => Point::new(self.start.x, m * self.start.x + b),
            (None, None) => return Some(self.colinear_representative(other)),
        };

        // A vertical segment only passed the bounding-range test; confirm the
        // crossing really lies on both segments
        (self.on_segment(candidate) && other.on_segment(candidate)).then_some(candidate)
    }

    /// One point inside the overlap of two colinear segments.
    ///
    /// Each axis is resolved on its own: an endpoint of `self` that falls in
    /// `other`'s range is chosen (the one nearer `other`'s start when both do);
    /// otherwise `other`'s start coordinate is used. This is not the full
    /// overlap interval, only the representative the collision scan relies on.
    fn colinear_representative(&self, other: &Line) -> Point {
        Point::new(
            pick_in_range(self.start.x, self.end.x, other.start.x, other.end.x),
            pick_in_range(self.start.y, self.end.y, other.start.y, other.end.y),
        )
    }

    /// Nearest point (to `start`) where this segment meets the rectangle's edges
    pub fn closest_intersection(&self, rect: &Rectangle) -> Option<Point> {
        let mut closest: Option<(Point, f64)> = None;
        for p in rect.intersection_points(self) {
            let d = self.start.distance(p);
            // Strict comparison keeps the first edge on ties
            if closest.is_none_or(|(_, best)| d < best) {
                closest = Some((p, d));
            }
        }
        closest.map(|(p, _)| p)
    }
}

/// Undirected equality: `(a, b) == (b, a)`
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// Crossing of two non-parallel lines given as `(m, b)`.
///
/// y is always evaluated on the line with the smaller `(|m|, m)` so that
/// swapping the arguments yields a bit-identical point.
fn crossing(l1: (f64, f64), l2: (f64, f64)) -> Point {
    let (m1, b1) = l1;
    let (m2, b2) = l2;
    let x = (b2 - b1) / (m1 - m2);
    let flat_first = (m1.abs(), m1) <= (m2.abs(), m2);
    let y = if flat_first { m1 * x + b1 } else { m2 * x + b2 };
    Point::new(x, y)
}

/// Choose a coordinate of `[a1, a2]` that lies in `[b1, b2]`.
///
/// Only an ascending `b1 < b2` range is searched; a descending or degenerate
/// range resolves to `b1`, as does the case where neither endpoint fits.
fn pick_in_range(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    if b1 < b2 {
        let first_in = within_range(a1, b1, b2);
        let second_in = within_range(a2, b1, b2);
        match (first_in, second_in) {
            (true, true) => {
                if (b1 - a1).abs() < (b1 - a2).abs() {
                    return a1;
                }
                return a2;
            }
            (true, false) => return a1,
            (false, true) => return a2,
            (false, false) => {}
        }
    }
    b1
}
