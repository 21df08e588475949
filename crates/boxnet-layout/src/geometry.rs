//! Plane geometry for the net.
//!
//! Screen-style coordinates: origin top-left, y grows downward. A positive
//! quarter turn is clockwise as seen on screen.

use nalgebra::{Matrix2, Point2, Vector2};
use serde::{Deserialize, Serialize};

pub type Point = Point2<f64>;

/// One side of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.start, &self.end)
    }

    /// True when both segments have the same endpoints, in either direction.
    pub fn coincides_with(&self, other: &Segment, tolerance: f64) -> bool {
        let close = |a: &Point, b: &Point| nalgebra::distance(a, b) <= tolerance;
        (close(&self.start, &other.start) && close(&self.end, &other.end))
            || (close(&self.start, &other.end) && close(&self.end, &other.start))
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rectangle size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point, or `None` for no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    pub fn edge(&self, edge: Edge) -> Segment {
        let [top_left, top_right, bottom_right, bottom_left] = self.corners();
        match edge {
            Edge::Top => Segment::new(top_left, top_right),
            Edge::Bottom => Segment::new(bottom_left, bottom_right),
            Edge::Left => Segment::new(top_left, bottom_left),
            Edge::Right => Segment::new(top_right, bottom_right),
        }
    }

    /// Area shared with `other`; zero when they only touch along an edge.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }

    /// The boundary segment two non-overlapping rectangles have in common.
    pub fn shared_edge(&self, other: &Rect, tolerance: f64) -> Option<Segment> {
        let near = |a: f64, b: f64| (a - b).abs() <= tolerance;

        let horizontal = |y: f64| {
            let start = self.left().max(other.left());
            let end = self.right().min(other.right());
            (end - start > tolerance)
                .then(|| Segment::new(Point::new(start, y), Point::new(end, y)))
        };
        let vertical = |x: f64| {
            let start = self.top().max(other.top());
            let end = self.bottom().min(other.bottom());
            (end - start > tolerance)
                .then(|| Segment::new(Point::new(x, start), Point::new(x, end)))
        };

        if near(self.bottom(), other.top()) {
            horizontal(self.bottom())
        } else if near(self.top(), other.bottom()) {
            horizontal(self.top())
        } else if near(self.right(), other.left()) {
            vertical(self.right())
        } else if near(self.left(), other.right()) {
            vertical(self.left())
        } else {
            None
        }
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Grows (or with a negative amount, shrinks) every side by `amount`,
    /// never below zero size.
    pub fn expanded(&self, amount: f64) -> Rect {
        let width = (self.width + 2.0 * amount).max(0.0);
        let height = (self.height + 2.0 * amount).max(0.0);
        let center = self.center();
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// A rotation by a multiple of 90 degrees.
///
/// The matrices are exact, so quarter turns never introduce rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarterTurn {
    None,
    Clockwise,
    Half,
    CounterClockwise,
}

impl QuarterTurn {
    /// Signed angle in degrees: 0, 90, 180 or -90.
    pub fn degrees(self) -> i32 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::Clockwise => 90,
            QuarterTurn::Half => 180,
            QuarterTurn::CounterClockwise => -90,
        }
    }

    pub fn matrix(self) -> Matrix2<f64> {
        match self {
            QuarterTurn::None => Matrix2::identity(),
            QuarterTurn::Clockwise => Matrix2::new(0.0, -1.0, 1.0, 0.0),
            QuarterTurn::Half => Matrix2::new(-1.0, 0.0, 0.0, -1.0),
            QuarterTurn::CounterClockwise => Matrix2::new(0.0, 1.0, -1.0, 0.0),
        }
    }

    pub fn rotate_about(self, point: &Point, center: &Point) -> Point {
        center + self.matrix() * (point - center)
    }
}

/// A four-sided outline.
///
/// Points are ordered base start, tip start, tip end, base end, so the base
/// edge is always `points[0]`..`points[3]` however the outline is moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    points: [Point; 4],
}

impl Quad {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn base(&self) -> Segment {
        Segment::new(self.points[0], self.points[3])
    }

    pub fn tip(&self) -> Segment {
        Segment::new(self.points[1], self.points[2])
    }

    pub fn bounds(&self) -> Rect {
        // Four points are always present.
        Rect::from_points(&self.points).unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Enclosed area (shoelace formula).
    pub fn area(&self) -> f64 {
        let p = &self.points;
        let twice: f64 = (0..4)
            .map(|i| {
                let a = p[i];
                let b = p[(i + 1) % 4];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    pub fn translated(&self, offset: &Vector2<f64>) -> Quad {
        Quad::new(self.points.map(|p| p + offset))
    }

    pub fn rotated_about(&self, center: &Point, turn: QuarterTurn) -> Quad {
        Quad::new(self.points.map(|p| turn.rotate_about(&p, center)))
    }
}
