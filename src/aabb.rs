//! Axis-aligned bounding boxes

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing `points`; degenerate at the origin when `points` is empty.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Point3::origin(), Point3::origin());
        };
        let mut aabb = Self::new(*first, *first);
        for p in &points[1..] {
            aabb.grow(p);
        }
        aabb
    }

    /// Expand the box to contain `p`.
    pub fn grow(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// Smallest box containing `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Self) -> Self {
        Self::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        Point3::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
            (self.mins.z + self.maxs.z) / 2.0,
        )
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// Index of the axis along which the box is widest.
    pub fn longest_axis(&self) -> usize {
        let e = self.extents();
        if e.x >= e.y && e.x >= e.z {
            0
        } else if e.y >= e.z {
            1
        } else {
            2
        }
    }

    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        p.x >= self.mins.x
            && p.x <= self.maxs.x
            && p.y >= self.mins.y
            && p.y <= self.maxs.y
            && p.z >= self.mins.z
            && p.z <= self.maxs.z
    }

    /// Squared distance from `p` to the box; zero when `p` is inside.
    pub fn distance_squared(&self, p: &Point3<Real>) -> Real {
        let mut d2 = 0.0;
        for axis in 0..3 {
            if p[axis] < self.mins[axis] {
                let d = self.mins[axis] - p[axis];
                d2 += d * d;
            } else if p[axis] > self.maxs[axis] {
                let d = p[axis] - self.maxs[axis];
                d2 += d * d;
            }
        }
        d2
    }
}
