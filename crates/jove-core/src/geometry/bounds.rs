// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

use super::ray::sorted;
use super::{Axis, Intersected, Intersection, Matrix, Normal, Point, Ray, Vector};
use crate::math::EPSILON;
use crate::GeometryError;

/// An axis-aligned box defined by its minimum and maximum corners.
///
/// The corners are private so that `min <= max` holds on every axis for any
/// `Bounds` value. A box with `min == max` on some axis is valid and flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    min: Point,
    max: Point,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: Point,
    max: Point,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = GeometryError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.min, raw.max)
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        RawBounds {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl Bounds {
    /// Creates a box from its extremes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBounds`] if `min` exceeds `max` on any
    /// axis, or either corner is NaN.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(min: Point, max: Point) -> Result<Self, GeometryError> {
        if !(min.x <= max.x && min.y <= max.y && min.z <= max.z) {
            return Err(GeometryError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// The box spanned by two opposite corners given in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A box around `centre`. Negative half-extents are made positive.
    #[inline]
    pub fn from_centre(centre: Point, half_extents: Vector) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: centre - half_extents,
            max: centre + half_extents,
        }
    }

    /// A zero-sized box at `point`.
    #[inline]
    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The smallest box enclosing every point, or `None` for no points.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut builder = BoundsBuilder::new();
        for point in points {
            builder.add(point);
        }
        builder.build()
    }

    /// The minimum corner.
    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    /// The maximum corner.
    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    /// The centre of the box.
    #[inline]
    pub fn centre(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Width, height and depth.
    #[inline]
    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    /// Half the size on each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        self.size() * 0.5
    }

    /// The largest of the three dimensions.
    #[inline]
    pub fn largest(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// The eight corners. Bit 0, 1 and 2 of the index select the maximum
    /// on X, Y and Z respectively.
    pub fn corners(&self) -> [Point; 8] {
        std::array::from_fn(|i| {
            Point::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Whether `point` lies inside or on the surface of the box.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (point.x >= self.min.x && point.x <= self.max.x)
            && (point.y >= self.min.y && point.y <= self.max.y)
            && (point.z >= self.min.z && point.z <= self.max.z)
    }

    /// Whether `other` lies entirely within this box.
    #[inline]
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Whether two boxes overlap. Touching faces count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
            && (self.min.z <= other.max.z && self.max.z >= other.min.z)
    }

    /// The smallest box enclosing both boxes.
    #[inline]
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The smallest box enclosing this box and `point`.
    #[inline]
    pub fn include(&self, point: Point) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// The point in or on the box nearest to `point`.
    #[inline]
    pub fn closest_point(&self, point: Point) -> Point {
        point.max(self.min).min(self.max)
    }

    /// Squared distance from `point` to the box; zero inside.
    #[inline]
    pub fn distance_squared(&self, point: Point) -> f32 {
        point.distance_squared(self.closest_point(point))
    }

    /// The box enclosing this box after an affine transform.
    ///
    /// Transforms the centre and projects the half-extents onto the absolute
    /// matrix columns, which avoids transforming all eight corners.
    pub fn transform(&self, m: &Matrix) -> Self {
        let centre = m.transform_point(self.centre());
        let e = self.half_extents();
        let abs_column = |col: usize| {
            let [x, y, z, _] = m.column(col);
            Vector::new(x.abs(), y.abs(), z.abs())
        };
        let half_extents = abs_column(0) * e.x + abs_column(1) * e.y + abs_column(2) * e.z;
        Self::from_centre(centre, half_extents)
    }
}

impl From<Point> for Bounds {
    fn from(point: Point) -> Self {
        Self::from_point(point)
    }
}

impl Intersected for Bounds {
    /// Slab test. A ray starting inside the box reports the exit only.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        let mut near = (f32::NEG_INFINITY, None::<Normal>);
        let mut far = (f32::INFINITY, None::<Normal>);

        for axis in Axis::ALL {
            let i = axis.index();
            let (origin, dir) = (ray.origin[i], ray.direction.vector()[i]);
            let (lo, hi) = (self.min[i], self.max[i]);

            if dir.abs() < EPSILON {
                if origin < lo || origin > hi {
                    return Vec::new();
                }
                continue;
            }

            let inv = 1.0 / dir;
            let (t_lo, t_hi) = ((lo - origin) * inv, (hi - origin) * inv);
            let n = axis.normal();
            let (entry, exit) = if dir > 0.0 {
                ((t_lo, n.invert()), (t_hi, n))
            } else {
                ((t_hi, n), (t_lo, n.invert()))
            };

            if entry.0 > near.0 {
                near = (entry.0, Some(entry.1));
            }
            if exit.0 < far.0 {
                far = (exit.0, Some(exit.1));
            }
            if near.0 > far.0 || far.0 < 0.0 {
                return Vec::new();
            }
        }

        let ((t_near, Some(near_normal)), (t_far, Some(far_normal))) = (near, far) else {
            return Vec::new();
        };

        let mut hits = Vec::with_capacity(2);
        if t_near >= 0.0 {
            hits.push(Intersection::on(ray, t_near, near_normal));
        }
        if t_far - t_near > EPSILON || t_near < 0.0 {
            hits.push(Intersection::on(ray, t_far, far_normal));
        }
        sorted(hits)
    }
}

// --- Builder ---

/// Accumulates points into the [`Bounds`] that enclose them.
#[derive(Debug, Clone, Default)]
pub struct BoundsBuilder {
    bounds: Option<Bounds>,
}

impl BoundsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the bounds to include `point`.
    pub fn add(&mut self, point: Point) -> &mut Self {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.include(point),
            None => Bounds::from_point(point),
        });
        self
    }

    /// The enclosing bounds, or `None` if no point was added.
    pub fn build(&self) -> Option<Bounds> {
        self.bounds
    }
}

impl Extend<Point> for BoundsBuilder {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for point in points {
            self.add(point);
        }
    }
}
