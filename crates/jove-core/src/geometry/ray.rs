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

//! Rays and the [`Intersected`] trait for ray casting.

use serde::{Deserialize, Serialize};

use super::{Matrix, Normal, Point, Vector};
use crate::GeometryError;

/// A half-line from `origin` along a unit `direction`.
///
/// Because the direction is a [`Normal`], the parameter `t` passed to
/// [`Ray::point`] is the Euclidean distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// The start of the ray.
    pub origin: Point,
    /// The unit direction of the ray.
    pub direction: Normal,
}

impl Ray {
    /// Creates a ray.
    #[inline]
    pub fn new(origin: Point, direction: Normal) -> Self {
        Self { origin, direction }
    }

    /// A ray from `origin` through `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if the two points coincide.
    pub fn towards(origin: Point, target: Point) -> Result<Self, GeometryError> {
        Ok(Self::new(origin, Normal::new(target - origin)?))
    }

    /// The point at distance `t` along the ray.
    #[inline]
    pub fn point(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }

    /// Transforms the ray by an affine matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if the matrix collapses the
    /// direction.
    pub fn transform(&self, m: &Matrix) -> Result<Self, GeometryError> {
        let direction: Vector = m.transform_vector(self.direction.vector());
        Ok(Self::new(m.transform_point(self.origin), Normal::new(direction)?))
    }
}

/// A point where a ray crosses the surface of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Distance along the ray.
    pub distance: f32,
    /// The intersection point.
    pub point: Point,
    /// The surface normal at the intersection.
    pub normal: Normal,
}

impl Intersection {
    /// Creates an intersection at `distance` along `ray`.
    #[inline]
    pub fn on(ray: &Ray, distance: f32, normal: Normal) -> Self {
        Self {
            distance,
            point: ray.point(distance),
            normal,
        }
    }
}

/// A shape that can be tested against a [`Ray`].
pub trait Intersected {
    /// All intersections of `ray` with this shape's surface.
    ///
    /// Implementations return hits at non-negative distances only, in
    /// ascending order of distance.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection>;

    /// The nearest intersection, if any.
    fn first_intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.intersections(ray).into_iter().next()
    }

    /// Whether the ray hits this shape at all.
    fn is_hit_by(&self, ray: &Ray) -> bool {
        self.first_intersection(ray).is_some()
    }
}

impl<T: Intersected> Intersected for [T] {
    /// Intersections with every shape in the slice, merged in distance order.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        sorted(self.iter().flat_map(|shape| shape.intersections(ray)).collect())
    }
}

/// Drops hits behind the ray origin and orders the rest by distance.
pub(crate) fn sorted(mut hits: Vec<Intersection>) -> Vec<Intersection> {
    hits.retain(|hit| hit.distance >= 0.0);
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
