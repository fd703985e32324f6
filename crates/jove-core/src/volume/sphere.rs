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

//! Bounding spheres.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Intersected, Intersection, Normal, Point, Ray, Vector};
use crate::math::EPSILON;
use crate::GeometryError;

/// A sphere with a non-negative, finite radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSphere", into = "RawSphere")]
pub struct Sphere {
    centre: Point,
    radius: f32,
}

#[derive(Serialize, Deserialize)]
struct RawSphere {
    centre: Point,
    radius: f32,
}

impl TryFrom<RawSphere> for Sphere {
    type Error = GeometryError;

    fn try_from(raw: RawSphere) -> Result<Self, Self::Error> {
        Sphere::new(raw.centre, raw.radius)
    }
}

impl From<Sphere> for RawSphere {
    fn from(sphere: Sphere) -> Self {
        RawSphere {
            centre: sphere.centre,
            radius: sphere.radius,
        }
    }
}

impl Sphere {
    /// Creates a sphere.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative, NaN
    /// or infinite.
    pub fn new(centre: Point, radius: f32) -> Result<Self, GeometryError> {
        if radius >= 0.0 && radius.is_finite() {
            Ok(Self { centre, radius })
        } else {
            Err(GeometryError::NegativeRadius(radius))
        }
    }

    /// The smallest sphere centred on `bounds` that encloses it.
    pub fn enclosing(bounds: &Bounds) -> Self {
        Self {
            centre: bounds.centre(),
            radius: bounds.half_extents().magnitude(),
        }
    }

    /// The centre of the sphere.
    #[inline]
    pub fn centre(&self) -> Point {
        self.centre
    }

    /// The radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The axis-aligned box enclosing the sphere.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_centre(self.centre, Vector::new(self.radius, self.radius, self.radius))
    }

    /// Whether `point` lies inside or on the sphere.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.centre.distance_squared(point) <= self.radius * self.radius
    }

    /// Whether two spheres overlap. Touching spheres count as overlapping.
    #[inline]
    pub fn intersects_sphere(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        self.centre.distance_squared(other.centre) <= reach * reach
    }

    /// Whether the sphere overlaps an axis-aligned box.
    #[inline]
    pub fn intersects_bounds(&self, bounds: &Bounds) -> bool {
        bounds.distance_squared(self.centre) <= self.radius * self.radius
    }

    fn hit(&self, ray: &Ray, t: f32) -> Option<Intersection> {
        let point = ray.point(t);
        match Normal::new(point - self.centre) {
            Ok(normal) => Some(Intersection::on(ray, t, normal)),
            Err(_) => {
                log::trace!("Skipping ray hit on zero-radius sphere at {:?}", self.centre);
                None
            }
        }
    }
}

impl Intersected for Sphere {
    /// Solves `|o + td - c|² = r²` for the unit direction `d`.
    ///
    /// A tangent ray yields a single hit and a ray starting inside the sphere
    /// yields the exit only.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        let oc = ray.origin - self.centre;
        let b = oc.dot(ray.direction.vector());
        let c = oc.magnitude_squared() - self.radius * self.radius;
        let discriminant = b * b - c;

        if discriminant < 0.0 {
            return Vec::new();
        }

        // Tangent band scales with the sphere so tiny spheres still get two roots.
        let candidates = if discriminant <= EPSILON * self.radius * self.radius {
            vec![-b]
        } else {
            let root = discriminant.sqrt();
            vec![-b - root, -b + root]
        };

        candidates
            .into_iter()
            .filter(|&t| t >= 0.0)
            .filter_map(|t| self.hit(ray, t))
            .collect()
    }
}
