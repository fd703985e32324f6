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

//! Infinite planes in Hessian normal form.

use serde::{Deserialize, Serialize};

use super::ray::sorted;
use super::{Intersected, Intersection, Normal, Point, Ray, Tuple, Vector};
use crate::math::EPSILON;
use crate::GeometryError;

/// Which side of a [`Plane`] a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalfSpace {
    /// In front of the plane, on the side the normal points to.
    Positive,
    /// Behind the plane.
    Negative,
    /// On the plane, within [`EPSILON`].
    Intersect,
}

/// The set of points `p` satisfying `normal · p + distance = 0`.
///
/// `distance` is therefore the negated distance of the plane from the origin
/// along its normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// The unit normal.
    pub normal: Normal,
    /// The constant term of the plane equation.
    pub distance: f32,
}

impl Plane {
    /// Creates a plane from its normal and constant term.
    #[inline]
    pub fn new(normal: Normal, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// The plane through `point` with the given normal.
    #[inline]
    pub fn from_point_normal(point: Point, normal: Normal) -> Self {
        Self::new(normal, -normal.dot(Vector::from(point)))
    }

    /// The plane through three points.
    ///
    /// The normal follows the right-hand rule, so counter-clockwise points
    /// seen from the front give a normal facing the viewer.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTriangle`] if the points are
    /// collinear or coincident.
    pub fn triangle(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        let normal = Normal::new((b - a).cross(c - a))
            .map_err(|_| GeometryError::DegenerateTriangle)?;
        Ok(Self::from_point_normal(a, normal))
    }

    /// The plane `a·x + b·y + c·z + d = 0`, normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if `(a, b, c)` is zero.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Result<Self, GeometryError> {
        let v = Vector::new(a, b, c);
        let normal = Normal::new(v)?;
        Ok(Self::new(normal, d / v.magnitude()))
    }

    /// Signed distance from the plane to `point`; positive in front.
    #[inline]
    pub fn distance<T: Tuple>(&self, point: &T) -> f32 {
        Tuple::dot(&self.normal, point) + self.distance
    }

    /// Classifies `point` against the plane.
    pub fn side(&self, point: Point) -> HalfSpace {
        let d = self.distance(&point);
        if d > EPSILON {
            HalfSpace::Positive
        } else if d < -EPSILON {
            HalfSpace::Negative
        } else {
            HalfSpace::Intersect
        }
    }

    /// Whether `point` lies strictly in front of the plane.
    #[inline]
    pub fn is_in_front(&self, point: Point) -> bool {
        self.side(point) == HalfSpace::Positive
    }

    /// The point on the plane nearest to `point`.
    #[inline]
    pub fn project(&self, point: Point) -> Point {
        point - self.normal * self.distance(&point)
    }

    /// The point on the plane nearest to the origin.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::from(self.normal * -self.distance)
    }

    /// The same plane facing the other way.
    #[inline]
    pub fn invert(&self) -> Self {
        Self::new(self.normal.invert(), -self.distance)
    }
}

impl Intersected for Plane {
    /// A ray parallel to the plane never hits it, even if it lies in it.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        let denominator = self.normal.dot(ray.direction.vector());
        if denominator.abs() < EPSILON {
            return Vec::new();
        }
        let t = -self.distance(&ray.origin) / denominator;
        sorted(vec![Intersection::on(ray, t, self.normal)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn floor() -> Plane {
        // y = 1
        Plane::from_point_normal(Point::new(0.0, 1.0, 0.0), Axis::Y.normal())
    }

    #[test]
    fn test_from_point_normal() {
        let plane = floor();
        assert_relative_eq!(plane.distance, -1.0);
        assert_relative_eq!(plane.distance(&Point::new(5.0, 3.0, -2.0)), 2.0);
        assert_relative_eq!(plane.distance(&Point::ORIGIN), -1.0);
        assert_abs_diff_eq!(plane.origin(), Point::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_triangle_winding() {
        let plane = Plane::triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(plane.normal, Axis::Z.normal());
        assert_relative_eq!(plane.distance, 0.0);

        let flipped = Plane::triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(flipped.normal, Axis::Z.normal().invert());
    }

    #[test]
    fn test_triangle_degenerate() {
        let result = Plane::triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0),
        );
        assert_eq!(result, Err(GeometryError::DegenerateTriangle));
    }

    #[test]
    fn test_from_coefficients_normalizes() {
        let plane = Plane::from_coefficients(0.0, 0.0, 2.0, -4.0).unwrap();
        assert_abs_diff_eq!(plane.normal, Axis::Z.normal());
        assert_relative_eq!(plane.distance, -2.0);
        assert_eq!(
            Plane::from_coefficients(0.0, 0.0, 0.0, 1.0),
            Err(GeometryError::ZeroLength)
        );
    }

    #[test]
    fn test_side() {
        let plane = floor();
        assert_eq!(plane.side(Point::new(0.0, 2.0, 0.0)), HalfSpace::Positive);
        assert_eq!(plane.side(Point::new(0.0, -2.0, 0.0)), HalfSpace::Negative);
        assert_eq!(plane.side(Point::new(7.0, 1.0, 3.0)), HalfSpace::Intersect);
        assert!(plane.is_in_front(Point::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_project_and_invert() {
        let plane = floor();
        assert_abs_diff_eq!(
            plane.project(Point::new(3.0, 8.0, -1.0)),
            Point::new(3.0, 1.0, -1.0)
        );
        let inverted = plane.invert();
        assert_eq!(inverted.side(Point::new(0.0, 2.0, 0.0)), HalfSpace::Negative);
        assert_relative_eq!(inverted.distance(&Point::ORIGIN), 1.0);
    }

    #[test]
    fn test_ray_intersection() {
        let plane = floor();
        let ray = Ray::new(Point::new(2.0, 5.0, 0.0), Axis::Y.normal().invert());
        let hit = plane.first_intersection(&ray).unwrap();
        assert_relative_eq!(hit.distance, 4.0);
        assert_abs_diff_eq!(hit.point, Point::new(2.0, 1.0, 0.0));
        assert_eq!(hit.normal, plane.normal);
    }

    #[test]
    fn test_ray_miss() {
        let plane = floor();
        // Pointing away.
        let away = Ray::new(Point::new(0.0, 5.0, 0.0), Axis::Y.normal());
        assert!(plane.intersections(&away).is_empty());
        // Parallel.
        let parallel = Ray::new(Point::new(0.0, 5.0, 0.0), Axis::X.normal());
        assert!(!plane.is_hit_by(&parallel));
    }
}
