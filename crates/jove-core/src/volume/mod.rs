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

//! Bounding volumes used for containment, overlap and culling tests.

pub mod frustum;
pub mod sphere;

pub use self::frustum::Frustum;
pub use self::sphere::Sphere;

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Intersected, Intersection, Point, Ray};

/// A closed region of space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Volume {
    /// Contains nothing and intersects nothing.
    #[default]
    Empty,
    /// Contains everything.
    Infinite,
    /// An axis-aligned box.
    Box(Bounds),
    /// A sphere.
    Sphere(Sphere),
}

impl Volume {
    /// Whether `point` lies inside or on the volume.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Volume::Empty => false,
            Volume::Infinite => true,
            Volume::Box(bounds) => bounds.contains(point),
            Volume::Sphere(sphere) => sphere.contains(point),
        }
    }

    /// Whether two volumes overlap. The test is symmetric.
    pub fn intersects(&self, other: &Volume) -> bool {
        match (self, other) {
            (Volume::Empty, _) | (_, Volume::Empty) => false,
            (Volume::Infinite, _) | (_, Volume::Infinite) => true,
            (Volume::Box(a), Volume::Box(b)) => a.intersects(b),
            (Volume::Box(bounds), Volume::Sphere(sphere))
            | (Volume::Sphere(sphere), Volume::Box(bounds)) => sphere.intersects_bounds(bounds),
            (Volume::Sphere(a), Volume::Sphere(b)) => a.intersects_sphere(b),
        }
    }

    /// The enclosing box, or `None` for the empty and infinite volumes.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Volume::Empty | Volume::Infinite => None,
            Volume::Box(bounds) => Some(*bounds),
            Volume::Sphere(sphere) => Some(sphere.bounds()),
        }
    }

    /// Whether this is [`Volume::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Volume::Empty)
    }
}

impl From<Bounds> for Volume {
    fn from(bounds: Bounds) -> Self {
        Volume::Box(bounds)
    }
}

impl From<Sphere> for Volume {
    fn from(sphere: Sphere) -> Self {
        Volume::Sphere(sphere)
    }
}

impl Intersected for Volume {
    /// The empty and infinite volumes have no surface and are never hit.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        match self {
            Volume::Empty | Volume::Infinite => Vec::new(),
            Volume::Box(bounds) => bounds.intersections(ray),
            Volume::Sphere(sphere) => sphere.intersections(ray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Axis, Vector};

    fn boxed(x: f32) -> Volume {
        Bounds::from_centre(Point::new(x, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0)).into()
    }

    fn ball(x: f32) -> Volume {
        Sphere::new(Point::new(x, 0.0, 0.0), 1.0).unwrap().into()
    }

    #[test]
    fn test_contains() {
        let p = Point::new(0.5, 0.5, 0.5);
        assert!(!Volume::Empty.contains(p));
        assert!(Volume::Infinite.contains(p));
        assert!(boxed(0.0).contains(p));
        assert!(ball(0.0).contains(p));
        assert!(!ball(0.0).contains(Point::new(0.9, 0.9, 0.0)));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let volumes = [
            Volume::Empty,
            Volume::Infinite,
            boxed(0.0),
            boxed(1.5),
            boxed(10.0),
            ball(0.0),
            ball(2.5),
            ball(-10.0),
        ];
        for a in &volumes {
            for b in &volumes {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_intersects() {
        assert!(!Volume::Empty.intersects(&Volume::Infinite));
        assert!(!Volume::Empty.intersects(&Volume::Empty));
        assert!(Volume::Infinite.intersects(&Volume::Infinite));
        assert!(Volume::Infinite.intersects(&ball(100.0)));
        assert!(boxed(0.0).intersects(&boxed(1.5)));
        assert!(!boxed(0.0).intersects(&boxed(10.0)));
        assert!(boxed(0.0).intersects(&ball(1.5)));
        assert!(!boxed(0.0).intersects(&ball(2.5)));
        assert!(ball(0.0).intersects(&ball(2.0)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Volume::Empty.bounds(), None);
        assert_eq!(Volume::Infinite.bounds(), None);
        let b = ball(3.0).bounds().unwrap();
        assert_eq!(b.min(), Point::new(2.0, -1.0, -1.0));
        assert_eq!(b.max(), Point::new(4.0, 1.0, 1.0));
        assert!(Volume::default().is_empty());
    }

    #[test]
    fn test_ray_intersections() {
        let ray = Ray::new(Point::new(-10.0, 0.0, 0.0), Axis::X.normal());
        assert!(Volume::Empty.intersections(&ray).is_empty());
        assert!(Volume::Infinite.intersections(&ray).is_empty());
        assert_eq!(boxed(0.0).intersections(&ray).len(), 2);
        assert_eq!(ball(0.0).first_intersection(&ray).map(|hit| hit.distance), Some(9.0));
    }

    #[test]
    fn test_ray_against_slice() {
        let scene = [ball(5.0), boxed(0.0), Volume::Infinite];
        let ray = Ray::new(Point::new(-10.0, 0.0, 0.0), Axis::X.normal());
        let hits = scene[..].intersections(&ray);
        let distances: Vec<f32> = hits.iter().map(|hit| hit.distance).collect();
        assert_eq!(distances, vec![9.0, 11.0, 14.0, 16.0]);
    }

    #[test]
    fn test_ron_format() {
        let volume: Volume =
            ron::from_str("Sphere((centre: (x: 0.0, y: 1.0, z: 0.0), radius: 2.0))").unwrap();
        assert_eq!(volume, Sphere::new(Point::new(0.0, 1.0, 0.0), 2.0).unwrap().into());
        let volume: Volume = ron::from_str("Infinite").unwrap();
        assert_eq!(volume, Volume::Infinite);
    }
}
