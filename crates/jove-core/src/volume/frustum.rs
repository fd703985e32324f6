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

//! View frustum culling.

use serde::{Deserialize, Serialize};

use super::{Sphere, Volume};
use crate::geometry::{Bounds, HalfSpace, Matrix, Plane, Point};
use crate::GeometryError;

/// A convex region bounded by six planes whose normals face inwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Index of the left plane.
    pub const LEFT: usize = 0;
    /// Index of the right plane.
    pub const RIGHT: usize = 1;
    /// Index of the bottom plane.
    pub const BOTTOM: usize = 2;
    /// Index of the top plane.
    pub const TOP: usize = 3;
    /// Index of the near plane.
    pub const NEAR: usize = 4;
    /// Index of the far plane.
    pub const FAR: usize = 5;

    /// Creates a frustum from planes in `LEFT..=FAR` order.
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extracts the clip planes of a projection-view matrix.
    ///
    /// Assumes clip-space depth runs from zero to one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if the matrix yields a plane
    /// with no normal, e.g. a singular or non-projective matrix.
    pub fn from_matrix(m: &Matrix) -> Result<Self, GeometryError> {
        let [r0, r1, r2, r3] = m.to_rows();
        let combine = |sign: f32, row: [f32; 4]| -> Result<Plane, GeometryError> {
            Plane::from_coefficients(
                r3[0] + sign * row[0],
                r3[1] + sign * row[1],
                r3[2] + sign * row[2],
                r3[3] + sign * row[3],
            )
        };

        let planes = [
            combine(1.0, r0)?,
            combine(-1.0, r0)?,
            combine(1.0, r1)?,
            combine(-1.0, r1)?,
            Plane::from_coefficients(r2[0], r2[1], r2[2], r2[3])?,
            combine(-1.0, r2)?,
        ];
        log::trace!("Extracted frustum planes {planes:?}");
        Ok(Self::new(planes))
    }

    /// The six bounding planes.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Whether `point` lies inside or on the frustum.
    pub fn contains(&self, point: Point) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.side(point) != HalfSpace::Negative)
    }

    /// Whether a sphere is at least partially inside the frustum.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance(&sphere.centre()) >= -sphere.radius())
    }

    /// Whether a box is at least partially inside the frustum.
    ///
    /// Tests the corner furthest along each plane normal. Boxes near a
    /// frustum edge may be reported visible when they are not.
    pub fn intersects_bounds(&self, bounds: &Bounds) -> bool {
        let (min, max) = (bounds.min(), bounds.max());
        self.planes.iter().all(|plane| {
            let n = plane.normal.vector();
            let positive = Point::new(
                if n.x >= 0.0 { max.x } else { min.x },
                if n.y >= 0.0 { max.y } else { min.y },
                if n.z >= 0.0 { max.z } else { min.z },
            );
            plane.distance(&positive) >= 0.0
        })
    }

    /// Whether a volume is at least partially inside the frustum.
    pub fn intersects(&self, volume: &Volume) -> bool {
        match volume {
            Volume::Empty => false,
            Volume::Infinite => true,
            Volume::Box(bounds) => self.intersects_bounds(bounds),
            Volume::Sphere(sphere) => self.intersects_sphere(sphere),
        }
    }
}
