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

//! The [`Rotation`] abstraction and the axis-angle representation.

use serde::{Deserialize, Serialize};

use super::{Axis, Matrix, Normal, Vector};

/// Common behaviour of every rotation representation.
pub trait Rotation {
    /// The equivalent 4x4 rotation matrix.
    fn matrix(&self) -> Matrix;

    /// The equivalent axis-angle rotation.
    fn to_axis_angle(&self) -> AxisAngle;

    /// Rotates a vector.
    fn rotate(&self, v: Vector) -> Vector;
}

/// A rotation of `angle` radians counter-clockwise about `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// The rotation axis.
    pub axis: Normal,
    /// The angle in radians.
    pub angle: f32,
}

impl AxisAngle {
    /// Creates an axis-angle rotation.
    #[inline]
    pub fn new(axis: Normal, angle: f32) -> Self {
        Self { axis, angle }
    }

    /// A rotation about one of the cardinal axes.
    #[inline]
    pub fn about(axis: Axis, angle: f32) -> Self {
        Self::new(axis.normal(), angle)
    }

    // I + sin(a)K + (1 - cos(a))K^2, expanded.
    fn rodrigues_matrix(&self) -> Matrix {
        let Vector { x, y, z } = self.axis.vector();
        let (s, c) = self.angle.sin_cos();
        let t = 1.0 - c;

        Matrix::builder()
            .put(0, 0, t * x * x + c)
            .put(0, 1, t * x * y - s * z)
            .put(0, 2, t * x * z + s * y)
            .put(1, 0, t * x * y + s * z)
            .put(1, 1, t * y * y + c)
            .put(1, 2, t * y * z - s * x)
            .put(2, 0, t * x * z - s * y)
            .put(2, 1, t * y * z + s * x)
            .put(2, 2, t * z * z + c)
            .build()
    }
}

impl Rotation for AxisAngle {
    fn matrix(&self) -> Matrix {
        match Axis::of(self.axis) {
            Some(axis) => axis.rotation(self.angle),
            None => self.rodrigues_matrix(),
        }
    }

    #[inline]
    fn to_axis_angle(&self) -> AxisAngle {
        *self
    }

    fn rotate(&self, v: Vector) -> Vector {
        let k = self.axis.vector();
        let (s, c) = self.angle.sin_cos();
        v * c + k.cross(v) * s + k * (k.dot(v) * (1.0 - c))
    }
}
