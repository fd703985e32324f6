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

//! Unit vectors and the cardinal axes.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

use super::{Matrix, Tuple, Vector};
use crate::math::{Cosine, StdCosine, EPSILON};
use crate::GeometryError;

/// A vector of unit length.
///
/// The invariant is enforced on construction, so any `Normal` can be used as a
/// direction without renormalizing. Deserialization goes through
/// [`Normal::new`] and therefore normalizes the input and rejects zero vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vector", into = "Vector")]
#[repr(transparent)]
pub struct Normal(Vector);

impl Normal {
    /// Normalizes `vector`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if `vector` has (near) zero length.
    pub fn new(vector: Vector) -> Result<Self, GeometryError> {
        let len_sq = vector.magnitude_squared();
        if len_sq > EPSILON * EPSILON {
            Ok(Self(vector * (1.0 / len_sq.sqrt())))
        } else {
            Err(GeometryError::ZeroLength)
        }
    }

    /// Wraps a vector already known to have unit length.
    #[inline]
    pub(crate) const fn new_unchecked(vector: Vector) -> Self {
        Self(vector)
    }

    /// The underlying unit vector.
    #[inline]
    pub fn vector(&self) -> Vector {
        self.0
    }

    /// The normal pointing the opposite way.
    #[inline]
    pub fn invert(&self) -> Self {
        Self(-self.0)
    }

    /// Dot product with a vector, i.e. the length of its projection.
    #[inline]
    pub fn dot(&self, v: Vector) -> f32 {
        self.0.dot(v)
    }

    /// Cross product with another normal.
    ///
    /// The result is a unit vector only when the two normals are perpendicular.
    #[inline]
    pub fn cross(&self, other: Normal) -> Vector {
        self.0.cross(other.0)
    }
}

impl Tuple for Normal {
    #[inline]
    fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    fn z(&self) -> f32 {
        self.0.z
    }
}

impl TryFrom<Vector> for Normal {
    type Error = GeometryError;

    fn try_from(vector: Vector) -> Result<Self, Self::Error> {
        Normal::new(vector)
    }
}

impl From<Normal> for Vector {
    #[inline]
    fn from(normal: Normal) -> Self {
        normal.0
    }
}

impl From<Axis> for Normal {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.normal()
    }
}

impl Neg for Normal {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.invert()
    }
}

impl Mul<f32> for Normal {
    type Output = Vector;
    /// Scales the normal into a vector of the given length.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.0 * rhs
    }
}

impl AbsDiffEq for Normal {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Normal {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

// --- Axis ---

/// One of the three cardinal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis into a tuple (0, 1 or 2).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The positive unit vector along this axis.
    #[inline]
    pub fn vector(&self) -> Vector {
        match self {
            Axis::X => Vector::X,
            Axis::Y => Vector::Y,
            Axis::Z => Vector::Z,
        }
    }

    /// The positive unit normal along this axis.
    #[inline]
    pub fn normal(&self) -> Normal {
        Normal::new_unchecked(self.vector())
    }

    /// Returns the cardinal axis `normal` lies along, if any.
    pub fn of(normal: Normal) -> Option<Axis> {
        let v = normal.vector();
        Axis::ALL
            .into_iter()
            .find(|axis| (v.get(axis.index()) - 1.0).abs() < EPSILON)
    }

    /// The axis of the smallest absolute component of `vector`.
    ///
    /// Crossing a vector with its minimal axis gives a well-conditioned
    /// perpendicular.
    pub fn minimal(vector: Vector) -> Axis {
        let abs = vector.abs();
        if abs.x <= abs.y && abs.x <= abs.z {
            Axis::X
        } else if abs.y <= abs.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// A rotation matrix of `angle` radians counter-clockwise about this axis.
    #[inline]
    pub fn rotation(&self, angle: f32) -> Matrix {
        self.rotation_with(angle, &StdCosine)
    }

    /// As [`Axis::rotation`] with an explicit sine/cosine provider.
    pub fn rotation_with(&self, angle: f32, cosine: &dyn Cosine) -> Matrix {
        let (s, c) = cosine.sin_cos(angle);
        let mut builder = Matrix::builder();
        match self {
            Axis::X => builder
                .put(1, 1, c)
                .put(1, 2, -s)
                .put(2, 1, s)
                .put(2, 2, c),
            Axis::Y => builder
                .put(0, 0, c)
                .put(0, 2, s)
                .put(2, 0, -s)
                .put(2, 2, c),
            Axis::Z => builder
                .put(0, 0, c)
                .put(0, 1, -s)
                .put(1, 0, s)
                .put(1, 1, c),
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{CosineTable, FRAC_PI_2};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normal_new_normalizes() {
        let n = Normal::new(Vector::new(0.0, 5.0, 0.0)).unwrap();
        assert_abs_diff_eq!(n.vector(), Vector::Y);
        let n = Normal::new(Vector::new(1.0, 2.0, -3.0)).unwrap();
        assert!((n.vector().magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normal_rejects_zero() {
        assert_eq!(Normal::new(Vector::ZERO), Err(GeometryError::ZeroLength));
        assert!(Normal::try_from(Vector::new(0.0, 1e-7, 0.0)).is_err());
    }

    #[test]
    fn test_normal_invert() {
        let n = Axis::Z.normal();
        assert_eq!(n.invert().vector(), -Vector::Z);
        assert_eq!(-n, n.invert());
    }

    #[test]
    fn test_normal_serde_validates() {
        let n: Normal = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":2.0}"#).unwrap();
        assert_eq!(n, Axis::Z.normal());
        assert!(serde_json::from_str::<Normal>(r#"{"x":0.0,"y":0.0,"z":0.0}"#).is_err());
    }

    #[test]
    fn test_axis_of() {
        assert_eq!(Axis::of(Axis::Y.normal()), Some(Axis::Y));
        assert_eq!(Axis::of(Axis::Y.normal().invert()), None);
        let diagonal = Normal::new(Vector::new(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(Axis::of(diagonal), None);
    }

    #[test]
    fn test_axis_minimal() {
        assert_eq!(Axis::minimal(Vector::new(0.1, 2.0, 3.0)), Axis::X);
        assert_eq!(Axis::minimal(Vector::new(2.0, -0.1, 3.0)), Axis::Y);
        assert_eq!(Axis::minimal(Vector::new(2.0, 3.0, 0.0)), Axis::Z);
    }

    #[test]
    fn test_axis_rotation() {
        let rot_z = Axis::Z.rotation(FRAC_PI_2);
        assert_abs_diff_eq!(rot_z.transform_vector(Vector::X), Vector::Y);

        let rot_x = Axis::X.rotation(FRAC_PI_2);
        assert_abs_diff_eq!(rot_x.transform_vector(Vector::Y), Vector::Z);

        let rot_y = Axis::Y.rotation(FRAC_PI_2);
        assert_abs_diff_eq!(rot_y.transform_vector(Vector::Z), Vector::X);
    }

    #[test]
    fn test_axis_rotation_with_table() {
        let table = CosineTable::new(1024).unwrap();
        let exact = Axis::Y.rotation(FRAC_PI_2);
        let approx = Axis::Y.rotation_with(FRAC_PI_2, &table);
        assert_abs_diff_eq!(exact, approx, epsilon = 1e-5);
    }
}
