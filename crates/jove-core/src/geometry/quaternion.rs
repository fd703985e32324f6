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

//! Unit quaternions for composing and interpolating rotations.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use super::{Axis, AxisAngle, Matrix, Normal, Rotation, Vector};
use crate::math::{clamp, EPSILON, PI};

/// A quaternion `(x, y, z, w)` where `[x, y, z]` is the vector part and `w`
/// the scalar part.
///
/// Only unit quaternions represent rotations. Constructors in this module
/// always return unit quaternions; [`Quaternion::new`] does not.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extracts the rotation from the upper 3x3 part of a matrix.
    pub fn from_matrix(m: &Matrix) -> Self {
        let (m00, m01, m02) = (m.get(0, 0), m.get(0, 1), m.get(0, 2));
        let (m10, m11, m12) = (m.get(1, 0), m.get(1, 1), m.get(1, 2));
        let (m20, m21, m22) = (m.get(2, 0), m.get(2, 1), m.get(2, 2));

        // Branch on the largest of the trace and diagonal to keep `s` away from zero.
        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };
        q.normalize()
    }

    /// The shortest-arc rotation taking the direction of `from` onto `to`.
    ///
    /// Opposite vectors rotate half a turn about a perpendicular axis. Returns
    /// the identity if either vector has zero length.
    pub fn rotation_between(from: Vector, to: Vector) -> Self {
        let (a, b) = (from.normalize(), to.normalize());
        if a == Vector::ZERO || b == Vector::ZERO {
            return Self::IDENTITY;
        }

        let cos = a.dot(b);
        if cos >= 1.0 - EPSILON {
            return Self::IDENTITY;
        }
        if cos <= -1.0 + EPSILON {
            let perpendicular = a.cross(Axis::minimal(a).vector());
            return match Normal::new(perpendicular) {
                Ok(axis) => AxisAngle::new(axis, PI).into(),
                Err(_) => Self::IDENTITY,
            };
        }

        let axis = a.cross(b);
        Self::new(axis.x, axis.y, axis.z, 1.0 + cos).normalize()
    }

    /// The squared length of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// The length of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Scales to unit length. A near-zero quaternion normalizes to the identity.
    pub fn normalize(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq > EPSILON * EPSILON {
            *self * (1.0 / mag_sq.sqrt())
        } else {
            Self::IDENTITY
        }
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The inverse rotation. Equal to the conjugate for unit quaternions.
    #[inline]
    pub fn inverse(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq > EPSILON * EPSILON {
            self.conjugate() * (1.0 / mag_sq)
        } else {
            Self::IDENTITY
        }
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    fn vector_part(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Spherical linear interpolation along the shortest path.
    ///
    /// `t` is clamped to `[0, 1]`. Nearly parallel inputs fall back to a
    /// normalized linear interpolation.
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        let mut cos_theta = start.dot(end);
        let mut end = end;

        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end = -end;
        }

        if cos_theta > 1.0 - EPSILON {
            return (start * (1.0 - t) + end * t).normalize();
        }

        let angle = cos_theta.acos();
        let inv_sin = 1.0 / angle.sin();
        let scale_start = ((1.0 - t) * angle).sin() * inv_sin;
        let scale_end = (t * angle).sin() * inv_sin;
        start * scale_start + end * scale_end
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(rotation: AxisAngle) -> Self {
        let (s, c) = (rotation.angle * 0.5).sin_cos();
        let axis = rotation.axis.vector() * s;
        Self::new(axis.x, axis.y, axis.z, c)
    }
}

impl Rotation for Quaternion {
    fn matrix(&self) -> Matrix {
        let Quaternion { x, y, z, w } = self.normalize();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix::builder()
            .put(0, 0, 1.0 - 2.0 * (yy + zz))
            .put(0, 1, 2.0 * (xy - wz))
            .put(0, 2, 2.0 * (xz + wy))
            .put(1, 0, 2.0 * (xy + wz))
            .put(1, 1, 1.0 - 2.0 * (xx + zz))
            .put(1, 2, 2.0 * (yz - wx))
            .put(2, 0, 2.0 * (xz - wy))
            .put(2, 1, 2.0 * (yz + wx))
            .put(2, 2, 1.0 - 2.0 * (xx + yy))
            .build()
    }

    /// The identity maps to a zero angle about the X axis.
    fn to_axis_angle(&self) -> AxisAngle {
        let mut q = self.normalize();
        if q.w < 0.0 {
            q = -q;
        }

        let angle = 2.0 * clamp(q.w, -1.0, 1.0).acos();
        let s = (1.0 - q.w * q.w).max(0.0).sqrt();
        if s < EPSILON {
            return AxisAngle::about(Axis::X, 0.0);
        }
        match Normal::new(q.vector_part() * (1.0 / s)) {
            Ok(axis) => AxisAngle::new(axis, angle),
            Err(_) => AxisAngle::about(Axis::X, 0.0),
        }
    }

    fn rotate(&self, v: Vector) -> Vector {
        let q = self.normalize();
        let u = q.vector_part();
        let s = q.w;
        u * (2.0 * u.dot(v)) + v * (s * s - u.dot(u)) + u.cross(v) * (2.0 * s)
    }
}

impl Default for Quaternion {
    /// Returns the identity quaternion.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// --- Operator Overloads ---

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// The Hamilton product. `a * b` applies `b` first.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector> for Quaternion {
    type Output = Vector;
    /// Rotates a vector.
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        self.rotate(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates every component. The result represents the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
