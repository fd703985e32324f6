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

//! A direction and magnitude in 3D space.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::{Normal, Point, Tuple};
use crate::math::{clamp, EPSILON};

/// A 3-dimensional vector with `f32` components.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vector {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
    /// The z component.
    pub z: f32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// The unit vector along the positive X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector along the positive Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector along the positive Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The vector from `start` to `end`.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        end - start
    }

    /// Squared magnitude. Cheaper than [`Vector::magnitude`].
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Whether this vector has (approximately) unit length.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.magnitude_squared() - 1.0).abs() < EPSILON
    }

    /// Returns this vector scaled to unit length.
    ///
    /// A near-zero vector normalizes to [`Vector::ZERO`]. Use
    /// [`Normal::new`] when a zero vector should be an error instead.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.magnitude_squared();
        if len_sq > EPSILON * EPSILON {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, following the right-hand rule.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// The angle between two vectors in radians, in `[0, PI]`.
    ///
    /// Returns `0` if either vector has zero length.
    pub fn angle(&self, other: Self) -> f32 {
        let denominator = (self.magnitude_squared() * other.magnitude_squared()).sqrt();
        if denominator < EPSILON {
            return 0.0;
        }
        clamp(self.dot(other) / denominator, -1.0, 1.0).acos()
    }

    /// Projects this vector onto the given normal.
    #[inline]
    pub fn project(&self, normal: Normal) -> Self {
        let n = normal.vector();
        n * self.dot(n)
    }

    /// Reflects this vector about the surface with the given normal.
    #[inline]
    pub fn reflect(&self, normal: Normal) -> Self {
        *self - self.project(normal) * 2.0
    }

    /// Returns the vector pointing the opposite way.
    #[inline]
    pub fn invert(&self) -> Self {
        -*self
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(&self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Tuple for Vector {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
}

impl From<[f32; 3]> for Vector {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for Vector {
    /// The position vector of a point relative to the origin.
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

// --- Operator Overloads ---

impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    /// Scales the vector.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vector {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;
    use crate::math::{FRAC_PI_2, FRAC_PI_4, PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_ops() {
        let v1 = Vector::new(1.0, 2.0, 3.0);
        let v2 = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector::new(3.0, 3.0, 3.0));
        assert_eq!(v1 * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * v1, Vector::new(3.0, 6.0, 9.0));
        assert_eq!(-v1, Vector::new(-1.0, -2.0, -3.0));
        assert_eq!(v1.invert(), -v1);
        assert_eq!(v1.multiply(v2), Vector::new(4.0, 10.0, 18.0));
        assert_relative_eq!(Vector::new(2.0, 4.0, 6.0) / 2.0, v1);
    }

    #[test]
    fn test_between() {
        let v = Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 3.0, 4.0));
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.magnitude_squared(), 25.0);
        assert_relative_eq!(v.magnitude(), 5.0);
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(1.0, -2.0, 3.5);
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = EPSILON);
        assert!(v.normalize().is_normalized());
        assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
    }

    #[test]
    fn test_dot_and_cross() {
        let v1 = Vector::new(1.0, 2.0, 3.0);
        let v2 = Vector::new(4.0, -5.0, 6.0);
        assert_relative_eq!(v1.dot(v2), 12.0);
        assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
        assert_eq!(Vector::Y.cross(Vector::Z), Vector::X);
        assert_eq!(Vector::Z.cross(Vector::X), Vector::Y);
        assert_eq!(Vector::Y.cross(Vector::X), -Vector::Z);
        assert_eq!(Vector::X.cross(Vector::X), Vector::ZERO);
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(Vector::X.angle(Vector::Y), FRAC_PI_2);
        assert_relative_eq!(Vector::X.angle(Vector::X), 0.0);
        assert_relative_eq!(Vector::X.angle(-Vector::X), PI);
        assert_relative_eq!(
            Vector::X.angle(Vector::new(1.0, 1.0, 0.0)),
            FRAC_PI_4,
            epsilon = EPSILON
        );
        assert_eq!(Vector::ZERO.angle(Vector::X), 0.0);
    }

    #[test]
    fn test_project_and_reflect() {
        let v = Vector::new(3.0, -2.0, 5.0);
        let up = Axis::Y.normal();
        assert_abs_diff_eq!(v.project(up), Vector::new(0.0, -2.0, 0.0));
        assert_abs_diff_eq!(v.reflect(up), Vector::new(3.0, 2.0, 5.0));
    }

    #[test]
    fn test_index() {
        let v = Vector::new(5.0, 6.0, 7.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[2], 7.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vector::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }
}
