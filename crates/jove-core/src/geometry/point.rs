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

//! A position in 3D space.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Sub};

use super::{Tuple, Vector};
use crate::math::EPSILON;

/// A point in 3D space.
///
/// Points and vectors are kept as distinct types: subtracting two points yields
/// the [`Vector`] between them, and a point can only be offset by a vector.
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
pub struct Point {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
    /// The z coordinate.
    pub z: f32,
}

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: Point) -> f32 {
        (other - *self).magnitude_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// The point halfway between this point and `other`.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Self {
        Self::lerp(*self, other, 0.5)
    }

    /// Linear interpolation between two points. `t` is not clamped.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: Point) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: Point) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

impl Tuple for Point {
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

impl From<[f32; 3]> for Point {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for Point {
    /// The point reached by offsetting the origin by `v`.
    #[inline]
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// --- Operator Overloads ---

impl Add<Vector> for Point {
    type Output = Point;
    /// Offsets the point by a vector.
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    /// Offsets the point by the inverse of a vector.
    #[inline]
    fn sub(self, rhs: Vector) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    /// The vector from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Index<usize> for Point {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Point"),
        }
    }
}

impl AbsDiffEq for Point {
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

impl RelativeEq for Point {
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
    use approx::assert_relative_eq;

    #[test]
    fn test_point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0, 3.0);
        let v = Vector::new(1.0, 1.0, -1.0);
        assert_eq!(p + v, Point::new(2.0, 3.0, 2.0));
        assert_eq!(p - v, Point::new(0.0, 1.0, 4.0));
        assert_eq!(Point::new(4.0, 6.0, 8.0) - p, Vector::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_midpoint_and_lerp() {
        let a = Point::ORIGIN;
        let b = Point::new(10.0, -10.0, 4.0);
        assert_relative_eq!(a.midpoint(b), Point::new(5.0, -5.0, 2.0));
        assert_relative_eq!(Point::lerp(a, b, 0.25), Point::new(2.5, -2.5, 1.0));
    }

    #[test]
    fn test_min_max() {
        let a = Point::new(1.0, 5.0, -2.0);
        let b = Point::new(3.0, 0.0, -1.0);
        assert_eq!(a.min(b), Point::new(1.0, 0.0, -2.0));
        assert_eq!(a.max(b), Point::new(3.0, 5.0, -1.0));
    }

    #[test]
    fn test_gpu_layout() {
        let points = [Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
