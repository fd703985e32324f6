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

//! Scalar helpers shared by the geometry types.
//!
//! Angles are in **radians** unless a function name says otherwise.

/// Tolerance used for floating-point comparisons throughout the crate.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2, TAU};

/// Degrees to radians (PI / 180).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// Radians to degrees (180 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

pub mod cosine;
pub mod interpolator;

pub use self::cosine::{Cosine, CosineTable, StdCosine};
pub use self::interpolator::{Interpolator, RangeInterpolator};

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use jove_core::math::{to_radians, PI};
/// assert_eq!(to_radians(180.0), PI);
/// ```
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use jove_core::math::{to_degrees, PI};
/// assert_eq!(to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to `[min_val, max_val]`.
///
/// # Examples
///
/// ```
/// use jove_core::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1, 0, 10), 0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a value to the unit range `[0, 1]`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Compares two floats with an explicit tolerance.
///
/// # Examples
///
/// ```
/// use jove_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Compares two floats using [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Whether a float is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

/// Whether `n` is a non-zero power of two.
///
/// # Examples
///
/// ```
/// use jove_core::math::is_power_of_two;
/// assert!(is_power_of_two(1024));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(100));
/// ```
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}
