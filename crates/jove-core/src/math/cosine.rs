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

//! Sine and cosine providers.
//!
//! Rotation matrices are built through the [`Cosine`] trait so callers can trade
//! accuracy for speed with a [`CosineTable`].

use super::{is_power_of_two, FRAC_PI_2, TAU};
use crate::GeometryError;

/// Computes the sine and cosine of an angle in radians.
pub trait Cosine {
    /// Sine of `angle`.
    fn sin(&self, angle: f32) -> f32;

    /// Cosine of `angle`.
    fn cos(&self, angle: f32) -> f32;

    /// Sine and cosine of `angle` as `(sin, cos)`.
    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        (self.sin(angle), self.cos(angle))
    }
}

/// Exact provider delegating to the standard library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdCosine;

impl Cosine for StdCosine {
    #[inline]
    fn sin(&self, angle: f32) -> f32 {
        angle.sin()
    }

    #[inline]
    fn cos(&self, angle: f32) -> f32 {
        angle.cos()
    }

    #[inline]
    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        angle.sin_cos()
    }
}

/// A precomputed sine table covering one full turn.
///
/// The table size must be a power of two so that any angle, including negative
/// angles and angles beyond one turn, maps onto the table with a bit mask.
/// Results are accurate to within half a table step (`TAU / size / 2`).
#[derive(Debug, Clone)]
pub struct CosineTable {
    table: Vec<f32>,
    mask: i64,
    scale: f32,
}

impl CosineTable {
    /// Builds a table with `size` entries.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTableSize`] if `size` is zero or not a
    /// power of two.
    pub fn new(size: usize) -> Result<Self, GeometryError> {
        if !is_power_of_two(size) {
            return Err(GeometryError::InvalidTableSize(size));
        }

        let step = TAU / size as f32;
        let table = (0..size).map(|i| (i as f32 * step).sin()).collect();
        log::debug!("Built sine table with {size} entries (step {step:.6} rad)");

        Ok(Self {
            table,
            mask: size as i64 - 1,
            scale: size as f32 / TAU,
        })
    }

    /// Number of entries in the table.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    #[inline]
    fn lookup(&self, angle: f32) -> f32 {
        let index = (angle * self.scale).round() as i64 & self.mask;
        self.table[index as usize]
    }
}

impl Cosine for CosineTable {
    #[inline]
    fn sin(&self, angle: f32) -> f32 {
        self.lookup(angle)
    }

    #[inline]
    fn cos(&self, angle: f32) -> f32 {
        self.lookup(angle + FRAC_PI_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_std_cosine() {
        let (sin, cos) = StdCosine.sin_cos(FRAC_PI_2);
        assert_abs_diff_eq!(sin, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cos, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_table_rejects_invalid_sizes() {
        assert_eq!(
            CosineTable::new(0).unwrap_err(),
            GeometryError::InvalidTableSize(0)
        );
        assert_eq!(
            CosineTable::new(1000).unwrap_err(),
            GeometryError::InvalidTableSize(1000)
        );
        assert_eq!(CosineTable::new(1024).unwrap().size(), 1024);
    }

    #[test]
    fn test_table_exact_at_quarter_turns() {
        let table = CosineTable::new(256).unwrap();
        assert_abs_diff_eq!(table.sin(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.sin(FRAC_PI_2), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.cos(0.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.cos(PI), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_table_accuracy_and_wrapping() {
        let table = CosineTable::new(4096).unwrap();
        let tolerance = TAU / 4096.0;
        let mut angle = -3.0 * TAU;
        while angle < 3.0 * TAU {
            assert_abs_diff_eq!(table.sin(angle), angle.sin(), epsilon = tolerance);
            assert_abs_diff_eq!(table.cos(angle), angle.cos(), epsilon = tolerance);
            angle += 0.173;
        }
    }
}
