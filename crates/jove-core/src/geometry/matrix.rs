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

//! Defines the 4x4 [`Matrix`] and its builder.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::{Axis, Normal, Point, Tuple, Vector};
use crate::math::EPSILON;
use crate::GeometryError;

/// Rows and columns of a [`Matrix`].
pub const ORDER: usize = 4;

/// A 4x4 transformation matrix.
///
/// Elements are stored column-major so a slice of matrices can be uploaded to
/// a uniform buffer as-is. All accessors take `(row, col)` regardless of the
/// storage order.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Matrix {
    cols: [[f32; ORDER]; ORDER],
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// A matrix with every element set to zero.
    pub const ZERO: Self = Self::from_cols([[0.0; ORDER]; ORDER]);

    /// Creates a matrix from column-major elements.
    #[inline]
    pub const fn from_cols(cols: [[f32; ORDER]; ORDER]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from row-major elements.
    #[inline]
    pub fn from_rows(rows: [[f32; ORDER]; ORDER]) -> Self {
        Self::from_cols(rows).transpose()
    }

    /// Starts building a matrix from the identity.
    pub fn builder() -> MatrixBuilder {
        let mut builder = MatrixBuilder::new();
        builder.identity();
        builder
    }

    /// A translation by `v`.
    pub fn translation(v: Vector) -> Self {
        Self::builder()
            .put(0, 3, v.x)
            .put(1, 3, v.y)
            .put(2, 3, v.z)
            .build()
    }

    /// A non-uniform scale.
    pub fn scale(scale: Vector) -> Self {
        Self::builder()
            .put(0, 0, scale.x)
            .put(1, 1, scale.y)
            .put(2, 2, scale.z)
            .build()
    }

    /// A rotation of `angle` radians about a cardinal axis.
    #[inline]
    pub fn rotation(axis: Axis, angle: f32) -> Self {
        axis.rotation(angle)
    }

    /// A right-handed perspective projection with a `[0, 1]` depth range.
    ///
    /// `z_near` must be positive and less than `z_far`.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let depth = z_near - z_far;
        Self::from_cols([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, z_far / depth, -1.0],
            [0.0, 0.0, z_near * z_far / depth, 0.0],
        ])
    }

    /// A right-handed orthographic projection with a `[0, 1]` depth range.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let (width, height, depth) = (right - left, top - bottom, z_far - z_near);
        Self::from_cols([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, -1.0 / depth, 0.0],
            [
                -(right + left) / width,
                -(top + bottom) / height,
                -z_near / depth,
                1.0,
            ],
        ])
    }

    /// A right-handed view matrix looking from `eye` towards `target`.
    ///
    /// Returns `None` if `eye` and `target` coincide or `up` is parallel to
    /// the view direction.
    pub fn look_at(eye: Point, target: Point, up: Vector) -> Option<Self> {
        let f = Normal::new(target - eye).ok()?.vector();
        let s = Normal::new(f.cross(up)).ok()?.vector();
        let u = s.cross(f);
        let eye = Vector::from(eye);

        Some(Self::from_cols([
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0],
        ]))
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is 4 or more.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// A row of the matrix.
    #[inline]
    pub fn row(&self, row: usize) -> [f32; ORDER] {
        std::array::from_fn(|col| self.cols[col][row])
    }

    /// A column of the matrix.
    #[inline]
    pub fn column(&self, col: usize) -> [f32; ORDER] {
        self.cols[col]
    }

    /// All elements in row-major order.
    #[inline]
    pub fn to_rows(&self) -> [[f32; ORDER]; ORDER] {
        std::array::from_fn(|row| self.row(row))
    }

    /// All elements in column-major order.
    #[inline]
    pub fn to_cols(&self) -> [[f32; ORDER]; ORDER] {
        self.cols
    }

    /// The translation component of an affine matrix.
    #[inline]
    pub fn translation_part(&self) -> Vector {
        Vector::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.to_rows())
    }

    /// Computes the determinant by Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> f32 {
        let mut m = self.to_rows();
        let mut det = 1.0;

        for col in 0..ORDER {
            let pivot = pivot_row(&m, col);
            if m[pivot][col] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                m.swap(pivot, col);
                det = -det;
            }
            det *= m[col][col];

            let pivot_values = m[col];
            for row in m.iter_mut().skip(col + 1) {
                let factor = row[col] / pivot_values[col];
                for k in col..ORDER {
                    row[k] -= factor * pivot_values[k];
                }
            }
        }

        det
    }

    /// Computes the inverse by Gauss-Jordan elimination.
    ///
    /// Returns `None` if the matrix is singular. A pivot counts as zero when
    /// it is negligible against the largest element of its original row, so
    /// uniformly small matrices still invert.
    pub fn inverse(&self) -> Option<Self> {
        let mut m = self.to_rows();
        let mut inv = Self::IDENTITY.to_rows();
        let mut scales = m.map(|row| row.iter().fold(0.0_f32, |max, v| max.max(v.abs())));

        for col in 0..ORDER {
            let pivot = pivot_row(&m, col);
            if m[pivot][col].abs() <= EPSILON * scales[pivot] {
                return None;
            }
            m.swap(pivot, col);
            inv.swap(pivot, col);
            scales.swap(pivot, col);

            let scale = 1.0 / m[col][col];
            for k in 0..ORDER {
                m[col][k] *= scale;
                inv[col][k] *= scale;
            }

            let (pivot_m, pivot_inv) = (m[col], inv[col]);
            for row in 0..ORDER {
                let factor = m[row][col];
                if row == col || factor == 0.0 {
                    continue;
                }
                for k in 0..ORDER {
                    m[row][k] -= factor * pivot_m[k];
                    inv[row][k] -= factor * pivot_inv[k];
                }
            }
        }

        inv.iter()
            .flatten()
            .all(|v| v.is_finite())
            .then(|| Self::from_rows(inv))
    }

    /// Transforms a point, including translation.
    ///
    /// A projective result (`w != 1`) is divided through by `w`.
    pub fn transform_point(&self, p: Point) -> Point {
        let [x, y, z, w] = self.apply([p.x, p.y, p.z, 1.0]);
        if (w - 1.0).abs() > EPSILON && w.abs() > EPSILON {
            Point::new(x / w, y / w, z / w)
        } else {
            Point::new(x, y, z)
        }
    }

    /// Transforms a direction, ignoring translation.
    pub fn transform_vector(&self, v: Vector) -> Vector {
        let [x, y, z, _] = self.apply([v.x, v.y, v.z, 0.0]);
        Vector::new(x, y, z)
    }

    #[inline]
    fn apply(&self, v: [f32; ORDER]) -> [f32; ORDER] {
        std::array::from_fn(|row| (0..ORDER).map(|k| self.cols[k][row] * v[k]).sum())
    }
}

fn pivot_row(m: &[[f32; ORDER]; ORDER], col: usize) -> usize {
    (col..ORDER)
        .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
        .unwrap_or(col)
}

impl Default for Matrix {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Self;
    /// Composes two transforms; `a * b` applies `b` first.
    fn mul(self, rhs: Matrix) -> Self::Output {
        let cols = std::array::from_fn(|col| {
            std::array::from_fn(|row| {
                (0..ORDER)
                    .map(|k| self.cols[k][row] * rhs.cols[col][k])
                    .sum()
            })
        });
        Self::from_cols(cols)
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// --- Builder ---

/// Incrementally populates a [`Matrix`].
///
/// Setters that take an index validate it and return
/// [`GeometryError::IndexOutOfBounds`] for anything past the fourth row or
/// column.
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    cols: [[f32; ORDER]; ORDER],
}

impl MatrixBuilder {
    /// Creates a builder with every element set to zero.
    pub fn new() -> Self {
        Self {
            cols: [[0.0; ORDER]; ORDER],
        }
    }

    /// Sets the diagonal to one.
    pub fn identity(&mut self) -> &mut Self {
        for n in 0..ORDER {
            self.cols[n][n] = 1.0;
        }
        self
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<&mut Self, GeometryError> {
        check_index(row)?;
        check_index(col)?;
        Ok(self.put(row, col, value))
    }

    /// Sets the first three elements of a row.
    pub fn row<T: Tuple>(&mut self, row: usize, tuple: &T) -> Result<&mut Self, GeometryError> {
        check_index(row)?;
        for (col, value) in tuple.to_array().into_iter().enumerate() {
            self.put(row, col, value);
        }
        Ok(self)
    }

    /// Sets the first three elements of a column.
    pub fn column<T: Tuple>(&mut self, col: usize, tuple: &T) -> Result<&mut Self, GeometryError> {
        check_index(col)?;
        for (row, value) in tuple.to_array().into_iter().enumerate() {
            self.put(row, col, value);
        }
        Ok(self)
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
        self.cols[col][row] = value;
        self
    }

    /// Builds the matrix.
    pub fn build(&self) -> Matrix {
        Matrix::from_cols(self.cols)
    }
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_index(index: usize) -> Result<(), GeometryError> {
    if index < ORDER {
        Ok(())
    } else {
        Err(GeometryError::IndexOutOfBounds {
            index,
            length: ORDER,
        })
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAC_PI_2;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample() -> Matrix {
        Matrix::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_row_major_access() {
        let m = sample();
        assert_eq!(m.get(0, 3), 3.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.row(2), [0.0, 1.0, 4.0, 2.0]);
        assert_eq!(m.column(3), [3.0, -1.0, 2.0, 1.0]);
        assert_eq!(m.translation_part(), Vector::new(3.0, -1.0, 2.0));
    }

    #[test]
    fn test_column_major_layout() {
        let m = Matrix::translation(Vector::new(5.0, 6.0, 7.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(&floats[12..], &[5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        for row in 0..ORDER {
            for col in 0..ORDER {
                assert_eq!(m.get(row, col), t.get(col, row));
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_identity_multiplication() {
        let m = sample();
        assert_eq!(m * Matrix::IDENTITY, m);
        assert_eq!(Matrix::IDENTITY * m, m);
    }

    #[test]
    fn test_multiplication_order() {
        let translate = Matrix::translation(Vector::new(1.0, 0.0, 0.0));
        let scale = Matrix::scale(Vector::new(2.0, 2.0, 2.0));
        let p = Point::new(1.0, 1.0, 1.0);
        // Scale first, then translate.
        assert_abs_diff_eq!((translate * scale).transform_point(p), Point::new(3.0, 2.0, 2.0));
        // Translate first, then scale.
        assert_abs_diff_eq!((scale * translate).transform_point(p), Point::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let m = Matrix::translation(Vector::new(10.0, 20.0, 30.0));
        assert_eq!(m.transform_vector(Vector::X), Vector::X);
        assert_eq!(m.transform_point(Point::ORIGIN), Point::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_transform_point_projective_divide() {
        let m = Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        assert_abs_diff_eq!(
            m.transform_point(Point::new(2.0, 4.0, 6.0)),
            Point::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_determinant() {
        assert_relative_eq!(Matrix::IDENTITY.determinant(), 1.0);
        assert_relative_eq!(
            Matrix::scale(Vector::new(2.0, 3.0, 4.0)).determinant(),
            24.0,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            Matrix::rotation(Axis::X, 0.7).determinant(),
            1.0,
            epsilon = EPSILON
        );
        // 2 * (3 * 4 - 0 * 1) - 0 + 1 * (1 * 1 - 3 * 0) = 25
        assert_relative_eq!(sample().determinant(), 25.0, epsilon = 1e-4);
        assert_eq!(Matrix::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(inv * m, Matrix::IDENTITY, epsilon = 1e-5);

        let rotation = Matrix::rotation(Axis::Z, FRAC_PI_2);
        assert_abs_diff_eq!(rotation.inverse().unwrap(), rotation.transpose());
    }

    #[test]
    fn test_inverse_singular() {
        assert!(Matrix::ZERO.inverse().is_none());
        assert!(Matrix::scale(Vector::new(1.0, 0.0, 1.0)).inverse().is_none());

        // Rank three: the second row is three times the first.
        let dependent = Matrix::from_rows([
            [0.1, 0.2, 0.3, 0.0],
            [0.3, 0.6, 0.9, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(dependent.inverse().is_none());
    }

    #[test]
    fn test_inverse_of_small_scale() {
        let tiny = Matrix::scale(Vector::new(1e-6, 1e-6, 1e-6));
        assert!(tiny.determinant() != 0.0);
        let inv = tiny.inverse().unwrap();
        assert_relative_eq!(inv.get(0, 0), 1e6, max_relative = 1e-5);
        assert_relative_eq!(inv.get(2, 2), 1e6, max_relative = 1e-5);
        assert_abs_diff_eq!(tiny * inv, Matrix::IDENTITY, epsilon = 1e-5);

        let small = sample() * Matrix::scale(Vector::new(1e-4, 1e-4, 1e-4));
        assert_abs_diff_eq!(small * small.inverse().unwrap(), Matrix::IDENTITY, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at() {
        let view = Matrix::look_at(Point::new(0.0, 0.0, 5.0), Point::ORIGIN, Vector::Y).unwrap();
        assert_abs_diff_eq!(view.transform_point(Point::ORIGIN), Point::new(0.0, 0.0, -5.0));
        assert_abs_diff_eq!(view.transform_vector(Vector::X), Vector::X);
        assert!(Matrix::look_at(Point::ORIGIN, Point::ORIGIN, Vector::Y).is_none());
        assert!(Matrix::look_at(Point::ORIGIN, Point::new(0.0, 3.0, 0.0), Vector::Y).is_none());
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = Matrix::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        assert_abs_diff_eq!(proj.transform_point(Point::new(0.0, 0.0, -1.0)).z, 0.0);
        assert_abs_diff_eq!(proj.transform_point(Point::new(0.0, 0.0, -10.0)).z, 1.0);

        let ortho = Matrix::orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 4.0);
        assert_abs_diff_eq!(
            ortho.transform_point(Point::new(2.0, -1.0, -4.0)),
            Point::new(1.0, -1.0, 1.0)
        );
    }

    #[test]
    fn test_builder() {
        let m = Matrix::builder()
            .row(0, &Vector::new(1.0, 2.0, 3.0))
            .unwrap()
            .column(3, &Point::new(7.0, 8.0, 9.0))
            .unwrap()
            .set(3, 0, 5.0)
            .unwrap()
            .build();
        assert_eq!(m.row(0), [1.0, 2.0, 3.0, 7.0]);
        assert_eq!(m.column(3), [7.0, 8.0, 9.0, 1.0]);
        assert_eq!(m.get(3, 0), 5.0);
        assert_eq!(MatrixBuilder::new().build(), Matrix::ZERO);
    }

    #[test]
    fn test_builder_rejects_bad_index() {
        let mut builder = Matrix::builder();
        assert_eq!(
            builder.set(4, 0, 1.0).unwrap_err(),
            GeometryError::IndexOutOfBounds {
                index: 4,
                length: 4
            }
        );
        assert!(builder.row(9, &Vector::X).is_err());
        assert!(builder.column(4, &Vector::X).is_err());
    }
}
