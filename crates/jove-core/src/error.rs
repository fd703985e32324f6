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

//! Errors raised when a geometric value would violate its invariant.

use crate::geometry::Point;
use thiserror::Error;

/// An error returned by constructors that validate their arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A zero-length vector cannot be normalized.
    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    /// The minimum corner of a bounding box exceeds the maximum on some axis.
    #[error("Invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds {
        /// The requested minimum corner.
        min: Point,
        /// The requested maximum corner.
        max: Point,
    },

    /// Three points do not define a plane because they are collinear.
    #[error("Triangle vertices are collinear")]
    DegenerateTriangle,

    /// A lookup table size must be a non-zero power of two.
    #[error("Table size must be a non-zero power of two, got {0}")]
    InvalidTableSize(usize),

    /// A sphere radius must be finite and non-negative.
    #[error("Invalid sphere radius: {0}")]
    NegativeRadius(f32),

    /// A matrix row or column index is outside the matrix.
    #[error("Index {index} out of bounds for order {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The order of the matrix.
        length: usize,
    },
}
