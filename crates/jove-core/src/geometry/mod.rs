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

//! Points, vectors, transforms and the primitive shapes built on them.
//!
//! All value types are `Copy` and immutable in the sense that every operation
//! returns a new value. Angles are in radians and the coordinate system is
//! right-handed.

pub mod bounds;
pub mod matrix;
pub mod normal;
pub mod plane;
pub mod point;
pub mod quaternion;
pub mod ray;
pub mod rotation;
pub mod tuple;
pub mod vector;

pub use self::bounds::{Bounds, BoundsBuilder};
pub use self::matrix::{Matrix, MatrixBuilder};
pub use self::normal::{Axis, Normal};
pub use self::plane::{HalfSpace, Plane};
pub use self::point::Point;
pub use self::quaternion::Quaternion;
pub use self::ray::{Intersected, Intersection, Ray};
pub use self::rotation::{AxisAngle, Rotation};
pub use self::tuple::Tuple;
pub use self::vector::Vector;
